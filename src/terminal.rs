//! Terminal front end.
//!
//! [`run`] plays an interactive game: a reader thread forwards stdin lines
//! over a channel, and the frame loop drains them, advances the shell and
//! reprints the board whenever the picture changes.
//!
//! [`demo`] plays whole games headless, with a random stand-in for the human.
//!
//! ## Commands
//!
//! - `<tile>` - click a tile by name, e.g. `e1` (column e, top row)
//! - `click <x> <y>` - click at raw device coordinates
//! - `help` - show the commands
//! - `quit` - leave the game

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use fastrand::Rng;

use crate::board::{Board, Phase, Side};
use crate::constants::T_CNT;
use crate::geometry::{Tile, Vec2, parse_tile};
use crate::render::TextSurface;
use crate::shell::Shell;

const HELP: &str = "\
commands:
  <tile>         click a tile, e.g. e1 (column e, top row)
  click <x> <y>  click at device pixel coordinates
  help           show this text
  quit           leave the game";

/// Clear the terminal and home the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Frame step used by the headless demo.
const DEMO_STEP: f32 = 1.0 / 60.0;

/// Frames the demo may spend on one game before giving up.
const DEMO_FRAME_LIMIT: usize = 1_000_000;

/// Settings for an interactive game.
#[derive(Debug, Clone)]
pub struct Options {
    pub fps: u32,
    pub seed: Option<u64>,
    pub verbose: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            fps: 30,
            seed: None,
            verbose: false,
        }
    }
}

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Pointer press at device coordinates.
    Click(Vec2),
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `None`.
///
/// Tile names are turned into a press at the tile's centre, offset by the
/// board's device `origin`.
pub fn parse_command(line: &str, origin: Vec2) -> Result<Option<Command>> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(first) = parts.first() else {
        return Ok(None);
    };

    let command = match first.to_lowercase().as_str() {
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "click" => {
            if parts.len() != 3 {
                bail!("usage: click <x> <y>");
            }
            let x: f32 = parts[1].parse().with_context(|| format!("invalid x: {}", parts[1]))?;
            let y: f32 = parts[2].parse().with_context(|| format!("invalid y: {}", parts[2]))?;
            if !x.is_finite() || !y.is_finite() {
                bail!("coordinates must be finite numbers");
            }
            Command::Click(Vec2::new(x, y))
        }
        name => match parse_tile(name) {
            Some(tile) if parts.len() == 1 => Command::Click(tile.center() + origin),
            _ => bail!("unknown command: {line}"),
        },
    };
    Ok(Some(command))
}

/// One-line description of whose turn it is.
fn status(board: &Board) -> String {
    match board.phase() {
        Phase::Placing | Phase::AwaitingMove(_) => match board.to_act() {
            Some(Side::Human) if !board.is_initialized() => "Your turn: place the piece on row 1.".to_string(),
            Some(Side::Human) => "Your turn: pick a bracketed tile.".to_string(),
            _ => "Computer is thinking...".to_string(),
        },
        Phase::Moving => "...".to_string(),
        Phase::GameOver => match board.winner() {
            Some(Side::Human) => "You got home first. You win!".to_string(),
            Some(Side::Computer) => "The computer got home first.".to_string(),
            None => String::new(),
        },
    }
}

/// True when the game cannot progress without human input.
fn waiting_on_human(board: &Board) -> bool {
    board.is_game_over() || board.to_act() == Some(Side::Human)
}

/// Play an interactive game on stdin/stdout until `quit` or end of input.
pub fn run(opts: &Options) -> Result<()> {
    let board = opts.seed.map_or_else(Board::new, Board::with_seed);
    let mut shell = Shell::new(board, TextSurface::new());

    let (tx, rx) = mpsc::channel::<String>();
    thread::Builder::new()
        .name("stdin".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        })
        .context("failed to spawn stdin reader")?;

    let frame_time = Duration::from_secs_f64(1.0 / f64::from(opts.fps.max(1)));
    let mut stdout = io::stdout();
    let mut message = HELP.to_string();
    let mut last_screen = String::new();
    let mut last_phase = shell.board().phase();
    let mut input_closed = false;

    loop {
        let started = Instant::now();

        while !input_closed {
            let line = match rx.try_recv() {
                Ok(line) => line,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    input_closed = true;
                    break;
                }
            };
            match parse_command(&line, shell.origin()) {
                Ok(Some(Command::Click(at))) => {
                    message.clear();
                    shell.pointer_down(at);
                }
                Ok(Some(Command::Help)) => message = HELP.to_string(),
                Ok(Some(Command::Quit)) => return Ok(()),
                Ok(None) => {}
                Err(e) => message = format!("{e:#}"),
            }
        }

        shell.frame(started);

        let phase = shell.board().phase();
        if opts.verbose && phase != last_phase {
            eprintln!("phase: {last_phase:?} -> {phase:?}");
        }
        last_phase = phase;

        let screen = format!("{}{}\n{}\n", shell.surface(), status(shell.board()), message);
        if screen != last_screen {
            write!(stdout, "{CLEAR_SCREEN}{screen}> ").context("failed to write to stdout")?;
            stdout.flush().context("failed to flush stdout")?;
            last_screen = screen;
        }

        // Without more input, stay until nobody but the human could act.
        if input_closed && waiting_on_human(shell.board()) {
            writeln!(stdout).context("failed to write to stdout")?;
            return Ok(());
        }

        thread::sleep(frame_time.saturating_sub(started.elapsed()));
    }
}

/// Outcome of one headless game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoGame {
    pub starter: Side,
    pub winner: Side,
    pub moves: usize,
}

/// Play `games` complete games with random human clicks.
pub fn play_demo(games: usize, seed: Option<u64>, verbose: bool) -> Result<Vec<DemoGame>> {
    let mut rng = seed.map_or_else(Rng::new, Rng::with_seed);
    let board = Board::with_rng(rng.fork());
    let mut shell = Shell::new(board, TextSurface::new());
    let mut results = Vec::with_capacity(games);

    for _ in 0..games {
        // Let the previous game's pause run out.
        let mut frames = 0;
        while shell.board().phase() != Phase::Placing {
            shell.advance_frame(DEMO_STEP);
            frames += 1;
            if frames > DEMO_FRAME_LIMIT {
                bail!("board never reset after game over");
            }
        }

        let starter = shell.board().player();
        let mut moves = 0;
        let mut last_phase = shell.board().phase();
        let mut frames = 0;

        while !shell.board().is_game_over() {
            if shell.board().to_act() == Some(Side::Human) {
                let tile = random_human_choice(shell.board(), &mut rng);
                shell.pointer_down(tile.center() + shell.origin());
            }
            shell.advance_frame(DEMO_STEP);

            let phase = shell.board().phase();
            if phase == Phase::Moving && last_phase != Phase::Moving {
                moves += 1;
            }
            if verbose && phase != last_phase {
                eprintln!("phase: {last_phase:?} -> {phase:?}");
            }
            last_phase = phase;

            frames += 1;
            if frames > DEMO_FRAME_LIMIT {
                bail!("game did not finish within {DEMO_FRAME_LIMIT} frames");
            }
        }

        let winner = shell.board().winner().context("finished game has no winner")?;
        results.push(DemoGame { starter, winner, moves });
    }

    Ok(results)
}

/// Print the outcome of `games` headless games.
pub fn demo(games: usize, seed: Option<u64>, verbose: bool) -> Result<()> {
    println!("get-home: {games} demo game(s), random human vs computer\n");
    let results = play_demo(games, seed, verbose)?;
    for (i, game) in results.iter().enumerate() {
        println!(
            "game {}: {} started, {} wins after {} moves",
            i + 1,
            game.starter,
            game.winner,
            game.moves
        );
    }
    let computer_wins = results.iter().filter(|g| g.winner == Side::Computer).count();
    println!("\ncomputer {computer_wins}, human {}", results.len() - computer_wins);
    Ok(())
}

fn random_human_choice(board: &Board, rng: &mut Rng) -> Tile {
    if !board.is_initialized() {
        return Tile::new(rng.usize(..T_CNT), 0);
    }
    let legal = board.legal_moves();
    legal[rng.usize(..legal.len())]
}
