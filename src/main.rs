//! Get Home: slide the bishop home before the computer does.
//!
//! ## Usage
//!
//! - `get-home` - Play in the terminal
//! - `get-home play --seed 7` - Play with reproducible computer moves
//! - `get-home demo --games 5` - Watch a random player lose a few games

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use get_home::terminal::{self, Options};

/// Get Home: a tiny board game against the computer
#[derive(Parser)]
#[command(name = "get-home")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game in the terminal
    Play(PlayArgs),
    /// Play headless games with a random stand-in for the human
    Demo {
        /// Number of games to play
        #[arg(long, default_value_t = 3)]
        games: usize,
        /// Seed for every random choice
        #[arg(long)]
        seed: Option<u64>,
        /// Log phase transitions to stderr
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Args)]
struct PlayArgs {
    /// Frames per second of the game loop
    #[arg(long, default_value_t = 30)]
    fps: u32,
    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,
    /// Log phase transitions to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play(args)) => terminal::run(&Options {
            fps: args.fps,
            seed: args.seed,
            verbose: args.verbose,
        }),
        Some(Commands::Demo { games, seed, verbose }) => terminal::demo(games, seed, verbose),
        None => terminal::run(&Options::default()),
    }
}
