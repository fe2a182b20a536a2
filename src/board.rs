//! The board model: cells, the piece, legal moves and turn progression.
//!
//! A game runs through four phases:
//!
//! - **Placing**: the piece is not on the board yet. The side to act puts it
//!   somewhere on the top row.
//! - **AwaitingMove**: one side may slide the piece left, down, or down-left
//!   to any cell of its legal-move set.
//! - **Moving**: the piece slides across the board in pixel space. Nobody can
//!   act until it arrives.
//! - **GameOver**: the piece reached a cell without moves. After a short pause
//!   the board resets and the other side starts the next game.
//!
//! All state changes happen in [`Board::handle_click`] and [`Board::advance`].
//! Clicks that are out of turn, out of phase, or illegal are ignored without
//! touching any state.

use std::fmt;

use fastrand::Rng;

use crate::computer;
use crate::constants::{ARRIVAL_EPSILON, GAME_OVER_PAUSE, SPEED, T_CNT, THINK_DELAY};
use crate::geometry::{Tile, Vec2};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Computer,
    Human,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Computer => Side::Human,
            Side::Human => Side::Computer,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Computer => write!(f, "computer"),
            Side::Human => write!(f, "human"),
        }
    }
}

/// Where the game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Placing,
    AwaitingMove(Side),
    Moving,
    GameOver,
}

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    /// Checkerboard colour, fixed at creation.
    pub light: bool,
    /// Set while the piece rests here.
    pub occupied: bool,
}

/// Everything about a board except its random source.
///
/// Used to check that ignored input really changes nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub cells: Vec<Cell>,
    pub legal_moves: Vec<Tile>,
    pub losing_spots: Vec<Tile>,
    pub tile: Tile,
    pub pos: Vec2,
    pub target: Vec2,
    pub dir: Vec2,
    pub moving: bool,
    pub game_over: bool,
    pub initialized: bool,
    pub player: Side,
    pub to_act: Option<Side>,
    pub next_starter: Side,
    pub thinking: f32,
    pub game_over_timer: f32,
}

/// The game board and all rules.
pub struct Board {
    /// Row-major cells, `T_CNT * T_CNT` of them.
    cells: Vec<Cell>,
    legal_moves: Vec<Tile>,
    losing_spots: Vec<Tile>,
    home: Tile,
    /// Piece tile; only meaningful once initialized.
    tile: Tile,
    /// Piece position in pixels.
    pos: Vec2,
    target: Vec2,
    /// Unit direction of the current slide.
    dir: Vec2,
    moving: bool,
    game_over: bool,
    initialized: bool,
    /// Side whose turn it is.
    player: Side,
    /// Side allowed to act right now; `None` while a move resolves.
    to_act: Option<Side>,
    /// Side handed the first turn of the next game, before the swap.
    next_starter: Side,
    thinking: f32,
    game_over_timer: f32,
    rng: Rng,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a board with an unseeded random source.
    pub fn new() -> Self {
        Self::with_rng(Rng::new())
    }

    /// Create a board whose shuffles and random picks are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Rng::with_seed(seed))
    }

    pub fn with_rng(mut rng: Rng) -> Self {
        let losing_spots = computer::losing_spots(&mut rng);
        Self {
            cells: checkerboard(),
            legal_moves: Vec::new(),
            losing_spots,
            home: Tile::new(0, T_CNT - 1),
            tile: Tile::default(),
            pos: Vec2::ZERO,
            target: Vec2::ZERO,
            dir: Vec2::ZERO,
            moving: false,
            game_over: false,
            initialized: false,
            player: Side::Computer,
            to_act: Some(Side::Computer),
            next_starter: Side::Computer,
            thinking: 0.0,
            game_over_timer: 0.0,
            rng,
        }
    }

    // =========================================================================
    // Read-only state
    // =========================================================================

    /// The cell at `tile`, or `None` off the grid.
    pub fn cell(&self, tile: Tile) -> Option<Cell> {
        if tile.x >= T_CNT || tile.y >= T_CNT {
            return None;
        }
        Some(self.cells[idx(tile)])
    }

    /// Tiles whose occupied flag is set.
    pub fn occupied_cells(&self) -> Vec<Tile> {
        all_tiles().filter(|t| self.cells[idx(*t)].occupied).collect()
    }

    pub fn legal_moves(&self) -> &[Tile] {
        &self.legal_moves
    }

    pub fn losing_spots(&self) -> &[Tile] {
        &self.losing_spots
    }

    pub fn home(&self) -> Tile {
        self.home
    }

    pub fn tile(&self) -> Tile {
        self.tile
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Side whose turn it is.
    pub fn player(&self) -> Side {
        self.player
    }

    /// Side allowed to act right now.
    pub fn to_act(&self) -> Option<Side> {
        self.to_act
    }

    /// Side that will open the game after the next reset.
    pub fn starting_side(&self) -> Side {
        self.next_starter.other()
    }

    /// The side that moved into the terminal cell, once the game is over.
    pub fn winner(&self) -> Option<Side> {
        self.game_over.then(|| self.player.other())
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.moving {
            Phase::Moving
        } else if !self.initialized {
            Phase::Placing
        } else {
            Phase::AwaitingMove(self.player)
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.cells.clone(),
            legal_moves: self.legal_moves.clone(),
            losing_spots: self.losing_spots.clone(),
            tile: self.tile,
            pos: self.pos,
            target: self.target,
            dir: self.dir,
            moving: self.moving,
            game_over: self.game_over,
            initialized: self.initialized,
            player: self.player,
            to_act: self.to_act,
            next_starter: self.next_starter,
            thinking: self.thinking,
            game_over_timer: self.game_over_timer,
        }
    }

    /// Replace the computer's losing-spot table.
    pub fn set_losing_spots(&mut self, spots: Vec<Tile>) {
        self.losing_spots = spots;
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Human input at tile coordinates. Ignored unless it is the human's turn.
    pub fn handle_click(&mut self, x: i64, y: i64) {
        if self.player != Side::Human || self.game_over {
            return;
        }
        let Some(tile) = Tile::checked(x, y) else {
            return;
        };

        let accepted = if self.initialized {
            self.move_piece(tile)
        } else {
            self.place_piece(tile)
        };
        if accepted && self.moving {
            self.to_act = None;
        }
    }

    /// Put the piece on the top row and hand the turn over.
    ///
    /// Returns `false` without changing anything if the piece is already on
    /// the board or `tile` is not on row 0.
    pub fn place_piece(&mut self, tile: Tile) -> bool {
        if self.initialized || self.game_over || tile.y != 0 || tile.x >= T_CNT {
            return false;
        }

        self.initialized = true;
        self.tile = tile;
        self.pos = tile.to_pixels();
        self.cells[idx(tile)].occupied = true;
        self.update_legal_moves();
        self.next_player();
        true
    }

    /// Start sliding the piece toward `tile`.
    ///
    /// Returns `false` without changing anything if the piece is mid-slide,
    /// `tile` is the current cell, or `tile` is not a legal move.
    pub fn move_piece(&mut self, tile: Tile) -> bool {
        if !self.initialized || self.moving || tile == self.tile || !self.legal_moves.contains(&tile) {
            return false;
        }

        // The destination is not marked; only the departure is recorded.
        self.cells[idx(self.tile)].occupied = false;
        self.target = tile.to_pixels();
        self.dir = (self.target - self.pos).normalized();
        self.moving = true;
        true
    }

    /// Let the computer place or move, then re-arm its thinking delay.
    pub fn computer_move(&mut self) {
        if !self.initialized {
            let col = computer::start_column(&mut self.rng);
            self.place_piece(Tile::new(col, 0));
        } else if let Some(tile) =
            computer::choose_move(&self.legal_moves, &self.losing_spots, self.home, &mut self.rng)
        {
            self.move_piece(tile);
        }
        self.thinking = THINK_DELAY;
    }

    /// Advance the game by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if self.game_over {
            self.game_over_timer -= dt;
            if self.game_over_timer < 0.0 {
                self.reset();
            }
            return;
        }

        if self.to_act == Some(Side::Computer) {
            self.thinking -= dt;
            if self.thinking < 0.0 {
                self.to_act = None;
                self.computer_move();
            }
        }

        if !self.moving {
            return;
        }

        let step = dt * SPEED;
        let remaining = self.pos.dist_sqr(self.target);
        if step * step >= remaining {
            self.pos = self.target;
        } else {
            self.pos = self.pos + self.dir * step;
        }

        if self.pos.dist_sqr(self.target) < ARRIVAL_EPSILON {
            self.arrive();
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn arrive(&mut self) {
        self.pos = self.target;
        self.tile = Tile::from_pixels(self.pos);
        self.moving = false;
        self.next_player();
        self.update_legal_moves();

        if self.legal_moves.is_empty() {
            self.game_over = true;
            self.game_over_timer = GAME_OVER_PAUSE;
            self.to_act = None;
        }
    }

    fn reset(&mut self) {
        self.game_over = false;
        self.player = self.next_starter;
        self.next_starter = self.next_starter.other();
        self.cells[idx(self.tile)].occupied = false;
        self.legal_moves.clear();
        self.next_player();
        self.initialized = false;
    }

    fn next_player(&mut self) {
        self.player = self.player.other();
        self.to_act = Some(self.player);
    }

    fn update_legal_moves(&mut self) {
        self.legal_moves = legal_moves_from(self.tile);
    }
}

/// Cells reachable from `from`: leftward, then downward, then down-left,
/// each ray nearest first.
pub fn legal_moves_from(from: Tile) -> Vec<Tile> {
    let left = (0..from.x).rev().map(|x| Tile::new(x, from.y));
    let down = (from.y + 1..T_CNT).map(|y| Tile::new(from.x, y));
    let diagonal = (1..=from.x.min(T_CNT - 1 - from.y)).map(|d| Tile::new(from.x - d, from.y + d));
    left.chain(down).chain(diagonal).collect()
}

fn checkerboard() -> Vec<Cell> {
    all_tiles()
        .map(|t| Cell {
            light: (t.x + t.y) % 2 == 1,
            occupied: false,
        })
        .collect()
}

fn all_tiles() -> impl Iterator<Item = Tile> {
    (0..T_CNT).flat_map(|y| (0..T_CNT).map(move |x| Tile::new(x, y)))
}

fn idx(tile: Tile) -> usize {
    tile.y * T_CNT + tile.x
}
