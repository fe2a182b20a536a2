//! Constants for board dimensions, timing, and the computer heuristic.
//!
//! Everything here is fixed at compile time. The pixel size of the board and
//! the tile size determine the grid dimension `T_CNT`.
//!
//! # Board Size Configuration
//!
//! The board size is controlled by Cargo features:
//! - `board16` (default): 800px board, 16x16 tiles
//! - `board8`: 400px board, 8x8 tiles
//!
//! To compile for a specific board size:
//! ```sh
//! cargo build                                          # 16x16 (default)
//! cargo build --no-default-features --features board8  # 8x8
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Board edge length in pixels.
#[cfg(feature = "board16")]
pub const SIZE: usize = 800;

#[cfg(feature = "board8")]
pub const SIZE: usize = 400;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(all(feature = "board16", feature = "board8"))]
compile_error!("Cannot enable both 'board16' and 'board8' features at the same time");

#[cfg(not(any(feature = "board16", feature = "board8")))]
compile_error!("Must enable exactly one board size feature: 'board16' or 'board8'");

/// Tile edge length in pixels.
pub const TILE: usize = 50;

/// Number of tiles along each edge of the board.
pub const T_CNT: usize = SIZE / TILE;

/// Tile edge length as a float, for pixel-space math.
pub const TILE_F: f32 = TILE as f32;

// The computer's opening column range below needs at least six columns.
const _: () = assert!(T_CNT >= 6, "board must be at least 6 tiles wide");

// =============================================================================
// Timing
// =============================================================================

/// Piece speed in pixels per second.
pub const SPEED: f32 = 150.0;

/// Seconds the computer waits before acting on its turn.
pub const THINK_DELAY: f32 = 1.0;

/// Seconds the "game over" banner stays up before the board resets.
pub const GAME_OVER_PAUSE: f32 = 3.0;

/// Largest frame delta fed to the model, in seconds.
pub const MAX_FRAME_STEP: f32 = 0.25;

/// Squared pixel distance under which a moving piece counts as arrived.
pub const ARRIVAL_EPSILON: f32 = 2.0;

// =============================================================================
// Computer Heuristic
// =============================================================================

/// Golden ratio used to sample the losing-spot table.
pub const GR: f64 = 1.618033;

/// Leftmost column the computer opens on.
pub const COMPUTER_START_MIN: usize = 4;

/// Number of columns the computer may open on, starting at `COMPUTER_START_MIN`.
pub const COMPUTER_START_SPAN: usize = T_CNT - 5;

/// Re-sample bound when picking a random fallback move.
pub const MAX_RANDOM_PICKS: usize = 500;

// =============================================================================
// Drawing
// =============================================================================

/// Glyph drawn for the piece.
pub const PIECE_GLYPH: char = 'B';

/// Banner shown while the game-over pause runs.
pub const GAME_OVER_TEXT: &str = "GAME OVER!";
