//! Get Home: a small board game against a heuristic computer opponent.
//!
//! A single piece starts on the top row of a square grid. Each turn the
//! active player slides it left, down, or diagonally down-left as far as they
//! like. Whoever moves it into the bottom-left corner, where no moves remain,
//! wins.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions, timing and heuristic parameters
//! - [`geometry`] - Tile and pixel coordinates
//! - [`board`] - Game rules, turn progression and piece animation
//! - [`computer`] - The computer's move heuristic
//! - [`render`] - Drawing the board onto a surface
//! - [`shell`] - Frame driver and pointer translation
//! - [`terminal`] - Interactive and headless terminal front ends
//!
//! ## Example
//!
//! ```
//! use get_home::board::{Board, Phase, Side};
//! use get_home::geometry::Tile;
//!
//! let mut board = Board::with_seed(1);
//!
//! // The computer opens by placing the piece on the top row.
//! board.advance(0.1);
//! assert_eq!(board.phase(), Phase::AwaitingMove(Side::Human));
//!
//! // Slide it straight down one tile.
//! let below = Tile::new(board.tile().x, 1);
//! board.handle_click(below.x as i64, below.y as i64);
//! assert_eq!(board.phase(), Phase::Moving);
//! ```

pub mod board;
pub mod computer;
pub mod constants;
pub mod geometry;
pub mod render;
pub mod shell;
pub mod terminal;
