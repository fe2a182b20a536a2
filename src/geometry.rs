//! Tile-space and pixel-space coordinates.
//!
//! A [`Tile`] is a discrete `(column, row)` cell with row 0 at the top.
//! A [`Vec2`] is a continuous pixel position used for drawing and for the
//! animated slide between tiles.
//!
//! Tiles also have a short text name: a column letter followed by a
//! 1-based row number counted from the top (`a1` is the top-left cell).

use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::constants::{T_CNT, TILE_F};

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tile {
    pub x: usize,
    pub y: usize,
}

impl Tile {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Build a tile from signed coordinates, rejecting anything off the grid.
    pub fn checked(x: i64, y: i64) -> Option<Self> {
        if in_bounds(x, y) {
            Some(Self::new(x as usize, y as usize))
        } else {
            None
        }
    }

    /// Top-left corner of this tile in pixels.
    pub fn to_pixels(self) -> Vec2 {
        Vec2::new(self.x as f32 * TILE_F, self.y as f32 * TILE_F)
    }

    /// Centre of this tile in pixels.
    pub fn center(self) -> Vec2 {
        self.to_pixels() + Vec2::new(TILE_F / 2.0, TILE_F / 2.0)
    }

    /// The tile whose top-left corner is nearest to `pos`.
    pub fn from_pixels(pos: Vec2) -> Self {
        let x = (pos.x / TILE_F).round().max(0.0) as usize;
        let y = (pos.y / TILE_F).round().max(0.0) as usize;
        Self::new(x, y)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", tile_name(*self))
    }
}

/// True when `(x, y)` lies on the grid.
pub fn in_bounds(x: i64, y: i64) -> bool {
    x >= 0 && y >= 0 && x < T_CNT as i64 && y < T_CNT as i64
}

/// A pixel-space vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length_sqr(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn dist_sqr(self, other: Vec2) -> f32 {
        (self - other).length_sqr()
    }

    /// Unit vector in the same direction; the zero vector stays zero.
    pub fn normalized(self) -> Self {
        let len = self.length_sqr().sqrt();
        if len == 0.0 {
            Self::ZERO
        } else {
            Self::new(self.x / len, self.y / len)
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Parse a tile name such as `"c4"` (column c, fourth row from the top).
///
/// Returns `None` for anything malformed or off the grid.
pub fn parse_tile(s: &str) -> Option<Tile> {
    let s = s.trim();
    let mut chars = s.chars();
    let col_char = chars.next()?.to_ascii_lowercase();
    if !col_char.is_ascii_lowercase() {
        return None;
    }
    let col = (col_char as u8 - b'a') as i64;
    let row: i64 = chars.as_str().parse().ok()?;
    Tile::checked(col, row - 1)
}

/// Name a tile the way [`parse_tile`] reads it.
pub fn tile_name(tile: Tile) -> String {
    let col = (b'a' + tile.x as u8) as char;
    format!("{col}{}", tile.y + 1)
}
