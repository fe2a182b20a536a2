//! Drawing the board onto a surface.
//!
//! [`draw`] only reads the board. It paints, in order: the checkerboard,
//! outlines around every legal move, an outline around home, the piece at its
//! pixel position, and the game-over banner.
//!
//! [`TextSurface`] is a character-grid surface for terminals. Each tile takes
//! three characters: a left outline, the fill or piece, and a right outline.

use std::fmt;

use crate::board::Board;
use crate::constants::{GAME_OVER_TEXT, PIECE_GLYPH, T_CNT, TILE_F};
use crate::geometry::{Tile, Vec2};

/// Gap between a tile edge and its outline, in pixels.
const OUTLINE_INSET: f32 = 4.0;

/// An axis-aligned rectangle in board pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    fn tile(tile: Tile) -> Rect {
        let p = tile.to_pixels();
        Rect { x: p.x, y: p.y, w: TILE_F, h: TILE_F }
    }

    fn outline(tile: Tile) -> Rect {
        let p = tile.to_pixels();
        let side = TILE_F - 2.0 * OUTLINE_INSET;
        Rect { x: p.x + OUTLINE_INSET, y: p.y + OUTLINE_INSET, w: side, h: side }
    }
}

/// Checkerboard fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

/// Outline style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    LegalMove,
    Home,
}

/// Something the board can be painted on. Coordinates are board pixels.
pub trait Surface {
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, shade: Shade);
    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke);
    /// Draw `glyph` in the tile-sized box whose top-left corner is `at`.
    fn draw_glyph(&mut self, at: Vec2, glyph: char);
    fn draw_banner(&mut self, text: &str);
}

/// Paint the whole board.
pub fn draw<S: Surface + ?Sized>(board: &Board, surface: &mut S) {
    for y in 0..T_CNT {
        for x in 0..T_CNT {
            let tile = Tile::new(x, y);
            let light = board.cell(tile).is_some_and(|c| c.light);
            let shade = if light { Shade::Light } else { Shade::Dark };
            surface.fill_rect(Rect::tile(tile), shade);
        }
    }

    for &tile in board.legal_moves() {
        surface.stroke_rect(Rect::outline(tile), Stroke::LegalMove);
    }
    surface.stroke_rect(Rect::outline(board.home()), Stroke::Home);

    if board.is_initialized() {
        surface.draw_glyph(board.pos(), PIECE_GLYPH);
    }

    if board.is_game_over() {
        surface.draw_banner(GAME_OVER_TEXT);
    }
}

/// Characters per tile on a [`TextSurface`].
const CHARS_PER_TILE: usize = 3;

/// A terminal rendition of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSurface {
    rows: Vec<Vec<char>>,
    banner: Option<String>,
}

impl Default for TextSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSurface {
    pub fn new() -> Self {
        Self {
            rows: vec![vec![' '; T_CNT * CHARS_PER_TILE]; T_CNT],
            banner: None,
        }
    }

    /// Characters of one tile: left outline, centre, right outline.
    pub fn tile_chars(&self, tile: Tile) -> [char; 3] {
        let row = &self.rows[tile.y];
        let c = tile.x * CHARS_PER_TILE;
        [row[c], row[c + 1], row[c + 2]]
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    fn set(&mut self, tile: Tile, offset: usize, ch: char) {
        self.rows[tile.y][tile.x * CHARS_PER_TILE + offset] = ch;
    }
}

/// Tile containing the pixel `p`, if any.
fn tile_at(p: Vec2) -> Option<Tile> {
    Tile::checked((p.x / TILE_F).floor() as i64, (p.y / TILE_F).floor() as i64)
}

impl Surface for TextSurface {
    fn clear(&mut self) {
        for row in &mut self.rows {
            row.fill(' ');
        }
        self.banner = None;
    }

    fn fill_rect(&mut self, rect: Rect, shade: Shade) {
        let first = tile_at(Vec2::new(rect.x, rect.y));
        let last = tile_at(Vec2::new(rect.x + rect.w - 1.0, rect.y + rect.h - 1.0));
        let (Some(first), Some(last)) = (first, last) else {
            return;
        };
        let ch = match shade {
            Shade::Light => '.',
            Shade::Dark => ':',
        };
        for y in first.y..=last.y {
            for x in first.x..=last.x {
                let tile = Tile::new(x, y);
                self.set(tile, 0, ' ');
                self.set(tile, 1, ch);
                self.set(tile, 2, ' ');
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        let Some(tile) = tile_at(rect.center()) else {
            return;
        };
        let (left, right) = match stroke {
            Stroke::LegalMove => ('[', ']'),
            Stroke::Home => ('<', '>'),
        };
        self.set(tile, 0, left);
        self.set(tile, 2, right);
    }

    fn draw_glyph(&mut self, at: Vec2, glyph: char) {
        let half = TILE_F / 2.0;
        if let Some(tile) = tile_at(at + Vec2::new(half, half)) {
            self.set(tile, 1, glyph);
        }
    }

    fn draw_banner(&mut self, text: &str) {
        self.banner = Some(text.to_string());
    }
}

impl fmt::Display for TextSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..T_CNT {
            write!(f, " {} ", (b'a' + x as u8) as char)?;
        }
        writeln!(f)?;

        for (y, row) in self.rows.iter().enumerate() {
            let line: String = row.iter().collect();
            writeln!(f, "{:>2} {}", y + 1, line.trim_end())?;
        }

        if let Some(banner) = &self.banner {
            let width = 3 + T_CNT * CHARS_PER_TILE;
            writeln!(f, "{banner:^width$}")?;
        }
        Ok(())
    }
}
