//! The frame driver.
//!
//! A [`Shell`] owns the board, the surface it is drawn on, and the frame
//! clock. Each frame it feeds the board a clamped time step and redraws;
//! pointer presses are turned into tile coordinates and handed to the board.

use std::time::Instant;

use crate::board::Board;
use crate::constants::{MAX_FRAME_STEP, TILE_F};
use crate::geometry::Vec2;
use crate::render::{Surface, draw};

pub struct Shell<S: Surface> {
    board: Board,
    surface: S,
    /// Device position of the board's top-left corner.
    origin: Vec2,
    last_frame: Option<Instant>,
}

impl<S: Surface> Shell<S> {
    pub fn new(board: Board, surface: S) -> Self {
        Self::with_origin(board, surface, Vec2::ZERO)
    }

    pub fn with_origin(board: Board, surface: S, origin: Vec2) -> Self {
        Self {
            board,
            surface,
            origin,
            last_frame: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Run one frame at wall-clock time `now`.
    pub fn frame(&mut self, now: Instant) {
        let dt = match self.last_frame {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => 0.0,
        };
        self.last_frame = Some(now);
        self.advance_frame(dt);
    }

    /// Run one frame with an explicit time step, clamped to `MAX_FRAME_STEP`.
    pub fn advance_frame(&mut self, dt: f32) {
        self.board.advance(dt.clamp(0.0, MAX_FRAME_STEP));
        self.surface.clear();
        draw(&self.board, &mut self.surface);
    }

    /// Forward a pointer press at device coordinates to the board.
    /// Non-finite coordinates are ignored.
    pub fn pointer_down(&mut self, device: Vec2) {
        let local = device - self.origin;
        if !local.x.is_finite() || !local.y.is_finite() {
            return;
        }
        let x = (local.x / TILE_F).floor() as i64;
        let y = (local.y / TILE_F).floor() as i64;
        self.board.handle_click(x, y);
    }
}
