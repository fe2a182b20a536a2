//! The computer opponent.
//!
//! This is a greedy heuristic, not a search:
//! 1. Move home if home is reachable.
//! 2. Otherwise move to the first reachable cell of the losing-spot table.
//! 3. Otherwise pick a random reachable cell, preferring ones the human cannot
//!    take straight home from.
//!
//! The losing-spot table samples the grid along two golden-ratio sequences
//! (the Wythoff pairs), which are the cells a player wants to leave the
//! opponent on. It is shuffled once per board, so it is a hint set rather than
//! a perfect strategy.

use fastrand::Rng;

use crate::constants::{COMPUTER_START_MIN, COMPUTER_START_SPAN, GR, MAX_RANDOM_PICKS, T_CNT};
use crate::geometry::Tile;

/// Build the shuffled losing-spot table.
pub fn losing_spots(rng: &mut Rng) -> Vec<Tile> {
    let gr2 = GR * GR;
    let cnt = (T_CNT - 1) as i64;
    let mut spots: Vec<Tile> = Vec::with_capacity(T_CNT * 2);

    for e in 0..T_CNT {
        let e = e as f64;
        let candidates = [
            ((e * GR) as i64, cnt - (e * gr2) as i64),
            ((e * gr2) as i64, cnt - (e * GR) as i64),
        ];
        for (x, y) in candidates {
            if let Some(tile) = Tile::checked(x, y) {
                if !spots.contains(&tile) {
                    spots.push(tile);
                }
            }
        }
    }

    rng.shuffle(&mut spots);
    spots
}

/// Column of the top row the computer places the piece on.
pub fn start_column(rng: &mut Rng) -> usize {
    COMPUTER_START_MIN + rng.usize(..COMPUTER_START_SPAN)
}

/// True for cells from which the opponent can reach home in one move.
fn gives_home_away(tile: Tile) -> bool {
    let last = T_CNT - 1;
    tile.x == 0 || tile.y == last || tile.x + tile.y == last
}

/// Pick a destination from `legal`, or `None` when there is nothing to pick.
pub fn choose_move(legal: &[Tile], losing_spots: &[Tile], home: Tile, rng: &mut Rng) -> Option<Tile> {
    if legal.is_empty() {
        return None;
    }

    if legal.contains(&home) {
        return Some(home);
    }

    if let Some(spot) = losing_spots.iter().find(|spot| legal.contains(spot)) {
        return Some(*spot);
    }

    let mut pick = legal[rng.usize(..legal.len())];
    let mut tries = 0;
    while gives_home_away(pick) && tries < MAX_RANDOM_PICKS {
        pick = legal[rng.usize(..legal.len())];
        tries += 1;
    }
    Some(pick)
}
