//! Integration tests for get-home
//!
//! These drive the board through its public API the way the frame loop does:
//! clicks in tile coordinates and small time steps.

use std::collections::HashSet;

use get_home::board::{Board, Phase, Side, legal_moves_from};
use get_home::computer::choose_move;
use get_home::constants::{GAME_OVER_PAUSE, T_CNT};
use get_home::geometry::Tile;
use get_home::render::TextSurface;
use get_home::shell::Shell;

// =============================================================================
// Helper functions
// =============================================================================

const DT: f32 = 1.0 / 60.0;

/// The bottom-left corner.
fn home() -> Tile {
    Tile::new(0, T_CNT - 1)
}

/// The top-right corner, the only opening from which home is one move away.
fn top_right() -> Tile {
    Tile::new(T_CNT - 1, 0)
}

fn click(board: &mut Board, tile: Tile) {
    board.handle_click(tile.x as i64, tile.y as i64);
}

/// Advance until the sliding piece comes to rest.
fn run_until_still(board: &mut Board) {
    for _ in 0..100_000 {
        if !board.is_moving() {
            return;
        }
        board.advance(DT);
    }
    panic!("piece never arrived");
}

/// Advance through the game-over pause, returning the seconds it took.
fn run_out_pause(board: &mut Board) -> f32 {
    let mut elapsed = 0.0;
    while board.is_game_over() {
        board.advance(DT);
        elapsed += DT;
        assert!(elapsed < GAME_OVER_PAUSE * 2.0, "pause never ended");
    }
    elapsed
}

/// A board where the computer opened on `col` and the human is to move.
fn human_to_move(col: usize) -> Board {
    let mut board = Board::with_seed(21);
    assert!(board.place_piece(Tile::new(col, 0)));
    assert_eq!(board.phase(), Phase::AwaitingMove(Side::Human));
    board
}

/// A board at the start of the second game, where the human places.
fn human_placing() -> Board {
    let mut board = human_to_move(T_CNT - 1);
    click(&mut board, home());
    run_until_still(&mut board);
    assert!(board.is_game_over());
    run_out_pause(&mut board);
    assert_eq!(board.phase(), Phase::Placing);
    assert_eq!(board.to_act(), Some(Side::Human));
    board
}

// =============================================================================
// Move generation
// =============================================================================

#[test]
fn test_legal_moves_are_the_three_rays() {
    for y in 0..T_CNT {
        for x in 0..T_CNT {
            let from = Tile::new(x, y);
            let moves = legal_moves_from(from);

            let unique: HashSet<Tile> = moves.iter().copied().collect();
            assert_eq!(unique.len(), moves.len(), "duplicates from {from}");

            let mut expected = HashSet::new();
            expected.extend((0..x).map(|a| Tile::new(a, y)));
            expected.extend((y + 1..T_CNT).map(|b| Tile::new(x, b)));
            expected.extend((1..T_CNT).filter(|d| *d <= x && y + d < T_CNT).map(|d| Tile::new(x - d, y + d)));
            assert_eq!(unique, expected, "wrong moves from {from}");
        }
    }
}

#[test]
fn test_bottom_left_corner_has_no_moves() {
    assert!(legal_moves_from(home()).is_empty());
}

#[test]
fn test_every_opening_has_moves() {
    for col in 0..T_CNT {
        let mut board = Board::with_seed(col as u64);
        assert!(board.place_piece(Tile::new(col, 0)));
        assert!(!board.legal_moves().is_empty());
        board.advance(DT);
        assert!(!board.is_game_over());
    }
}

// =============================================================================
// Turn and end-of-game state machine
// =============================================================================

#[test]
fn test_game_over_only_when_no_moves_remain() {
    let mut board = human_to_move(T_CNT - 1);

    // A move to a cell with moves left hands the turn over.
    click(&mut board, Tile::new(T_CNT - 1, 2));
    assert_eq!(board.phase(), Phase::Moving);
    run_until_still(&mut board);
    assert!(!board.is_game_over());
    assert_eq!(board.phase(), Phase::AwaitingMove(Side::Computer));
    assert!(!board.legal_moves().is_empty());

    // A move into the corner ends the game.
    let mut board = human_to_move(T_CNT - 1);
    click(&mut board, home());
    run_until_still(&mut board);
    assert_eq!(board.tile(), home());
    assert!(board.legal_moves().is_empty());
    assert_eq!(board.phase(), Phase::GameOver);
    assert_eq!(board.winner(), Some(Side::Human));
    assert_eq!(board.to_act(), None);
}

#[test]
fn test_game_over_pause_then_reset() {
    let mut board = human_to_move(T_CNT - 1);
    assert_eq!(board.starting_side(), Side::Human);
    click(&mut board, home());
    run_until_still(&mut board);

    // Clicks during the pause do nothing.
    let before = board.snapshot();
    click(&mut board, Tile::new(0, 0));
    assert_eq!(board.snapshot(), before);

    let elapsed = run_out_pause(&mut board);
    assert!(elapsed >= GAME_OVER_PAUSE - DT);

    // The computer opened the first game, so the human opens the second.
    assert!(!board.is_initialized());
    assert!(board.occupied_cells().is_empty());
    assert!(board.legal_moves().is_empty());
    assert_eq!(board.player(), Side::Human);
    assert_eq!(board.to_act(), Some(Side::Human));
    assert_eq!(board.starting_side(), Side::Computer);
}

#[test]
fn test_starting_side_alternates() {
    let mut board = human_placing();

    // Game two: the human opens in the top-right corner, the computer takes
    // the diagonal home.
    click(&mut board, top_right());
    assert_eq!(board.phase(), Phase::AwaitingMove(Side::Computer));
    for _ in 0..100_000 {
        if board.is_game_over() {
            break;
        }
        board.advance(DT);
    }
    assert_eq!(board.tile(), home());
    assert_eq!(board.winner(), Some(Side::Computer));

    run_out_pause(&mut board);
    assert_eq!(board.phase(), Phase::Placing);
    assert_eq!(board.player(), Side::Computer);
    assert!(board.occupied_cells().is_empty());

    // Game three: the computer opens on its own once it is done thinking.
    let mut elapsed = 0.0;
    while !board.is_initialized() && elapsed < 2.0 {
        board.advance(DT);
        elapsed += DT;
    }
    assert!(board.is_initialized());
    assert_eq!(board.phase(), Phase::AwaitingMove(Side::Human));
}

#[test]
fn test_human_placement_rules() {
    let mut board = human_placing();

    let before = board.snapshot();
    click(&mut board, Tile::new(3, 1));
    board.handle_click(-1, 0);
    board.handle_click(T_CNT as i64, 0);
    assert_eq!(board.snapshot(), before);

    click(&mut board, Tile::new(0, 0));
    assert!(board.is_initialized());
    assert_eq!(board.tile(), Tile::new(0, 0));
    assert_eq!(board.occupied_cells(), vec![Tile::new(0, 0)]);
    assert_eq!(board.legal_moves().len(), T_CNT - 1);
    assert_eq!(board.phase(), Phase::AwaitingMove(Side::Computer));
}

// =============================================================================
// Ignored input
// =============================================================================

#[test]
fn test_click_on_current_cell_is_ignored() {
    let mut board = human_to_move(5);
    let before = board.snapshot();
    click(&mut board, Tile::new(5, 0));
    assert_eq!(board.snapshot(), before);
}

#[test]
fn test_click_while_moving_is_ignored() {
    let mut board = human_to_move(5);
    click(&mut board, Tile::new(5, 3));
    board.advance(DT);
    assert!(board.is_moving());

    let before = board.snapshot();
    click(&mut board, Tile::new(4, 0));
    click(&mut board, Tile::new(5, 4));
    click(&mut board, Tile::new(5, 3));
    assert_eq!(board.snapshot(), before);
}

#[test]
fn test_illegal_and_out_of_turn_clicks_are_ignored() {
    let mut board = human_to_move(5);
    let before = board.snapshot();
    click(&mut board, Tile::new(6, 1));
    click(&mut board, Tile::new(T_CNT - 1, 0));
    board.handle_click(-3, 40);
    assert_eq!(board.snapshot(), before);

    // Computer's turn: human clicks are ignored, even legal-looking ones.
    click(&mut board, Tile::new(5, 2));
    run_until_still(&mut board);
    let before = board.snapshot();
    click(&mut board, Tile::new(5, 3));
    assert_eq!(board.snapshot(), before);
}

// =============================================================================
// Computer heuristic
// =============================================================================

#[test]
fn test_computer_always_goes_home_when_it_can() {
    for seed in 0..20 {
        let mut board = Board::with_seed(seed);
        assert!(board.place_piece(top_right()));
        assert!(board.legal_moves().contains(&home()));
        board.computer_move();
        run_until_still(&mut board);
        assert_eq!(board.tile(), home(), "seed {seed}");
    }
}

#[test]
fn test_computer_uses_losing_spot_table_in_order() {
    let mut board = Board::with_seed(5);
    assert!(board.place_piece(Tile::new(5, 0)));
    assert!(!board.legal_moves().contains(&home()));

    board.set_losing_spots(vec![Tile::new(6, 6), Tile::new(5, 4), Tile::new(2, 3)]);
    board.computer_move();
    run_until_still(&mut board);
    assert_eq!(board.tile(), Tile::new(5, 4));
}

#[test]
fn test_choose_move_priorities() {
    let mut rng = fastrand::Rng::with_seed(8);
    let table = [Tile::new(3, 3), Tile::new(1, 2)];

    let with_home = [Tile::new(1, 2), Tile::new(3, 3), home()];
    assert_eq!(choose_move(&with_home, &table, home(), &mut rng), Some(home()));

    let without_home = [Tile::new(1, 2), Tile::new(3, 3)];
    assert_eq!(choose_move(&without_home, &table, home(), &mut rng), Some(Tile::new(3, 3)));
}

#[test]
fn test_seeded_boards_play_identically() {
    let play = |seed| {
        let mut board = Board::with_seed(seed);
        let mut tiles = Vec::new();
        for _ in 0..20 {
            board.advance(DT);
            if board.to_act() == Some(Side::Human) {
                let target = board.legal_moves()[0];
                click(&mut board, target);
            }
            run_until_still(&mut board);
            tiles.push(board.tile());
            if board.is_game_over() {
                break;
            }
            board.advance(1.0);
        }
        (board.losing_spots().to_vec(), tiles)
    };
    assert_eq!(play(99), play(99));
}

// =============================================================================
// Shell
// =============================================================================

#[test]
fn test_shell_plays_through_pointer() {
    let mut board = Board::with_seed(2);
    assert!(board.place_piece(Tile::new(5, 0)));
    let mut shell = Shell::new(board, TextSurface::new());

    shell.pointer_down(Tile::new(5, 2).center());
    while shell.board().is_moving() {
        shell.advance_frame(DT);
    }
    assert_eq!(shell.board().tile(), Tile::new(5, 2));
    assert_eq!(shell.surface().tile_chars(Tile::new(5, 2))[1], 'B');
}
