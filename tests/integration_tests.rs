//! Integration tests for the board engine.
//!
//! Positions are built by playing real moves through the engine, with the
//! other side dropping "filler" stones far from the action.

use goban::board::{Board, Color, Point, Visited};
use goban::constants::N;
use goban::coord::parse_coord;
use goban::engine::{Engine, MoveError, Placement};
use goban::playout::{random_game, random_move};

// =============================================================================
// Helper functions for setting up positions
// =============================================================================

/// Play the moves in order, alternating colors from Black. Panics on an illegal move.
fn setup(moves: &[Point]) -> Engine {
    let mut engine = Engine::new();
    for &(x, y) in moves {
        if let Err(e) = engine.place_stone(x, y) {
            panic!("illegal setup move ({x}, {y}): {e}");
        }
    }
    engine
}

fn vertex(s: &str) -> Point {
    parse_coord(s).unwrap_or_else(|| panic!("bad vertex {s}"))
}

fn sorted(mut points: Vec<Point>) -> Vec<Point> {
    points.sort();
    points
}

/// Every group on the board must keep at least one liberty after a legal move.
fn assert_all_groups_breathe(board: &Board) {
    let mut visited = Visited::new();
    for (pt, _) in board.stones() {
        if visited.contains(pt) {
            continue;
        }
        let group = board.group(pt, &mut visited);
        assert!(group.has_liberty, "group at {pt:?} has no liberty:\n{board}");
    }
}

// =============================================================================
// Occupied and out-of-range rejections
// =============================================================================

#[test]
fn test_occupied_rejection_leaves_state_unchanged() {
    let mut engine = setup(&[(3, 3), (4, 4), (5, 5)]);
    let before = engine.board().clone();

    for pt in [(3, 3), (4, 4), (5, 5)] {
        assert_eq!(engine.place_stone(pt.0, pt.1), Err(MoveError::Occupied));
        assert_eq!(engine.board(), &before);
        assert_eq!(engine.turn(), Color::White);
    }
}

#[test]
fn test_out_of_range_rejection() {
    let mut engine = setup(&[(0, 0)]);
    let before = engine.board().clone();

    assert_eq!(engine.place_stone(N, N), Err(MoveError::OutOfBounds));
    assert_eq!(engine.place_stone(0, 100), Err(MoveError::OutOfBounds));
    assert_eq!(engine.board(), &before);
    assert_eq!(engine.turn(), Color::White);
}

// =============================================================================
// Suicide
// =============================================================================

#[test]
fn test_suicide_surrounded_point() {
    // White at (0,1), (2,1), (1,0), (1,2); Black fills in the far corner
    let mut engine = setup(&[
        (18, 18),
        (0, 1),
        (18, 16),
        (2, 1),
        (16, 18),
        (1, 0),
        (16, 16),
        (1, 2),
    ]);
    assert_eq!(engine.turn(), Color::Black);
    let before = engine.board().clone();

    assert_eq!(engine.place_stone(1, 1), Err(MoveError::Suicide));
    assert_eq!(engine.board(), &before);
    assert_eq!(engine.board().get(1, 1), None);
    assert_eq!(engine.turn(), Color::Black);
}

#[test]
fn test_suicide_of_multi_stone_group() {
    // Black (0,0) and the empty (1,0) are enclosed by White (2,0), (1,1), (0,1).
    // Black filling (1,0) would leave the pair without liberties.
    let mut engine = setup(&[(0, 0), (2, 0), (18, 18), (1, 1), (18, 16), (0, 1)]);
    assert_eq!(engine.turn(), Color::Black);

    assert_eq!(engine.place_stone(1, 0), Err(MoveError::Suicide));
    assert_eq!(engine.board().get(0, 0), Some(Color::Black));
    assert_eq!(engine.board().get(1, 0), None);
}

#[test]
fn test_connecting_move_with_outside_liberty_is_legal() {
    // Same shape as the suicide case, but the Black pair still reaches (0,1)
    let mut engine = setup(&[(0, 0), (2, 0), (18, 18), (1, 1)]);
    let placement = engine.place_stone(1, 0).expect("the pair keeps (0,1)");
    assert!(placement.captured.is_empty());
}

// =============================================================================
// Captures
// =============================================================================

#[test]
fn test_simple_corner_capture() {
    // White at (0,0); Black takes (1,0) and (0,1)
    let mut engine = setup(&[(1, 0), (0, 0), (10, 10)]);
    assert_eq!(engine.turn(), Color::White);
    engine.place_stone(18, 0).unwrap(); // White elsewhere

    let placement = engine.place_stone(0, 1).unwrap();
    assert_eq!(
        placement,
        Placement {
            point: (0, 1),
            color: Color::Black,
            captured: vec![(0, 0)],
        }
    );
    assert_eq!(engine.board().get(0, 0), None);
    assert_eq!(engine.board().count(Color::White), 1);
}

#[test]
fn test_multi_stone_group_captured_on_last_liberty() {
    // White pair (5,5)-(6,5) with six liberties
    let mut engine = setup(&[(4, 5), (5, 5), (7, 5), (6, 5)]);
    let fillers = [(18, 0), (18, 2), (18, 4)];
    let non_last = [(5, 4), (6, 4), (5, 6)];

    for (fill, filler) in non_last.iter().zip(fillers) {
        let placement = engine.place_stone(fill.0, fill.1).unwrap();
        assert!(placement.captured.is_empty(), "{fill:?} is not the last liberty");
        assert_eq!(engine.board().get(5, 5), Some(Color::White));
        assert_eq!(engine.board().get(6, 5), Some(Color::White));
        engine.place_stone(filler.0, filler.1).unwrap();
    }

    let placement = engine.place_stone(6, 6).unwrap();
    assert_eq!(sorted(placement.captured), vec![(5, 5), (6, 5)]);
    assert_eq!(engine.board().get(5, 5), None);
    assert_eq!(engine.board().get(6, 5), None);
}

#[test]
fn test_capture_two_groups_at_once() {
    // White (0,0) and (2,0) each in atari; Black at (1,0) captures both
    let mut engine = setup(&[
        (0, 1),
        (0, 0),
        (2, 1),
        (2, 0),
        (3, 0),
        (18, 18),
    ]);
    let placement = engine.place_stone(1, 0).unwrap();
    assert_eq!(sorted(placement.captured), vec![(0, 0), (2, 0)]);
    assert_eq!(engine.board().count(Color::White), 1);
}

#[test]
fn test_only_the_breathless_neighbor_group_is_captured() {
    // Black at (5,5) touches two White stones: one in atari, one with room.
    // Run both mirror images so the captured group is checked first and last.
    let mirror = |(x, y): Point| (10 - x, y);
    for flip in [false, true] {
        let at = |pt: Point| if flip { mirror(pt) } else { pt };
        let mut engine = setup(&[
            at((3, 5)),
            at((4, 5)),
            at((4, 4)),
            at((6, 5)),
            at((4, 6)),
            (18, 18),
        ]);
        let placement = engine.place_stone(5, 5).unwrap();

        let (dead, alive) = (at((4, 5)), at((6, 5)));
        assert_eq!(placement.captured, vec![dead], "flip = {flip}");
        assert_eq!(engine.board().get(dead.0, dead.1), None);
        assert_eq!(engine.board().get(alive.0, alive.1), Some(Color::White));
    }
}

#[test]
fn test_group_touching_placement_twice_reported_once() {
    // White L-shape (0,0),(1,0),(1,1); Black's last move at (0,1) touches it on two sides
    let mut engine = setup(&[
        (2, 0),
        (0, 0),
        (2, 1),
        (1, 0),
        (1, 2),
        (1, 1),
        (18, 18),
        (17, 0),
    ]);
    // Black to move; (1,1)'s remaining liberty is (0,1)
    let placement = engine.place_stone(0, 1).unwrap();
    assert_eq!(sorted(placement.captured), vec![(0, 0), (1, 0), (1, 1)]);
}

#[test]
fn test_self_capture_avoided_by_opponent_capture() {
    // White (1,0) is in atari between Black (2,0) and (1,1). Black at (0,0)
    // has no liberty of its own until (1,0) is removed.
    let mut engine = setup(&[(2, 0), (1, 0), (1, 1), (0, 1)]);
    let placement = engine.place_stone(0, 0).expect("capture makes it legal");
    assert_eq!(placement.captured, vec![(1, 0)]);
    assert_eq!(engine.board().get(0, 0), Some(Color::Black));
    assert_eq!(engine.board().get(1, 0), None);
    assert_eq!(engine.board().get(0, 1), Some(Color::White));
    assert_eq!(engine.turn(), Color::White);
}

#[test]
fn test_capture_in_vertex_notation() {
    // Surround a White stone on D4
    let mut engine = Engine::new();
    for v in ["C4", "D4", "E4", "Q16", "D3", "Q4"] {
        let (x, y) = vertex(v);
        engine.place_stone(x, y).unwrap();
    }
    let (x, y) = vertex("D5");
    let placement = engine.place_stone(x, y).unwrap();
    assert_eq!(placement.captured, vec![vertex("D4")]);
}

// =============================================================================
// Reset and turn alternation
// =============================================================================

#[test]
fn test_reset_is_idempotent() {
    let mut engine = setup(&[(3, 3), (15, 15), (3, 15)]);
    engine.reset();
    let once = engine.board().clone();
    let once_turn = engine.turn();

    engine.reset();
    assert_eq!(engine.board(), &once);
    assert_eq!(engine.turn(), once_turn);
    assert!(engine.board().is_empty());
    assert_eq!(engine.turn(), Color::Black);
}

#[test]
fn test_turn_flips_only_on_success() {
    let mut rng = fastrand::Rng::with_seed(2024);
    let mut engine = Engine::new();

    for _ in 0..2000 {
        let x = rng.usize(0..N + 2);
        let y = rng.usize(0..N + 2);
        let turn = engine.turn();
        let before = engine.board().clone();

        match engine.place_stone(x, y) {
            Ok(placement) => {
                assert_eq!(placement.color, turn);
                assert_eq!(engine.turn(), turn.opponent());
            }
            Err(_) => {
                assert_eq!(engine.turn(), turn);
                assert_eq!(engine.board(), &before);
            }
        }
    }
}

// =============================================================================
// Random play
// =============================================================================

#[test]
fn test_random_game_keeps_board_consistent() {
    let mut engine = Engine::new();
    let mut rng = fastrand::Rng::with_seed(99);
    let mut moves = 0;

    while moves < 400 {
        let Some((x, y)) = random_move(&engine, &mut rng) else {
            break;
        };
        let black = engine.board().count(Color::Black);
        let white = engine.board().count(Color::White);
        let placement = engine.place_stone(x, y).expect("random_move returns legal moves");

        let (mine, theirs) = match placement.color {
            Color::Black => (black, white),
            Color::White => (white, black),
        };
        assert_eq!(engine.board().count(placement.color), mine + 1);
        assert_eq!(
            engine.board().count(placement.color.opponent()),
            theirs - placement.captured.len()
        );
        assert_all_groups_breathe(engine.board());
        moves += 1;
    }
    assert!(moves > 0);
}

#[test]
fn test_random_game_is_reproducible() {
    let mut a = Engine::new();
    let mut b = Engine::new();
    let na = random_game(&mut a, &mut fastrand::Rng::with_seed(5), 150);
    let nb = random_game(&mut b, &mut fastrand::Rng::with_seed(5), 150);
    assert_eq!(na, nb);
    assert_eq!(a.board(), b.board());
    assert_eq!(a.turn(), b.turn());
}
