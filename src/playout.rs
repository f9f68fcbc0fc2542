//! Random play.
//!
//! Moves are drawn uniformly from the empty points and kept only if the
//! engine accepts them, so suicide points are skipped naturally. Seeding the
//! [`fastrand::Rng`] makes a game reproducible.

use fastrand::Rng;
use log::debug;

use crate::board::Point;
use crate::constants::N;
use crate::engine::Engine;

/// Pick a random legal move for the side to move, or `None` if there is none.
pub fn random_move(engine: &Engine, rng: &mut Rng) -> Option<Point> {
    let board = engine.board();
    let mut candidates: Vec<Point> = (0..N)
        .flat_map(|y| (0..N).map(move |x| (x, y)))
        .filter(|&(x, y)| board.get(x, y).is_none())
        .collect();
    rng.shuffle(&mut candidates);

    // Test each candidate on a scratch copy so the real engine stays untouched
    candidates.into_iter().find(|&(x, y)| {
        let mut scratch = engine.clone();
        scratch.place_stone(x, y).is_ok()
    })
}

/// Play random legal moves until none is left or `max_moves` have been played.
///
/// Returns the number of moves played.
pub fn random_game(engine: &mut Engine, rng: &mut Rng, max_moves: usize) -> usize {
    let mut played = 0;
    while played < max_moves {
        let Some((x, y)) = random_move(engine, rng) else {
            debug!("no legal move left for {}", engine.turn());
            break;
        };
        if engine.place_stone(x, y).is_err() {
            break;
        }
        played += 1;
    }
    played
}
