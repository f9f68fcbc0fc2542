//! Constants for board geometry and the front-ends.

/// Board size (NxN).
pub const N: usize = 19;

/// Total number of points on the board.
pub const BOARD_POINTS: usize = N * N;

/// Default width of one grid cell in pixels for [`crate::coord::pixel_to_point`].
/// Embedding front-ends with a different canvas pass their own cell size.
pub const CELL_SIZE: f64 = 32.0;

/// Upper bound on moves played by a random game, so the demo always ends.
pub const MAX_GAME_LEN: usize = BOARD_POINTS * 3;

/// Column letters for vertex notation. 'I' is skipped by Go convention.
pub const COLUMNS: &[u8; N] = b"ABCDEFGHJKLMNOPQRST";
