//! goban: a 19x19 Go board engine.
//!
//! The engine places stones, resolves captures and rejects suicide moves.
//! It has no ko rule, no passing and no scoring.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and front-end defaults
//! - [`board`] - Grid storage, adjacency and group traversal
//! - [`engine`] - Move legality, captures and the side to move
//! - [`coord`] - Vertex names and pixel-to-point mapping
//! - [`playout`] - Random legal moves
//! - [`gtp`] - Go Text Protocol front-end
//! - [`logger`] - Logger setup for the binary
//!
//! ## Example
//!
//! ```
//! use goban::board::Color;
//! use goban::engine::{Engine, MoveError};
//!
//! let mut engine = Engine::new();
//! engine.place_stone(1, 0).unwrap(); // Black
//! engine.place_stone(0, 0).unwrap(); // White in the corner
//! let placement = engine.place_stone(0, 1).unwrap(); // Black captures
//! assert_eq!(placement.captured, vec![(0, 0)]);
//!
//! // White cannot play back into the corner: it would have no liberties
//! assert_eq!(engine.place_stone(0, 0), Err(MoveError::Suicide));
//! assert_eq!(engine.turn(), Color::White);
//! ```

pub mod board;
pub mod constants;
pub mod coord;
pub mod engine;
pub mod gtp;
pub mod logger;
pub mod playout;
