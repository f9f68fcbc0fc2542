//! The board engine: owns the grid and the side to move.
//!
//! [`Engine::place_stone`] is all-or-nothing. The stone is placed
//! tentatively, opposing groups left without liberties are collected, and the
//! suicide rule is checked against the board as it stands *before* those
//! captures are removed. A rejected move reverts the single touched cell, so
//! no full-board copy is needed.

use std::fmt;

use log::{debug, info};

use crate::board::{Board, Color, Point};
use crate::constants::N;
use crate::coord::str_coord;

/// Reason a placement was rejected. The engine is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Coordinates outside the board
    OutOfBounds,
    /// Point is not empty
    Occupied,
    /// Move captures nothing and leaves its own group without liberties
    Suicide,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds => write!(f, "illegal move: off the board"),
            MoveError::Occupied => write!(f, "illegal move: point not empty"),
            MoveError::Suicide => write!(f, "illegal move: suicide"),
        }
    }
}

impl std::error::Error for MoveError {}

/// A successfully played stone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub point: Point,
    pub color: Color,
    /// Opposing stones removed by this move, possibly none.
    pub captured: Vec<Point>,
}

#[derive(Clone, Debug)]
pub struct Engine {
    board: Board,
    turn: Color,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Empty board, Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Color::Black,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Color that plays next.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Play the side to move at `(x, y)`.
    ///
    /// # Errors
    /// - [`MoveError::OutOfBounds`] if `x` or `y` is not below the board size
    /// - [`MoveError::Occupied`] if the point already holds a stone
    /// - [`MoveError::Suicide`] if the move captures nothing and its group has no liberty
    pub fn place_stone(&mut self, x: usize, y: usize) -> Result<Placement, MoveError> {
        if x >= N || y >= N {
            debug!("rejected ({x}, {y}): off the board");
            return Err(MoveError::OutOfBounds);
        }
        let point = (x, y);
        if self.board.get(x, y).is_some() {
            debug!("rejected {}: occupied", str_coord(point));
            return Err(MoveError::Occupied);
        }

        let color = self.turn;
        self.board.set(point, Some(color));

        let captured = self.board.captured_by(point, color);
        if captured.is_empty() && !self.board.group_has_liberty(point, color) {
            self.board.set(point, None); // undo suicidal move
            debug!("rejected {} for {color}: suicide", str_coord(point));
            return Err(MoveError::Suicide);
        }

        for &pt in &captured {
            self.board.set(pt, None);
        }
        self.turn = color.opponent();

        debug!(
            "{color} played {}, captured {}",
            str_coord(point),
            captured.len()
        );
        Ok(Placement {
            point,
            color,
            captured,
        })
    }

    /// Clear the board and give Black the move.
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = Color::Black;
        info!("board reset");
    }
}
