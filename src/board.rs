//! Grid storage, adjacency and group traversal.
//!
//! Groups are never stored. They are recomputed by flood fill whenever a
//! liberty or capture question comes up, using a packed index bitmap for the
//! visited set.

use std::fmt;

use crate::constants::{BOARD_POINTS, COLUMNS, N};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A board coordinate `(x, y)`, with `(0, 0)` at the top-left corner.
pub type Point = (usize, usize);

#[inline]
fn idx((x, y): Point) -> usize {
    y * N + x
}

/// Orthogonal neighbors of a point that lie on the board.
pub fn neighbors((x, y): Point) -> impl Iterator<Item = Point> {
    [
        x.checked_sub(1).map(|nx| (nx, y)),
        (x + 1 < N).then(|| (x + 1, y)),
        y.checked_sub(1).map(|ny| (x, ny)),
        (y + 1 < N).then(|| (x, y + 1)),
    ]
    .into_iter()
    .flatten()
}

/// Set of points already reached by a traversal.
pub struct Visited {
    seen: Vec<bool>,
}

impl Default for Visited {
    fn default() -> Self {
        Self::new()
    }
}

impl Visited {
    pub fn new() -> Self {
        Self {
            seen: vec![false; BOARD_POINTS],
        }
    }

    /// Marks `pt` as visited. Returns `false` if it already was.
    pub fn insert(&mut self, pt: Point) -> bool {
        !std::mem::replace(&mut self.seen[idx(pt)], true)
    }

    pub fn contains(&self, pt: Point) -> bool {
        self.seen[idx(pt)]
    }
}

/// A connected same-colored region found by [`Board::group`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Group {
    pub stones: Vec<Point>,
    pub has_liberty: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Option<Color>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: vec![None; BOARD_POINTS],
        }
    }

    /// Color of the stone at `(x, y)`, or `None` for an empty or off-board point.
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= N || y >= N {
            return None;
        }
        self.cells[idx((x, y))]
    }

    #[inline]
    fn cell(&self, pt: Point) -> Option<Color> {
        self.cells[idx(pt)]
    }

    pub(crate) fn set(&mut self, pt: Point, cell: Option<Color>) {
        self.cells[idx(pt)] = cell;
    }

    pub(crate) fn clear(&mut self) {
        self.cells.fill(None);
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// All stones on the board in row-major order.
    pub fn stones(&self) -> impl Iterator<Item = (Point, Color)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|color| ((i % N, i / N), color)))
    }

    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }

    /// Flood-fills the group containing `start` and reports its members and
    /// whether any of them touches an empty point.
    ///
    /// Every member is marked in `visited`, so callers walking several start
    /// points can skip groups they have already seen. An empty `start` yields
    /// an empty group.
    pub fn group(&self, start: Point, visited: &mut Visited) -> Group {
        let mut group = Group::default();
        let Some(color) = self.cell(start) else {
            return group;
        };

        visited.insert(start);
        let mut stack = vec![start];
        while let Some(pt) = stack.pop() {
            group.stones.push(pt);
            for n in neighbors(pt) {
                match self.cell(n) {
                    None => group.has_liberty = true,
                    Some(c) if c == color && visited.insert(n) => stack.push(n),
                    _ => {}
                }
            }
        }
        group
    }

    /// Whether the `color` group through `start` has at least one liberty.
    ///
    /// Stops at the first empty neighbor found.
    pub fn group_has_liberty(&self, start: Point, color: Color) -> bool {
        let mut visited = Visited::new();
        visited.insert(start);
        let mut stack = vec![start];
        while let Some(pt) = stack.pop() {
            for n in neighbors(pt) {
                match self.cell(n) {
                    None => return true,
                    Some(c) if c == color && visited.insert(n) => stack.push(n),
                    _ => {}
                }
            }
        }
        false
    }

    /// Opposing stones left without liberties next to a `color` stone at `pt`.
    ///
    /// Each adjacent opposing group is traversed once even when it touches
    /// `pt` from several sides. The board is not modified.
    pub fn captured_by(&self, pt: Point, color: Color) -> Vec<Point> {
        let mut visited = Visited::new();
        let mut captured = Vec::new();
        for n in neighbors(pt) {
            match self.cell(n) {
                Some(c) if c != color && !visited.contains(n) => {
                    let group = self.group(n, &mut visited);
                    if !group.has_liberty {
                        captured.extend(group.stones);
                    }
                }
                _ => {}
            }
        }
        captured
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for &c in COLUMNS {
            write!(f, "{} ", c as char)?;
        }
        writeln!(f)?;
        for y in 0..N {
            write!(f, "{:>2} ", N - y)?;
            for x in 0..N {
                let ch = match self.cell((x, y)) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
