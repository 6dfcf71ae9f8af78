//! Board representation for Zobang

pub mod board;
pub mod position_set;

#[cfg(test)]
mod tests;

use std::fmt;

use crate::error::InvalidMove;

// Re-exports
pub use board::Board;
pub use position_set::PositionSet;

/// Cell state / stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Character used by the text rendering
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::White => 'X',
            Stone::Black => 'O',
            Stone::Empty => '.',
        }
    }
}

/// Position on the board. Ordered row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Validate raw coordinates against a board of side `size`.
    pub fn try_new(row: i32, col: i32, size: usize) -> Result<Self, InvalidMove> {
        if Self::is_valid(row, col, size) {
            Ok(Self::new(row as u8, col as u8))
        } else {
            Err(InvalidMove::OutOfBounds { row, col, size })
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, size: usize) -> bool {
        let size = size as i32;
        row >= 0 && row < size && col >= 0 && col < size
    }

    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    /// Step `steps` cells along `(dr, dc)`; `None` when leaving the board.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, steps: i32, size: usize) -> Option<Pos> {
        let r = i32::from(self.row) + dr * steps;
        let c = i32::from(self.col) + dc * steps;
        Self::is_valid(r, c, size).then(|| Pos::new(r as u8, c as u8))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four line directions through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right
    DiagonalDown,
    /// Top-right to bottom-left
    AntiDiagonal,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalDown,
        Axis::AntiDiagonal,
    ];

    /// Unit step `(dr, dc)` in the positive direction of the axis
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalDown => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}
