//! Board coordinates.
//!
//! Internally every square is addressed as `(row, col)`. Callers outside the
//! engine speak `(col, row)`; [`Coord::from_external`] is the single place the
//! two orderings meet.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of rows and columns on the token board.
pub const BOARD_SIZE: usize = 9;

/// Number of rows and columns on the barrier grid (board plus boundary ring).
pub const BARRIER_GRID_SIZE: usize = BOARD_SIZE + 1;

/// Highest valid row or column index on the token board.
pub const MAX_INDEX: i32 = BOARD_SIZE as i32 - 1;

/// A square in internal `(row, col)` order.
///
/// Components are signed so that requests pointing off the board can be
/// represented and rejected instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Creates a coordinate from internal `(row, col)` components.
    pub const fn new(row: i32, col: i32) -> Self {
        Coord { row, col }
    }

    /// Converts an external `(col, row)` pair into internal order.
    pub const fn from_external((col, row): (i32, i32)) -> Self {
        Coord { row, col }
    }

    /// Returns this coordinate as an external `(col, row)` pair.
    pub const fn to_external(self) -> (i32, i32) {
        (self.col, self.row)
    }

    /// Returns the coordinate shifted by `(drow, dcol)`, saturating at the
    /// `i32` limits.
    pub const fn offset(self, drow: i32, dcol: i32) -> Self {
        Coord {
            row: self.row.saturating_add(drow),
            col: self.col.saturating_add(dcol),
        }
    }

    /// Returns true if the coordinate lies on the 9x9 token board.
    pub const fn on_board(self) -> bool {
        self.row >= 0 && self.row <= MAX_INDEX && self.col >= 0 && self.col <= MAX_INDEX
    }

    /// Signed `(drow, dcol)` from `self` to `target`.
    ///
    /// Saturates instead of overflowing, so any request coordinate is safe to
    /// compare against a token's square.
    pub const fn delta_to(self, target: Coord) -> (i32, i32) {
        (
            target.row.saturating_sub(self.row),
            target.col.saturating_sub(self.col),
        )
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(r{}, c{})", self.row, self.col)
    }
}

/// Converts a signed coordinate into grid indices if it lies in `0..size`.
pub(crate) fn grid_index(coord: Coord, size: usize) -> Option<(usize, usize)> {
    let row = usize::try_from(coord.row).ok()?;
    let col = usize::try_from(coord.col).ok()?;
    (row < size && col < size).then_some((row, col))
}
