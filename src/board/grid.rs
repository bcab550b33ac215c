//! The 9x9 token occupancy board.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::coord::{grid_index, Coord, BOARD_SIZE};
use super::player::PlayerId;

/// Contents of one board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Occupant {
    #[default]
    Empty,
    Occupied(PlayerId),
}

impl Occupant {
    pub const fn is_empty(self) -> bool {
        matches!(self, Occupant::Empty)
    }

    /// Single-character form used by the board dump.
    pub const fn dump_char(self) -> char {
        match self {
            Occupant::Empty => '.',
            Occupant::Occupied(PlayerId::One) => '1',
            Occupant::Occupied(PlayerId::Two) => '2',
        }
    }
}

/// Occupancy of every square, indexed `[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Occupant; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a board with no tokens on it.
    pub fn empty() -> Self {
        Board {
            squares: [[Occupant::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Returns the occupant at `coord`; squares off the board read as empty.
    pub fn get(&self, coord: Coord) -> Occupant {
        grid_index(coord, BOARD_SIZE)
            .map(|(r, c)| self.squares[r][c])
            .unwrap_or_default()
    }

    /// Returns true if a token sits on `coord`.
    pub fn is_occupied(&self, coord: Coord) -> bool {
        !self.get(coord).is_empty()
    }

    pub(crate) fn set(&mut self, coord: Coord, occupant: Occupant) {
        if let Some((r, c)) = grid_index(coord, BOARD_SIZE) {
            self.squares[r][c] = occupant;
        }
    }

    /// Row-major view of every square.
    pub fn rows(&self) -> &[[Occupant; BOARD_SIZE]; BOARD_SIZE] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().flatten().filter(|o| !o.is_empty()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Game board:")?;
        for row in &self.squares {
            let line: String = row.iter().map(|o| o.dump_char()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
