//! Barrier orientations, markers, and the 10x10 barrier grid.
//!
//! A horizontal marker at `(r, c)` blocks the edge above board square
//! `(r, c)`; a vertical marker at `(r, c)` blocks the edge to the left of it.
//! The outer ring (row 0, row 9, column 0, column 9) is filled at construction
//! so that moves off the board hit a barrier like any other.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::coord::{grid_index, Coord, BARRIER_GRID_SIZE};

/// Orientation of a placed barrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Returns the single-character tag (`h` or `v`).
    pub const fn tag_char(self) -> char {
        match self {
            Orientation::Horizontal => 'h',
            Orientation::Vertical => 'v',
        }
    }

    /// Parses an orientation from its single-character tag.
    pub fn from_tag_char(c: char) -> Option<Orientation> {
        match c {
            'h' => Some(Orientation::Horizontal),
            'v' => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

/// State of one barrier-grid cell.
///
/// Only ever moves forward: `None` -> `Horizontal | Vertical` -> `Both`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BarrierMark {
    #[default]
    None,
    Horizontal,
    Vertical,
    Both,
}

impl BarrierMark {
    /// Returns true if this marker blocks travel across an edge of the given orientation.
    pub const fn blocks(self, orientation: Orientation) -> bool {
        matches!(
            (self, orientation),
            (BarrierMark::Both, _)
                | (BarrierMark::Horizontal, Orientation::Horizontal)
                | (BarrierMark::Vertical, Orientation::Vertical)
        )
    }

    /// Returns true if the marker carries exactly the given orientation.
    pub const fn is_exactly(self, orientation: Orientation) -> bool {
        matches!(
            (self, orientation),
            (BarrierMark::Horizontal, Orientation::Horizontal)
                | (BarrierMark::Vertical, Orientation::Vertical)
        )
    }

    /// Marker that results from adding `orientation` to this one.
    ///
    /// Returns `None` when the orientation is already present.
    pub const fn with(self, orientation: Orientation) -> Option<BarrierMark> {
        match (self, orientation) {
            (BarrierMark::None, Orientation::Horizontal) => Some(BarrierMark::Horizontal),
            (BarrierMark::None, Orientation::Vertical) => Some(BarrierMark::Vertical),
            (BarrierMark::Horizontal, Orientation::Vertical)
            | (BarrierMark::Vertical, Orientation::Horizontal) => Some(BarrierMark::Both),
            _ => None,
        }
    }

    /// Single-character form used by the grid dump.
    pub const fn dump_char(self) -> char {
        match self {
            BarrierMark::None => '.',
            BarrierMark::Horizontal => 'h',
            BarrierMark::Vertical => 'v',
            BarrierMark::Both => '+',
        }
    }
}

/// The 10x10 grid of edge barriers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarrierGrid {
    cells: [[BarrierMark; BARRIER_GRID_SIZE]; BARRIER_GRID_SIZE],
}

impl BarrierGrid {
    /// Creates a grid with only the permanent boundary ring in place.
    ///
    /// The ring is laid down top row, left column, bottom row, right column in
    /// that order, so later passes overwrite shared corners; `(0, 0)` and
    /// `(9, 9)` are then forced to `Both`.
    pub fn with_boundary() -> Self {
        let mut cells = [[BarrierMark::None; BARRIER_GRID_SIZE]; BARRIER_GRID_SIZE];
        let last = BARRIER_GRID_SIZE - 1;
        for i in 0..last {
            cells[0][i] = BarrierMark::Horizontal;
        }
        for i in 0..last {
            cells[i][0] = BarrierMark::Vertical;
        }
        for i in 0..last {
            cells[last][i] = BarrierMark::Horizontal;
        }
        for i in 0..last {
            cells[i][last] = BarrierMark::Vertical;
        }
        cells[0][0] = BarrierMark::Both;
        cells[last][last] = BarrierMark::Both;
        BarrierGrid { cells }
    }

    /// Returns the marker at `coord`, or `BarrierMark::None` outside the grid.
    pub fn get(&self, coord: Coord) -> BarrierMark {
        grid_index(coord, BARRIER_GRID_SIZE)
            .map(|(r, c)| self.cells[r][c])
            .unwrap_or_default()
    }

    /// Returns true if the marker at `coord` blocks the given orientation.
    pub fn blocks(&self, coord: Coord, orientation: Orientation) -> bool {
        self.get(coord).blocks(orientation)
    }

    /// Overwrites the marker at `coord`. Ignored outside the grid.
    pub(crate) fn set(&mut self, coord: Coord, mark: BarrierMark) {
        if let Some((r, c)) = grid_index(coord, BARRIER_GRID_SIZE) {
            self.cells[r][c] = mark;
        }
    }

    /// Row-major view of every marker.
    pub fn rows(&self) -> &[[BarrierMark; BARRIER_GRID_SIZE]; BARRIER_GRID_SIZE] {
        &self.cells
    }

    /// Number of cells currently holding a given marker.
    pub fn count(&self, mark: BarrierMark) -> usize {
        self.cells.iter().flatten().filter(|m| **m == mark).count()
    }
}

impl Default for BarrierGrid {
    fn default() -> Self {
        Self::with_boundary()
    }
}

impl fmt::Display for BarrierGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Barrier grid:")?;
        for row in &self.cells {
            let line: String = row.iter().map(|m| m.dump_char()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
