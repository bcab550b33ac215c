//! Movement directions.
//!
//! A move's direction is derived from the sign of its row and column deltas.
//! Rows grow downward, so "up" is a negative row delta.

use serde::{Deserialize, Serialize};

/// Direction of travel from a token's square toward its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    NorthWest,
    NorthEast,
    SouthEast,
    SouthWest,
}

/// Indexed by `[sign(drow) + 1][sign(dcol) + 1]`.
const DIRECTION_TABLE: [[Option<Direction>; 3]; 3] = [
    [Some(Direction::NorthWest), Some(Direction::Up), Some(Direction::NorthEast)],
    [Some(Direction::Left), None, Some(Direction::Right)],
    [Some(Direction::SouthWest), Some(Direction::Down), Some(Direction::SouthEast)],
];

impl Direction {
    /// All four orthogonal directions.
    pub const ORTHOGONAL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// All four diagonal directions.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Resolves the direction of a `(drow, dcol)` delta.
    ///
    /// Diagonals win whenever both components are nonzero. Returns `None`
    /// for the zero delta.
    pub fn from_delta(drow: i32, dcol: i32) -> Option<Direction> {
        let r = (drow.signum() + 1) as usize;
        let c = (dcol.signum() + 1) as usize;
        DIRECTION_TABLE[r][c]
    }

    /// Unit `(drow, dcol)` step for this direction.
    pub const fn unit(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::NorthWest => (-1, -1),
            Direction::NorthEast => (-1, 1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
        }
    }

    /// Returns true for the four diagonal directions.
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::NorthWest | Direction::NorthEast | Direction::SouthEast | Direction::SouthWest
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_delta_has_no_direction() {
        assert_eq!(Direction::from_delta(0, 0), None);
    }

    #[test]
    fn orthogonal_deltas() {
        assert_eq!(Direction::from_delta(-1, 0), Some(Direction::Up));
        assert_eq!(Direction::from_delta(2, 0), Some(Direction::Down));
        assert_eq!(Direction::from_delta(0, -2), Some(Direction::Left));
        assert_eq!(Direction::from_delta(0, 5), Some(Direction::Right));
    }

    #[test]
    fn diagonal_takes_priority() {
        assert_eq!(Direction::from_delta(-1, -1), Some(Direction::NorthWest));
        assert_eq!(Direction::from_delta(-1, 1), Some(Direction::NorthEast));
        assert_eq!(Direction::from_delta(1, 1), Some(Direction::SouthEast));
        assert_eq!(Direction::from_delta(1, -1), Some(Direction::SouthWest));
        assert_eq!(Direction::from_delta(3, -2), Some(Direction::SouthWest));
    }

    #[test]
    fn unit_roundtrips_through_lookup() {
        for d in Direction::ORTHOGONAL.iter().chain(Direction::DIAGONAL.iter()) {
            let (dr, dc) = d.unit();
            assert_eq!(Direction::from_delta(dr, dc), Some(*d));
        }
    }
}
