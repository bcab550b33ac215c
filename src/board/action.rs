//! Player actions.
//!
//! A turn consists of exactly one action: move the token, or place a barrier.
//! Coordinates here are internal `(row, col)`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::barrier::Orientation;
use super::coord::Coord;

/// One turn's worth of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the token to a square.
    Move(Coord),

    /// Place a barrier of the given orientation on a barrier-grid cell.
    PlaceBarrier(Orientation, Coord),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(to) => write!(f, "move {}", to),
            Action::PlaceBarrier(o, at) => write!(f, "barrier {} {}", o.tag_char(), at),
        }
    }
}
