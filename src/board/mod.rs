//! Board representation and game-state types.
//!
//! Contains the coordinate system, the token board, the barrier grid,
//! players and tokens, actions, and the overall game state.

pub mod action;
pub mod barrier;
pub mod coord;
pub mod direction;
pub mod grid;
pub mod player;
pub mod state;

pub use action::Action;
pub use barrier::{BarrierGrid, BarrierMark, Orientation};
pub use coord::{Coord, BARRIER_GRID_SIZE, BOARD_SIZE, MAX_INDEX};
pub use direction::Direction;
pub use grid::{Board, Occupant};
pub use player::{Player, PlayerId, Token};
pub use state::{GameState, GameStatus, START_COL};
