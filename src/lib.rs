//! Rules engine for a two-player token-and-barrier game on a 9x9 board.
//!
//! Each player moves a token toward the opposite baseline or places a barrier
//! on an edge of the grid. The crate validates requests and applies them to a
//! `GameState`; rendering, input parsing, and networking are left to callers,
//! which read the board through the accessors on `GameState`.
//!
//! Exposes the board representation, rule validators, the turn controller,
//! legal-action generation, and a randomized playout harness.

pub mod board;
pub mod config;
pub mod game;
pub mod movegen;
pub mod playout;
pub mod rules;

pub use board::{Action, Coord, GameState, GameStatus, Orientation, PlayerId};
pub use config::GameConfig;
pub use rules::RuleError;
