//! Game state representation.
//!
//! `GameState` is the aggregate root: it owns the token board, the barrier
//! grid, both players, whose turn it is, and whether the game has ended.
//! Tokens are reached only through their owning `Player`.

use serde::{Deserialize, Serialize};

use super::barrier::BarrierGrid;
use super::coord::Coord;
use super::grid::{Board, Occupant};
use super::player::{Player, PlayerId};
use crate::config::{ConfigError, GameConfig};

/// Column both tokens start on.
pub const START_COL: i32 = 4;

/// Whether the game is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
}

/// Complete state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) barriers: BarrierGrid,
    pub(crate) players: [Player; 2],
    pub(crate) active: PlayerId,
    pub(crate) status: GameStatus,
    pub(crate) config: GameConfig,
}

impl GameState {
    /// Creates a standard game: tokens on their home rows, ten barriers each,
    /// player one to move.
    pub fn new() -> Self {
        Self::setup(GameConfig::default())
    }

    /// Creates a game with the given settings, rejecting configs that fail
    /// [`GameConfig::validate`].
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::setup(config))
    }

    fn setup(config: GameConfig) -> Self {
        let mut board = Board::empty();
        let players = PlayerId::ALL.map(|id| {
            let start = Coord::new(id.start_row(), START_COL);
            board.set(start, Occupant::Occupied(id));
            Player::new(id, config.barriers_per_player, start)
        });
        GameState {
            board,
            barriers: BarrierGrid::with_boundary(),
            players,
            active: PlayerId::One,
            status: GameStatus::InProgress,
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn barriers(&self) -> &BarrierGrid {
        &self.barriers
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Current square of a player's token.
    pub fn token_position(&self, id: PlayerId) -> Coord {
        self.player(id).token().position()
    }

    /// Player whose turn it is.
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Returns the winner, if the game has ended.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won(p) => Some(p),
        }
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
