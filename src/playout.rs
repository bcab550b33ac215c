//! Randomized playouts.
//!
//! Plays complete games by picking uniformly among legal actions, recording
//! every action and the outcome. Used to soak-test the rules and for
//! benchmarking; it makes no attempt to play well. Games are independent, so
//! batches can be spread over a rayon thread pool.

use std::io::Write;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Action, GameState, PlayerId};
use crate::config::{ConfigError, GameConfig};
use crate::movegen::random_action;

/// Errors raised while running a batch of playouts.
#[derive(Debug, thiserror::Error)]
pub enum PlayoutError {
    #[error("barrier_probability must be within [0, 1], got {0}")]
    BadProbability(f64),

    #[error("invalid game config: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to write playout records: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode playout record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Settings for a batch of playouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayoutConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Stop a game after this many accepted actions.
    pub max_plies: usize,
    /// Chance of preferring a barrier placement over a move on each turn.
    pub barrier_probability: f64,
    /// Worker threads; 1 plays sequentially.
    pub threads: usize,
    /// Base seed; game `i` uses `seed + i`. 0 draws from entropy.
    pub seed: u64,
    /// Rules for each game.
    pub game: GameConfig,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        PlayoutConfig {
            num_games: 16,
            max_plies: 400,
            barrier_probability: 0.2,
            threads: 4,
            seed: 0,
            game: GameConfig::default(),
        }
    }
}

/// How a playout ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayoutEnd {
    /// A token reached its goal row.
    Won(PlayerId),
    /// The player to move had no legal action.
    Stalled(PlayerId),
    /// The ply limit was reached.
    PlyLimit,
}

/// Everything recorded about one playout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayoutRecord {
    pub game_id: usize,
    pub end: PlayoutEnd,
    pub plies: usize,
    pub barriers_placed: usize,
    pub actions: Vec<Action>,
}

impl PlayoutRecord {
    pub fn winner(&self) -> Option<PlayerId> {
        match self.end {
            PlayoutEnd::Won(p) => Some(p),
            _ => None,
        }
    }
}

fn rng_for(seed: u64, game_id: usize) -> SmallRng {
    if seed != 0 {
        SmallRng::seed_from_u64(seed.wrapping_add(game_id as u64))
    } else {
        SmallRng::from_entropy()
    }
}

/// Plays a single game to completion from the standard opening.
pub fn play_game(config: &PlayoutConfig, game_id: usize) -> Result<PlayoutRecord, PlayoutError> {
    let mut state = GameState::with_config(config.game)?;
    let mut rng = rng_for(config.seed, game_id);
    let mut actions = Vec::new();
    let mut barriers_placed = 0;

    let end = loop {
        if let Some(winner) = state.winner() {
            break PlayoutEnd::Won(winner);
        }
        if actions.len() >= config.max_plies {
            break PlayoutEnd::PlyLimit;
        }
        let player = state.active_player();
        let Some(action) = random_action(&state, &mut rng, config.barrier_probability) else {
            break PlayoutEnd::Stalled(player);
        };
        if let Err(e) = state.apply(player, action) {
            // Generated actions are pre-validated; treat a rejection as a stall.
            debug!(game_id, %action, error = %e, "generated action rejected");
            break PlayoutEnd::Stalled(player);
        }
        if matches!(action, Action::PlaceBarrier(..)) {
            barriers_placed += 1;
        }
        actions.push(action);
    };

    info!(game_id, ?end, plies = actions.len(), barriers_placed, "playout finished");
    Ok(PlayoutRecord {
        game_id,
        end,
        plies: actions.len(),
        barriers_placed,
        actions,
    })
}

/// Runs a batch of playouts, in parallel when `config.threads > 1`.
///
/// Records are returned in `game_id` order.
pub fn run_playouts(config: &PlayoutConfig) -> Result<Vec<PlayoutRecord>, PlayoutError> {
    if !(0.0..=1.0).contains(&config.barrier_probability) {
        return Err(PlayoutError::BadProbability(config.barrier_probability));
    }
    config.game.validate()?;

    if config.threads <= 1 {
        return (0..config.num_games).map(|i| play_game(config, i)).collect();
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;
    pool.install(|| {
        (0..config.num_games)
            .into_par_iter()
            .map(|i| play_game(config, i))
            .collect()
    })
}

/// Writes records as JSONL, one game per line.
pub fn write_jsonl<W: Write>(records: &[PlayoutRecord], out: &mut W) -> Result<(), PlayoutError> {
    for record in records {
        serde_json::to_writer(&mut *out, record)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
