//! Legal action generation.
//!
//! Enumerates every move and barrier placement the rules accept for a player
//! in the current state. Candidates are run through the same validators the
//! mutating path uses, so anything returned here will succeed when applied.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Action, Coord, GameState, Orientation, PlayerId, MAX_INDEX};
use crate::rules::{check_move, check_placement};

/// Every target a token could possibly reach in one turn: four steps, four
/// jumps, and four diagonals.
const MOVE_OFFSETS: [(i32, i32); 12] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-2, 0),
    (2, 0),
    (0, -2),
    (0, 2),
    (-1, -1),
    (-1, 1),
    (1, 1),
    (1, -1),
];

/// Returns every square `player`'s token may move to.
///
/// Empty when the game is over or it is not `player`'s turn.
pub fn legal_moves(state: &GameState, player: PlayerId) -> Vec<Coord> {
    let from = state.token_position(player);
    MOVE_OFFSETS
        .iter()
        .map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&to| check_move(state, player, to).is_ok())
        .collect()
}

/// Returns every barrier placement `player` may make.
///
/// Empty when the game is over, it is not `player`'s turn, or the player has
/// no barriers left.
pub fn legal_barriers(state: &GameState, player: PlayerId) -> Vec<(Orientation, Coord)> {
    let mut placements = Vec::new();
    for row in 0..=MAX_INDEX {
        for col in 0..=MAX_INDEX {
            let at = Coord::new(row, col);
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                if check_placement(state, player, orientation, at).is_ok() {
                    placements.push((orientation, at));
                }
            }
        }
    }
    placements
}

/// Returns every action `player` may take, moves first.
pub fn legal_actions(state: &GameState, player: PlayerId) -> Vec<Action> {
    let mut actions: Vec<Action> = legal_moves(state, player)
        .into_iter()
        .map(Action::Move)
        .collect();
    actions.extend(
        legal_barriers(state, player)
            .into_iter()
            .map(|(o, at)| Action::PlaceBarrier(o, at)),
    );
    actions
}

/// Picks a random legal action for the player to move.
///
/// With probability `barrier_probability` a barrier placement is chosen when
/// one is available; otherwise a token move. Falls back to the other kind when
/// the preferred one has no options. Returns `None` when the game is over or
/// the active player has nothing legal to do.
pub fn random_action<R: Rng>(
    state: &GameState,
    rng: &mut R,
    barrier_probability: f64,
) -> Option<Action> {
    if state.is_over() {
        return None;
    }
    let player = state.active_player();
    let moves = legal_moves(state, player);
    let barriers = legal_barriers(state, player);

    let pick_move = |rng: &mut R| moves.choose(rng).map(|&to| Action::Move(to));
    let pick_barrier =
        |rng: &mut R| barriers.choose(rng).map(|&(o, at)| Action::PlaceBarrier(o, at));

    if rng.gen_bool(barrier_probability.clamp(0.0, 1.0)) {
        pick_barrier(rng).or_else(|| pick_move(rng))
    } else {
        pick_move(rng).or_else(|| pick_barrier(rng))
    }
}
