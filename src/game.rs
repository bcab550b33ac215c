//! Turn, win, and game-loop control.
//!
//! The only code that mutates a `GameState`. Each request is fully validated
//! by [`crate::rules`] first; the state changes only when every check passes,
//! and the turn passes to the opponent exactly once per accepted request.
//!
//! Two API flavors are offered. The `try_*` methods and [`GameState::apply`]
//! return a [`RuleError`] on rejection. [`GameState::move_token`] and
//! [`GameState::place_barrier`] return a plain `bool` and log the reason.
//! Methods taking a `(i32, i32)` tuple expect external `(col, row)` order;
//! methods taking a [`Coord`] expect internal `(row, col)` order.

use tracing::{debug, info, instrument, warn};

use crate::board::{Action, Coord, GameState, GameStatus, Occupant, Orientation, PlayerId};
use crate::rules::{check_move, check_placement, RuleError};

impl GameState {
    /// Moves `player`'s token to `target`, given in external `(col, row)` order.
    pub fn try_move_token(&mut self, player: PlayerId, target: (i32, i32)) -> Result<(), RuleError> {
        self.try_move_to(player, Coord::from_external(target))
    }

    /// Moves `player`'s token to `to`, given in internal `(row, col)` order.
    #[instrument(level = "debug", skip(self))]
    pub fn try_move_to(&mut self, player: PlayerId, to: Coord) -> Result<(), RuleError> {
        check_move(self, player, to)?;

        let from = self.token_position(player);
        self.board.set(from, Occupant::Empty);
        self.board.set(to, Occupant::Occupied(player));
        self.player_mut(player).token_mut().set_position(to);
        debug!(%player, %from, %to, "token moved");

        self.check_win(player, to);
        self.end_turn(player);
        Ok(())
    }

    /// Boolean form of [`GameState::try_move_token`].
    pub fn move_token(&mut self, player: PlayerId, target: (i32, i32)) -> bool {
        match self.try_move_token(player, target) {
            Ok(()) => true,
            Err(reason) => {
                warn!(%player, ?target, %reason, "move rejected");
                false
            }
        }
    }

    /// Places a barrier at `target`, given in external `(col, row)` order.
    pub fn try_place_barrier(
        &mut self,
        player: PlayerId,
        orientation: Orientation,
        target: (i32, i32),
    ) -> Result<(), RuleError> {
        self.try_place_at(player, orientation, Coord::from_external(target))
    }

    /// Places a barrier at `at`, given in internal `(row, col)` order.
    #[instrument(level = "debug", skip(self))]
    pub fn try_place_at(
        &mut self,
        player: PlayerId,
        orientation: Orientation,
        at: Coord,
    ) -> Result<(), RuleError> {
        let mark = check_placement(self, player, orientation, at)?;

        if !self.player_mut(player).spend_barrier() {
            return Err(RuleError::NoBarriersRemaining);
        }
        self.barriers.set(at, mark);
        debug!(
            %player,
            %at,
            ?mark,
            remaining = self.player(player).barriers_remaining(),
            "barrier placed"
        );

        self.end_turn(player);
        Ok(())
    }

    /// Boolean form of [`GameState::try_place_barrier`].
    pub fn place_barrier(
        &mut self,
        player: PlayerId,
        orientation: Orientation,
        target: (i32, i32),
    ) -> bool {
        match self.try_place_barrier(player, orientation, target) {
            Ok(()) => true,
            Err(reason) => {
                warn!(%player, orientation = %orientation.tag_char(), ?target, %reason, "barrier rejected");
                false
            }
        }
    }

    /// Applies one action for `player`. Coordinates are internal.
    pub fn apply(&mut self, player: PlayerId, action: Action) -> Result<(), RuleError> {
        match action {
            Action::Move(to) => self.try_move_to(player, to),
            Action::PlaceBarrier(orientation, at) => self.try_place_at(player, orientation, at),
        }
    }

    /// Returns true if `player` has won.
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.status == GameStatus::Won(player)
    }

    /// Records a win if `player`'s token has reached its goal row.
    fn check_win(&mut self, player: PlayerId, at: Coord) {
        if at.row == player.goal_row() {
            self.status = GameStatus::Won(player);
            info!(winner = %player, "game won");
        }
    }

    fn end_turn(&mut self, player: PlayerId) {
        self.active = player.opponent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BarrierMark;

    #[test]
    fn move_uses_external_order() {
        let mut state = GameState::new();
        assert!(state.move_token(PlayerId::One, (4, 1)));
        assert_eq!(state.token_position(PlayerId::One), Coord::new(1, 4));
        assert!(state.board().get(Coord::new(0, 4)).is_empty());
        assert_eq!(state.board().get(Coord::new(1, 4)), Occupant::Occupied(PlayerId::One));
        assert_eq!(state.active_player(), PlayerId::Two);
    }

    #[test]
    fn move_with_internal_order() {
        let mut state = GameState::new();
        assert_eq!(state.try_move_to(PlayerId::One, Coord::new(1, 4)), Ok(()));
        assert_eq!(state.token_position(PlayerId::One), Coord::new(1, 4));
    }

    #[test]
    fn rejected_move_keeps_turn() {
        let mut state = GameState::new();
        assert!(!state.move_token(PlayerId::Two, (4, 7)));
        assert_eq!(state.active_player(), PlayerId::One);
        assert!(!state.move_token(PlayerId::One, (4, 2)));
        assert_eq!(state.active_player(), PlayerId::One);
        assert_eq!(state.token_position(PlayerId::One), Coord::new(0, 4));
    }

    #[test]
    fn placement_spends_barrier_and_passes_turn() {
        let mut state = GameState::new();
        assert_eq!(state.try_place_barrier(PlayerId::One, Orientation::Horizontal, (4, 1)), Ok(()));
        assert_eq!(state.barriers().get(Coord::new(1, 4)), BarrierMark::Horizontal);
        assert_eq!(state.player(PlayerId::One).barriers_remaining(), 9);
        assert_eq!(state.active_player(), PlayerId::Two);
    }

    #[test]
    fn player_two_win_is_credited_to_player_two() {
        let mut state = GameState::new();
        state.board.set(Coord::new(8, 4), Occupant::Empty);
        state.board.set(Coord::new(1, 4), Occupant::Occupied(PlayerId::Two));
        state.player_mut(PlayerId::Two).token_mut().set_position(Coord::new(1, 4));
        state.active = PlayerId::Two;

        // Player one sits on the boundary, so the jump is walled off and the
        // side-step lands on player two's goal row.
        assert_eq!(state.try_move_to(PlayerId::Two, Coord::new(0, 3)), Ok(()));
        assert!(state.is_winner(PlayerId::Two));
        assert!(!state.is_winner(PlayerId::One));
        assert_eq!(state.winner(), Some(PlayerId::Two));
        assert_eq!(state.try_move_to(PlayerId::One, Coord::new(1, 4)), Err(RuleError::GameOver));
    }

    #[test]
    fn apply_dispatches_both_kinds() {
        let mut state = GameState::new();
        assert_eq!(state.apply(PlayerId::One, Action::Move(Coord::new(1, 4))), Ok(()));
        assert_eq!(
            state.apply(PlayerId::Two, Action::PlaceBarrier(Orientation::Vertical, Coord::new(3, 3))),
            Ok(())
        );
        assert_eq!(state.barriers().get(Coord::new(3, 3)), BarrierMark::Vertical);
        assert_eq!(state.active_player(), PlayerId::One);
    }
}
