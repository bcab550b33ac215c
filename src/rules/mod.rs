//! Rule validation.
//!
//! Every check in this module is a pure function of the game state and a
//! single request; nothing here mutates the board. The controller in
//! [`crate::game`] applies a request only after all checks have passed.

pub mod movement;
pub mod placement;

use crate::board::{GameState, PlayerId};

pub use movement::{check_move, collision_check, validate_movement};
pub use placement::{check_placement, placement_in_range};

/// Reasons a move or barrier placement is rejected.
///
/// All rejections are recoverable: the state is untouched and the caller may
/// retry with a different request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum RuleError {
    #[error("the game is over")]
    GameOver,

    #[error("not your turn, it is {expected}'s turn")]
    OutOfTurn { expected: PlayerId },

    #[error("target square is off the board")]
    OutOfBounds,

    #[error("target square is occupied by a token")]
    Occupied,

    #[error("move blocked by a barrier")]
    BarrierBlocked,

    #[error("jump blocked by a barrier")]
    JumpBlocked,

    #[error("invalid number of spaces")]
    InvalidDistance,

    #[error("diagonal move not allowed here")]
    InvalidDiagonal,

    #[error("no barriers left to place")]
    NoBarriersRemaining,

    #[error("barrier placement is outside the board")]
    OutsidePlacementRange,

    #[error("barrier overlaps an existing barrier")]
    OverlappingBarrier,
}

/// Rejects requests once the game has ended or when `player` is not to move.
pub fn check_turn(state: &GameState, player: PlayerId) -> Result<(), RuleError> {
    if state.is_over() {
        return Err(RuleError::GameOver);
    }
    if state.active_player() != player {
        return Err(RuleError::OutOfTurn {
            expected: state.active_player(),
        });
    }
    Ok(())
}
