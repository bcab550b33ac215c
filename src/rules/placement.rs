//! Barrier placement validation.
//!
//! Barriers sit on edges, not squares, so the legal range depends on the
//! orientation: a horizontal barrier needs a row between two board rows
//! (1..=8) and a vertical one needs a column between two board columns
//! (1..=8). No check is made that a player can still reach their goal.

use crate::board::{BarrierMark, Coord, GameState, Orientation, PlayerId, MAX_INDEX};

use super::{check_turn, RuleError};

/// Returns true if a barrier of the given orientation may sit at `at`.
pub fn placement_in_range(orientation: Orientation, at: Coord) -> bool {
    let (rows, cols) = match orientation {
        Orientation::Horizontal => (1..=MAX_INDEX, 0..=MAX_INDEX),
        Orientation::Vertical => (0..=MAX_INDEX, 1..=MAX_INDEX),
    };
    rows.contains(&at.row) && cols.contains(&at.col)
}

/// Runs every check on a barrier placement by `player`.
///
/// On success returns the marker the cell will hold after placement.
pub fn check_placement(
    state: &GameState,
    player: PlayerId,
    orientation: Orientation,
    at: Coord,
) -> Result<BarrierMark, RuleError> {
    check_turn(state, player)?;
    if state.player(player).barriers_remaining() == 0 {
        return Err(RuleError::NoBarriersRemaining);
    }
    if !placement_in_range(orientation, at) {
        return Err(RuleError::OutsidePlacementRange);
    }
    state
        .barriers()
        .get(at)
        .with(orientation)
        .ok_or(RuleError::OverlappingBarrier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn horizontal_range() {
        assert!(placement_in_range(Orientation::Horizontal, Coord::new(1, 0)));
        assert!(placement_in_range(Orientation::Horizontal, Coord::new(8, 8)));
        assert!(!placement_in_range(Orientation::Horizontal, Coord::new(0, 4)));
        assert!(!placement_in_range(Orientation::Horizontal, Coord::new(9, 4)));
        assert!(!placement_in_range(Orientation::Horizontal, Coord::new(4, 9)));
    }

    #[test]
    fn vertical_range() {
        assert!(placement_in_range(Orientation::Vertical, Coord::new(0, 1)));
        assert!(placement_in_range(Orientation::Vertical, Coord::new(8, 8)));
        assert!(!placement_in_range(Orientation::Vertical, Coord::new(4, 0)));
        assert!(!placement_in_range(Orientation::Vertical, Coord::new(4, 9)));
        assert!(!placement_in_range(Orientation::Vertical, Coord::new(9, 4)));
    }

    #[test]
    fn fresh_cell_takes_requested_orientation() {
        let state = GameState::new();
        assert_eq!(
            check_placement(&state, PlayerId::One, Orientation::Horizontal, Coord::new(1, 4)),
            Ok(BarrierMark::Horizontal)
        );
        assert_eq!(
            check_placement(&state, PlayerId::One, Orientation::Vertical, Coord::new(4, 4)),
            Ok(BarrierMark::Vertical)
        );
    }

    #[test]
    fn boundary_cells_inside_range_upgrade_to_both() {
        let state = GameState::new();
        // Column 0 carries the boundary's vertical marker.
        assert_eq!(
            check_placement(&state, PlayerId::One, Orientation::Horizontal, Coord::new(4, 0)),
            Ok(BarrierMark::Both)
        );
        // Row 0 carries the boundary's horizontal marker.
        assert_eq!(
            check_placement(&state, PlayerId::One, Orientation::Vertical, Coord::new(0, 4)),
            Ok(BarrierMark::Both)
        );
    }

    #[test]
    fn overlap_is_rejected() {
        let mut state = GameState::new();
        state.barriers.set(Coord::new(4, 4), BarrierMark::Horizontal);
        assert_eq!(
            check_placement(&state, PlayerId::One, Orientation::Horizontal, Coord::new(4, 4)),
            Err(RuleError::OverlappingBarrier)
        );
        state.barriers.set(Coord::new(4, 4), BarrierMark::Both);
        assert_eq!(
            check_placement(&state, PlayerId::One, Orientation::Vertical, Coord::new(4, 4)),
            Err(RuleError::OverlappingBarrier)
        );
    }

    #[test]
    fn out_of_range_is_rejected() {
        let state = GameState::new();
        assert_eq!(
            check_placement(&state, PlayerId::One, Orientation::Vertical, Coord::new(4, 0)),
            Err(RuleError::OutsidePlacementRange)
        );
        assert_eq!(
            check_placement(&state, PlayerId::One, Orientation::Horizontal, Coord::new(-1, 3)),
            Err(RuleError::OutsidePlacementRange)
        );
    }

    #[test]
    fn empty_supply_is_rejected_before_range() {
        let mut state = GameState::with_config(GameConfig { barriers_per_player: 1 }).unwrap();
        assert!(state.player_mut(PlayerId::One).spend_barrier());
        assert_eq!(
            check_placement(&state, PlayerId::One, Orientation::Vertical, Coord::new(4, 0)),
            Err(RuleError::NoBarriersRemaining)
        );
    }

    #[test]
    fn out_of_turn_is_rejected() {
        let state = GameState::new();
        assert_eq!(
            check_placement(&state, PlayerId::Two, Orientation::Horizontal, Coord::new(4, 4)),
            Err(RuleError::OutOfTurn { expected: PlayerId::One })
        );
    }
}
