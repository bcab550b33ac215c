//! Token movement validation.
//!
//! A move request is checked in three stages: turn, barrier collision, then
//! distance (step, jump, or diagonal side-step). The barrier cells consulted
//! for each direction are listed in the tables below as offsets from the
//! mover's square. A vertical marker at `(r, c)` guards the edge on the left
//! of square `(r, c)`, so rightward checks reach one column further than
//! leftward ones.

use crate::board::{BarrierMark, Coord, Direction, GameState, Orientation, PlayerId};

use super::{check_turn, RuleError};

use Orientation::{Horizontal as H, Vertical as V};

/// Barrier cell that guards the edge a straight move crosses first.
#[derive(Debug, Clone, Copy)]
struct EdgeCheck {
    barrier: (i32, i32),
    orientation: Orientation,
}

/// A barrier that matters only while a token occupies a neighboring square.
#[derive(Debug, Clone, Copy)]
struct FlankCheck {
    opponent: (i32, i32),
    barrier: (i32, i32),
    orientation: Orientation,
}

/// Barrier cells consulted for a two-square jump.
///
/// The jump is blocked when `exact` holds precisely `orientation`, or when
/// `both` holds a crossed marker. The two cells coincide except for leftward
/// jumps, where the crossed marker is looked up one column left of the target.
#[derive(Debug, Clone, Copy)]
struct JumpCheck {
    exact: (i32, i32),
    both: (i32, i32),
    orientation: Orientation,
}

const fn edge(dr: i32, dc: i32, orientation: Orientation) -> EdgeCheck {
    EdgeCheck {
        barrier: (dr, dc),
        orientation,
    }
}

const fn flank(opponent: (i32, i32), barrier: (i32, i32), orientation: Orientation) -> FlankCheck {
    FlankCheck {
        opponent,
        barrier,
        orientation,
    }
}

fn straight_edge(dir: Direction) -> Option<EdgeCheck> {
    match dir {
        Direction::Up => Some(edge(0, 0, H)),
        Direction::Down => Some(edge(1, 0, H)),
        Direction::Left => Some(edge(0, 0, V)),
        Direction::Right => Some(edge(0, 1, V)),
        _ => None,
    }
}

/// Barriers beside the opponent that stop a diagonal approach.
fn diagonal_collisions(dir: Direction) -> &'static [FlankCheck] {
    static NW: [FlankCheck; 2] = [flank((-1, 0), (-1, 0), V), flank((0, -1), (0, -1), H)];
    static NE: [FlankCheck; 2] = [flank((-1, 0), (-1, 1), V), flank((0, 1), (0, 1), H)];
    static SE: [FlankCheck; 2] = [flank((1, 0), (1, 1), V), flank((0, 1), (1, 1), H)];
    static SW: [FlankCheck; 2] = [flank((1, 0), (1, 0), V), flank((0, -1), (1, -1), H)];
    match dir {
        Direction::NorthWest => &NW,
        Direction::NorthEast => &NE,
        Direction::SouthEast => &SE,
        Direction::SouthWest => &SW,
        _ => &[],
    }
}

/// Opponent positions and the barrier behind them that permit a side-step.
fn sidestep_conditions(dir: Direction) -> &'static [FlankCheck] {
    static NW: [FlankCheck; 2] = [flank((-1, 0), (-1, 0), H), flank((0, -1), (0, -1), V)];
    static NE: [FlankCheck; 2] = [flank((-1, 0), (-1, 0), H), flank((0, 1), (0, 2), V)];
    static SE: [FlankCheck; 2] = [flank((0, 1), (0, 2), V), flank((1, 0), (2, 0), H)];
    static SW: [FlankCheck; 2] = [flank((1, 0), (2, 0), H), flank((0, -1), (0, -1), V)];
    match dir {
        Direction::NorthWest => &NW,
        Direction::NorthEast => &NE,
        Direction::SouthEast => &SE,
        Direction::SouthWest => &SW,
        _ => &[],
    }
}

fn jump_check(dir: Direction) -> Option<JumpCheck> {
    let (exact, both, orientation) = match dir {
        Direction::Up => ((-1, 0), (-1, 0), H),
        Direction::Down => ((2, 0), (2, 0), H),
        Direction::Right => ((0, 2), (0, 2), V),
        Direction::Left => ((0, -1), (0, -3), V),
        _ => return None,
    };
    Some(JumpCheck {
        exact,
        both,
        orientation,
    })
}

fn at(from: Coord, (dr, dc): (i32, i32)) -> Coord {
    from.offset(dr, dc)
}

/// Returns true if `check` applies: a token is on its opponent square and the
/// barrier cell blocks its orientation.
fn flank_holds(state: &GameState, from: Coord, check: &FlankCheck) -> bool {
    state.board().is_occupied(at(from, check.opponent))
        && state.barriers().blocks(at(from, check.barrier), check.orientation)
}

/// Checks whether a barrier stands on the edge the token would cross first.
///
/// Straight moves look at the edge adjacent to the mover. Diagonal moves are
/// stopped by a barrier flanking a neighboring token on the approach side.
pub fn collision_check(state: &GameState, from: Coord, target: Coord) -> Result<(), RuleError> {
    let (dr, dc) = from.delta_to(target);
    let Some(dir) = Direction::from_delta(dr, dc) else {
        return Ok(());
    };

    if let Some(check) = straight_edge(dir) {
        if state.barriers().blocks(at(from, check.barrier), check.orientation) {
            return Err(RuleError::BarrierBlocked);
        }
        return Ok(());
    }

    if diagonal_collisions(dir).iter().any(|c| flank_holds(state, from, c)) {
        return Err(RuleError::BarrierBlocked);
    }
    Ok(())
}

/// Validates a two-square orthogonal jump over the neighboring token.
fn check_jump(state: &GameState, from: Coord, dir: Direction) -> Result<(), RuleError> {
    let (ur, uc) = dir.unit();
    let check = jump_check(dir).ok_or(RuleError::InvalidDistance)?;
    if !state.board().is_occupied(from.offset(ur, uc)) {
        return Err(RuleError::InvalidDistance);
    }
    let barriers = state.barriers();
    if barriers.get(at(from, check.exact)).is_exactly(check.orientation)
        || barriers.get(at(from, check.both)) == BarrierMark::Both
    {
        return Err(RuleError::JumpBlocked);
    }
    Ok(())
}

/// Returns true if a one-square diagonal step is allowed as a side-step
/// around a token whose jump is walled off.
fn sidestep_allowed(state: &GameState, from: Coord, dir: Direction) -> bool {
    sidestep_conditions(dir).iter().any(|c| flank_holds(state, from, c))
}

/// Checks the target square and distance of a move from `from` to `target`.
///
/// Does not look at turn order or at the first edge crossed; see
/// [`collision_check`] for the latter.
pub fn validate_movement(state: &GameState, from: Coord, target: Coord) -> Result<(), RuleError> {
    if !target.on_board() {
        return Err(RuleError::OutOfBounds);
    }
    if state.board().is_occupied(target) {
        return Err(RuleError::Occupied);
    }

    let (dr, dc) = from.delta_to(target);
    let Some(dir) = Direction::from_delta(dr, dc) else {
        return Err(RuleError::Occupied);
    };

    if dir.is_diagonal() {
        if dr.abs() != 1 || dc.abs() != 1 {
            return Err(RuleError::InvalidDistance);
        }
        return if sidestep_allowed(state, from, dir) {
            Ok(())
        } else {
            Err(RuleError::InvalidDiagonal)
        };
    }

    match dr.abs().max(dc.abs()) {
        1 => Ok(()),
        2 => check_jump(state, from, dir),
        _ => Err(RuleError::InvalidDistance),
    }
}

/// Runs every check on a move by `player` to `target` (internal order).
pub fn check_move(state: &GameState, player: PlayerId, target: Coord) -> Result<(), RuleError> {
    check_turn(state, player)?;
    let from = state.token_position(player);
    collision_check(state, from, target)?;
    validate_movement(state, from, target)
}
