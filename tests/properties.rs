//! Property tests over random request sequences.
//!
//! Requests are drawn without regard to legality, so most are rejected; the
//! properties hold for accepted and rejected requests alike. Targets are
//! mostly near the board, with the occasional arbitrary `i32` pair.

use proptest::prelude::*;

use quoridor_rules::board::BarrierMark;
use quoridor_rules::movegen::legal_actions;
use quoridor_rules::{Coord, GameState, Orientation, PlayerId, RuleError};

#[derive(Debug, Clone)]
enum Request {
    Move(PlayerId, (i32, i32)),
    Barrier(PlayerId, Orientation, (i32, i32)),
}

fn player() -> impl Strategy<Value = PlayerId> {
    prop_oneof![Just(PlayerId::One), Just(PlayerId::Two)]
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn request() -> impl Strategy<Value = Request> {
    let target = prop_oneof![
        8 => (-1i32..=9, -1i32..=9),
        1 => any::<(i32, i32)>(),
    ]
    .boxed();
    prop_oneof![
        3 => (player(), target.clone()).prop_map(|(p, t)| Request::Move(p, t)),
        1 => (player(), orientation(), target).prop_map(|(p, o, t)| Request::Barrier(p, o, t)),
    ]
}

fn submit(game: &mut GameState, req: &Request) -> Result<(), RuleError> {
    match *req {
        Request::Move(p, t) => game.try_move_token(p, t),
        Request::Barrier(p, o, t) => game.try_place_barrier(p, o, t),
    }
}

fn snapshot(game: &GameState) -> String {
    serde_json::to_string(game).unwrap()
}

proptest! {
    #[test]
    fn turn_alternates_with_accepted_requests(reqs in prop::collection::vec(request(), 1..200)) {
        let mut game = GameState::new();
        let mut accepted = 0usize;
        for req in &reqs {
            if submit(&mut game, req).is_ok() {
                accepted += 1;
            }
            if game.is_over() {
                break;
            }
            let expected = if accepted % 2 == 0 { PlayerId::One } else { PlayerId::Two };
            prop_assert_eq!(game.active_player(), expected);
        }
    }

    #[test]
    fn rejections_leave_state_untouched(reqs in prop::collection::vec(request(), 1..200)) {
        let mut game = GameState::new();
        for req in &reqs {
            let before = snapshot(&game);
            if let Err(first) = submit(&mut game, req) {
                prop_assert_eq!(snapshot(&game), before.clone());
                let second = submit(&mut game, req);
                prop_assert_eq!(second, Err(first));
                prop_assert_eq!(snapshot(&game), before);
            }
        }
    }

    #[test]
    fn exactly_two_tokens_on_the_board(reqs in prop::collection::vec(request(), 1..200)) {
        let mut game = GameState::new();
        for req in &reqs {
            let _ = submit(&mut game, req);
            prop_assert_eq!(game.board().occupied_count(), 2);
            for id in PlayerId::ALL {
                let pos = game.token_position(id);
                prop_assert!(pos.on_board());
                prop_assert_eq!(
                    game.board().get(pos),
                    quoridor_rules::board::Occupant::Occupied(id)
                );
            }
        }
    }

    #[test]
    fn barrier_counts_only_fall_by_one(reqs in prop::collection::vec(request(), 1..200)) {
        let mut game = GameState::new();
        for req in &reqs {
            let before = PlayerId::ALL.map(|p| game.player(p).barriers_remaining());
            let result = submit(&mut game, req);
            let after = PlayerId::ALL.map(|p| game.player(p).barriers_remaining());
            match (req, result) {
                (Request::Barrier(p, _, _), Ok(())) => {
                    let i = if *p == PlayerId::One { 0 } else { 1 };
                    prop_assert_eq!(after[i] + 1, before[i]);
                    prop_assert_eq!(after[1 - i], before[1 - i]);
                }
                _ => prop_assert_eq!(after, before),
            }
        }
    }

    #[test]
    fn barrier_markers_never_revert(reqs in prop::collection::vec(request(), 1..200)) {
        fn rank(m: BarrierMark) -> u8 {
            match m {
                BarrierMark::None => 0,
                BarrierMark::Horizontal | BarrierMark::Vertical => 1,
                BarrierMark::Both => 2,
            }
        }
        let mut game = GameState::new();
        for req in &reqs {
            let before = game.barriers().clone();
            let _ = submit(&mut game, req);
            for r in 0..10 {
                for c in 0..10 {
                    let at = Coord::new(r, c);
                    let (old, new) = (before.get(at), game.barriers().get(at));
                    prop_assert!(rank(new) >= rank(old));
                    if rank(old) == 1 && rank(new) == 1 {
                        prop_assert_eq!(old, new);
                    }
                }
            }
        }
    }

    #[test]
    fn generated_actions_are_always_accepted(seed_moves in prop::collection::vec(0usize..1000, 1..60)) {
        let mut game = GameState::new();
        for pick in seed_moves {
            let player = game.active_player();
            let actions = legal_actions(&game, player);
            if actions.is_empty() {
                break;
            }
            let action = actions[pick % actions.len()];
            prop_assert_eq!(game.apply(player, action), Ok(()));
        }
    }
}
