//! Property tests: random command sequences through a session must never
//! break the stage invariants.

use proptest::prelude::*;

use tick_tetris::core::{Rules, SpawnOrder, State};
use tick_tetris::engine::{Outcome, Session};
use tick_tetris::types::{Command, STAGE_HEIGHT, STAGE_WIDTH};

fn command() -> impl Strategy<Value = Command> {
    // Ticks dominate so games actually progress to locks and clears
    prop_oneof![
        6 => Just(Command::Tick),
        2 => Just(Command::MoveLeft),
        2 => Just(Command::MoveRight),
        2 => Just(Command::Rotate),
        2 => Just(Command::SoftDrop),
        1 => Just(Command::Start),
        1 => Just(Command::Stop),
    ]
}

fn spawn_order() -> impl Strategy<Value = SpawnOrder> {
    prop_oneof![
        Just(SpawnOrder::RoundRobin),
        any::<u32>().prop_map(|seed| SpawnOrder::Bag { seed }),
    ]
}

fn check_stage(state: &State) -> Result<(), TestCaseError> {
    let grid = state.grid();
    prop_assert_eq!(grid.height(), STAGE_HEIGHT);
    prop_assert_eq!(grid.width(), STAGE_WIDTH);
    prop_assert_eq!(grid.rows().count(), STAGE_HEIGHT as usize);
    prop_assert_eq!(
        state.stage().len(),
        STAGE_HEIGHT as usize * STAGE_WIDTH as usize
    );

    // No complete row survives a lock
    for row in 0..STAGE_HEIGHT as usize {
        prop_assert!(!grid.is_row_full(row), "row {} left full", row);
    }

    if let Some(piece) = state.active() {
        for (row, col) in piece.cells() {
            prop_assert_eq!(
                grid.is_occupied(row, col),
                Ok(false),
                "mino ({}, {}) out of bounds or on landed material",
                row,
                col
            );
        }
    }

    if state.is_running() {
        prop_assert!(state.active().is_some(), "running without an active piece");
    } else {
        prop_assert!(state.active().is_none(), "active piece while not running");
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_stage_invariants_hold(
        order in spawn_order(),
        commands in prop::collection::vec(command(), 1..600),
    ) {
        let mut session = Session::new(Rules { spawn_order: order, ..Rules::default() });
        check_stage(session.state())?;

        for cmd in commands {
            let before = session.state().clone();
            let outcome = session.apply(cmd);
            let after = session.state();

            check_stage(after)?;

            match outcome {
                Outcome::NoEffect => prop_assert_eq!(&before, after),
                Outcome::GameOver => prop_assert!(!after.is_running()),
                Outcome::Applied => {}
            }

            // Within one game the score and line count only grow
            if cmd != Command::Start {
                prop_assert!(after.score() >= before.score());
                prop_assert!(after.lines() >= before.lines());
            }
        }
    }

    #[test]
    fn prop_horizontal_moves_are_reversible(
        moves in prop::collection::vec(prop::bool::ANY, 0..12),
    ) {
        let mut session = Session::new(Rules {
            spawn_order: SpawnOrder::RoundRobin,
            ..Rules::default()
        });
        session.apply(Command::Start);

        for left in moves {
            let before = session.state().active();
            let (there, back) = if left {
                (Command::MoveLeft, Command::MoveRight)
            } else {
                (Command::MoveRight, Command::MoveLeft)
            };
            if session.apply(there) == Outcome::Applied {
                prop_assert_eq!(session.apply(back), Outcome::Applied);
                prop_assert_eq!(session.state().active(), before);
                session.apply(there);
            }
        }
    }
}
