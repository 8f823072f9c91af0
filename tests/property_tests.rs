//! Property-based tests for the race machine.
//!
//! These tests use proptest to check timing properties across many
//! randomly generated trees, delays and command sequences.

use dragtree::core::{RaceOutcome, RaceState, State, TreeType, ALL_OFF, FOUL, GO};
use dragtree::race::{format_outcome, ManualRace};
use dragtree::timer::ManualClock;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_tree()(variant in 0..2u8) -> TreeType {
        match variant {
            0 => TreeType::Sportsman,
            _ => TreeType::Pro,
        }
    }
}

#[derive(Clone, Debug)]
enum Command {
    Start(TreeType),
    Launch,
    Advance(f64),
}

fn arbitrary_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        arbitrary_tree().prop_map(Command::Start),
        Just(Command::Launch),
        (0.0..3000.0f64).prop_map(Command::Advance),
    ]
}

fn staged(tree: TreeType) -> ManualRace {
    let mut race = ManualRace::new(ManualClock::new());
    race.start_race(tree).unwrap();
    race
}

proptest! {
    #[test]
    fn waiting_out_the_tree_reaches_racing(tree in arbitrary_tree(), extra in 0.0..5000.0f64) {
        let mut race = staged(tree);
        race.advance(tree.go_delay_millis() + extra);

        prop_assert_eq!(race.race_state(), RaceState::Racing);
        prop_assert_eq!(race.lights(), GO);
    }

    #[test]
    fn launching_before_go_is_a_foul(tree in arbitrary_tree(), fraction in 0.0..1.0f64) {
        let mut race = staged(tree);
        let wait = tree.go_delay_millis() * fraction;
        race.advance(wait);
        prop_assume!(race.race_state() == RaceState::Staging);

        let outcome = race.launch();

        let fouled = matches!(outcome, Some(RaceOutcome::Foul { .. }));
        prop_assert!(fouled, "expected a foul, got {:?}", outcome);
        prop_assert_eq!(race.race_state(), RaceState::Finished);
        prop_assert_eq!(race.lights(), FOUL);
    }

    #[test]
    fn reaction_time_is_time_since_go(tree in arbitrary_tree(), t in 0.0..10_000.0f64) {
        let mut race = staged(tree);
        race.advance_to(tree.go_delay_millis() + t);

        let reaction = race.launch().and_then(|o| o.reaction_time_millis());

        prop_assert!(reaction.is_some());
        let reaction = reaction.unwrap();
        prop_assert!((reaction - t).abs() < 1e-6, "reaction {} vs {}", reaction, t);
    }

    #[test]
    fn extra_launches_never_change_the_outcome(
        tree in arbitrary_tree(),
        wait in 0.0..4000.0f64,
        extra in 1..5usize,
    ) {
        let mut race = staged(tree);
        race.advance(wait);
        race.launch();
        let first = race.outcome().copied();

        for _ in 0..extra {
            race.advance(wait);
            prop_assert_eq!(race.launch(), None);
        }
        prop_assert_eq!(race.outcome().copied(), first);
    }

    #[test]
    fn restart_resets_lights_and_outcome(
        first in arbitrary_tree(),
        second in arbitrary_tree(),
        wait in 0.0..4000.0f64,
    ) {
        let mut race = staged(first);
        race.advance(wait);
        race.launch();

        race.start_race(second).unwrap();

        prop_assert_eq!(race.race_state(), RaceState::Staging);
        prop_assert_eq!(race.lights(), ALL_OFF);
        prop_assert!(race.outcome().is_none());
        prop_assert_eq!(race.timer().pending(), second.schedule().len());
    }

    #[test]
    fn machine_never_leaves_its_table(
        commands in prop::collection::vec(arbitrary_command(), 1..40)
    ) {
        let mut race = ManualRace::new(ManualClock::new());

        for command in commands {
            let before = race.race_state();
            match command {
                Command::Start(tree) => {
                    race.start_race(tree).unwrap();
                    prop_assert_eq!(race.race_state(), RaceState::Staging);
                }
                Command::Launch => {
                    let outcome = race.launch();
                    prop_assert_eq!(outcome.is_some(), before.accepts_launch());
                    if before.accepts_launch() {
                        prop_assert_eq!(race.race_state(), RaceState::Finished);
                    } else {
                        prop_assert_eq!(race.race_state(), before);
                    }
                }
                Command::Advance(ms) => race.advance(ms),
            }

            // Outcome and result exist exactly when finished.
            let finished = race.race_state().is_final();
            prop_assert_eq!(race.outcome().is_some(), finished);
            prop_assert_eq!(race.result().is_some(), finished);

            if let Some(outcome) = race.outcome() {
                let formatted = format_outcome(outcome);
                prop_assert_eq!(race.result(), Some(&formatted));
                let expected = if outcome.is_foul() { FOUL } else { GO };
                prop_assert_eq!(race.lights(), expected);
            }
        }
    }
}
