//! End-to-end race scenarios on a simulated clock.

use dragtree::core::{LightState, RaceOutcome, RaceState, TreeType, ALL_OFF, FOUL, GO};
use dragtree::race::{ManualRace, RaceResult, ResultKind};
use dragtree::timer::ManualClock;
use std::cell::RefCell;
use std::rc::Rc;

fn race() -> ManualRace {
    ManualRace::new(ManualClock::new())
}

#[test]
fn sportsman_clean_launch() {
    let mut race = race();
    race.start_race(TreeType::Sportsman).unwrap();

    race.advance(2000.0);
    assert_eq!(race.race_state(), RaceState::Racing);
    assert_eq!(race.lights(), GO);

    race.advance(250.0);
    let outcome = race.launch();

    assert_eq!(
        outcome,
        Some(RaceOutcome::ReactionResult {
            reaction_time_millis: 250.0
        })
    );
    assert_eq!(race.race_state(), RaceState::Finished);
    assert_eq!(race.lights(), GO);
    assert_eq!(race.result().unwrap().message, "Reaction Time: 250.000ms");
    assert_eq!(race.result().unwrap().value, Some(250.0));
}

#[test]
fn pro_foul_start() {
    let mut race = race();
    race.start_race(TreeType::Pro).unwrap();

    race.advance(300.0);
    let outcome = race.launch();

    assert_eq!(
        outcome,
        Some(RaceOutcome::Foul {
            triggered_at_millis: 300.0
        })
    );
    assert_eq!(race.lights(), FOUL);
    assert_eq!(race.race_state(), RaceState::Finished);
    assert_eq!(race.result().unwrap().kind, ResultKind::Foul);
    assert_eq!(
        race.result().unwrap().message,
        "Foul Start! You launched too early."
    );
}

#[test]
fn restart_mid_staging_runs_only_the_new_tree() {
    let mut race = race();
    race.start_race(TreeType::Sportsman).unwrap();
    race.advance(700.0);
    assert_eq!(race.lights()[0], LightState::Amber);

    race.start_race(TreeType::Pro).unwrap();
    assert_eq!(race.lights(), ALL_OFF);
    assert_eq!(race.timer().pending(), 2);

    // Sportsman's 1000ms step would land here; the lights must stay dark.
    race.advance(300.0);
    assert_eq!(race.lights(), ALL_OFF);

    // Pro ambers at 700 + 500.
    race.advance(200.0);
    assert_eq!(race.lights(), [LightState::Amber; 3]);

    // Sportsman's 1500ms step would land at 800ms into the Pro attempt.
    race.advance(300.0);
    assert_eq!(race.lights(), [LightState::Amber; 3]);
    assert_eq!(race.race_state(), RaceState::Staging);

    // Pro go at 700 + 900.
    race.advance(100.0);
    assert_eq!(race.race_state(), RaceState::Racing);
    assert_eq!(race.lights(), GO);

    // Sportsman's go would have been at 2000.
    race.advance(1000.0);
    assert_eq!(race.timer().pending(), 0);
    let outcome = race.launch().unwrap();
    assert_eq!(outcome.reaction_time_millis(), Some(1000.0));
}

#[test]
fn restart_after_finish_clears_state_before_scheduling() {
    let mut race = race();
    race.start_race(TreeType::Pro).unwrap();
    race.advance(950.0);
    race.launch();
    assert_eq!(race.race_state(), RaceState::Finished);

    race.start_race(TreeType::Pro).unwrap();
    assert_eq!(race.race_state(), RaceState::Staging);
    assert_eq!(race.lights(), ALL_OFF);
    assert!(race.outcome().is_none());

    race.advance(899.0);
    assert_eq!(race.race_state(), RaceState::Staging);
    race.advance(1.0);
    assert_eq!(race.race_state(), RaceState::Racing);
}

#[test]
fn foul_cancels_the_rest_of_the_tree() {
    let mut race = race();
    race.start_race(TreeType::Sportsman).unwrap();
    race.advance(1200.0);
    race.launch();

    race.advance(10_000.0);
    assert_eq!(race.lights(), FOUL);
    assert_eq!(race.race_state(), RaceState::Finished);
    assert!(race.outcome().unwrap().is_foul());
}

#[test]
fn launch_before_any_race_does_nothing() {
    let mut race = race();
    assert_eq!(race.launch(), None);
    race.advance(5000.0);
    assert_eq!(race.race_state(), RaceState::Idle);
    assert_eq!(race.lights(), ALL_OFF);
}

#[test]
fn sink_sees_every_finished_attempt() {
    let results: Rc<RefCell<Vec<RaceResult>>> = Rc::default();
    let mut race = race();
    let sink = Rc::clone(&results);
    race.add_sink(move |r: &RaceResult| sink.borrow_mut().push(r.clone()));

    for _ in 0..3 {
        race.start_race(TreeType::Pro).unwrap();
        race.advance(1000.0);
        race.launch();
        race.launch();
    }

    let results = results.borrow();
    assert_eq!(results.len(), 3);
    assert!(results
        .iter()
        .all(|r| r.message == "Reaction Time: 100.000ms"));
}
