//! Schedule rules, checked with `Validation` so every violation is reported.

use crate::core::{LightSchedule, LightState};
use crate::validation::violations::ScheduleViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of checking one schedule.
pub type ScheduleValidation = Validation<(), NonEmptyVec<ScheduleViolation>>;

/// Check every rule against `schedule`, accumulating all violations.
///
/// # Example
///
/// ```rust
/// use dragtree::core::TreeType;
/// use dragtree::validation::validate_schedule;
///
/// assert!(validate_schedule(&TreeType::Sportsman.schedule()).is_success());
/// ```
pub fn validate_schedule(schedule: &LightSchedule) -> ScheduleValidation {
    if schedule.is_empty() {
        return Validation::fail(ScheduleViolation::Empty);
    }

    let checks = vec![
        check_delays(schedule),
        check_order(schedule),
        check_go(schedule),
    ];

    Validation::all_vec(checks).map(|_| ())
}

/// Collapse a validation into a plain list of violations.
pub fn collect_violations(validation: ScheduleValidation) -> Vec<ScheduleViolation> {
    match validation {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}

fn combine(found: Vec<ScheduleViolation>) -> ScheduleValidation {
    let checks: Vec<ScheduleValidation> = found.into_iter().map(Validation::fail).collect();
    Validation::all_vec(checks).map(|_| ())
}

fn check_delays(schedule: &LightSchedule) -> ScheduleValidation {
    let found = schedule
        .transitions()
        .iter()
        .enumerate()
        .filter(|(_, t)| !t.delay_millis.is_finite() || t.delay_millis < 0.0)
        .map(|(index, t)| ScheduleViolation::InvalidDelay {
            index,
            delay_millis: t.delay_millis,
        })
        .collect();
    combine(found)
}

fn check_order(schedule: &LightSchedule) -> ScheduleValidation {
    let found = schedule
        .transitions()
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[1].delay_millis <= pair[0].delay_millis)
        .map(|(i, pair)| ScheduleViolation::OutOfOrder {
            index: i + 1,
            delay_millis: pair[1].delay_millis,
            previous_millis: pair[0].delay_millis,
        })
        .collect();
    combine(found)
}

fn check_go(schedule: &LightSchedule) -> ScheduleValidation {
    let transitions = schedule.transitions();
    let go_indices: Vec<usize> = transitions
        .iter()
        .enumerate()
        .filter(|(_, t)| t.is_go)
        .map(|(i, _)| i)
        .collect();

    if go_indices.is_empty() {
        return Validation::fail(ScheduleViolation::MissingGo);
    }

    let last = transitions.len() - 1;
    let mut found = Vec::new();
    for index in go_indices {
        if index != last {
            found.push(ScheduleViolation::GoNotLast { index });
        }
        if !transitions[index].lights.contains(&LightState::Green) {
            found.push(ScheduleViolation::GoWithoutGreen { index });
        }
    }
    combine(found)
}
