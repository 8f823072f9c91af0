//! Schedule violations.

use thiserror::Error;

/// Reasons a light schedule cannot drive a start tree.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScheduleViolation {
    #[error("Schedule has no transitions")]
    Empty,

    #[error("Transition {index} has invalid delay {delay_millis}ms")]
    InvalidDelay { index: usize, delay_millis: f64 },

    #[error("Transition {index} at {delay_millis}ms does not come after {previous_millis}ms")]
    OutOfOrder {
        index: usize,
        delay_millis: f64,
        previous_millis: f64,
    },

    #[error("Schedule has no go transition")]
    MissingGo,

    #[error("Go transition at index {index} is not the last transition")]
    GoNotLast { index: usize },

    #[error("Go transition at index {index} does not light a green lamp")]
    GoWithoutGreen { index: usize },
}
