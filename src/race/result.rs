//! Result formatting and delivery.

use crate::core::RaceOutcome;
use serde::{Deserialize, Serialize};

pub const FOUL_MESSAGE: &str = "Foul Start! You launched too early.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Foul,
    Reaction,
}

/// Display-ready result of a finished attempt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RaceResult {
    pub kind: ResultKind,
    pub message: String,
    /// Reaction time in milliseconds, absent for fouls.
    pub value: Option<f64>,
}

/// Map an outcome to its display record. Pure and total.
///
/// # Example
///
/// ```rust
/// use dragtree::core::RaceOutcome;
/// use dragtree::race::{format_outcome, ResultKind};
///
/// let result = format_outcome(&RaceOutcome::ReactionResult { reaction_time_millis: 250.0 });
/// assert_eq!(result.kind, ResultKind::Reaction);
/// assert_eq!(result.message, "Reaction Time: 250.000ms");
/// assert_eq!(result.value, Some(250.0));
/// ```
pub fn format_outcome(outcome: &RaceOutcome) -> RaceResult {
    match outcome {
        RaceOutcome::Foul { .. } => RaceResult {
            kind: ResultKind::Foul,
            message: FOUL_MESSAGE.to_string(),
            value: None,
        },
        RaceOutcome::ReactionResult {
            reaction_time_millis,
        } => RaceResult {
            kind: ResultKind::Reaction,
            message: format!("Reaction Time: {reaction_time_millis:.3}ms"),
            value: Some(*reaction_time_millis),
        },
    }
}

/// Receives the result every time an attempt finishes.
pub trait ResultSink {
    fn publish(&mut self, result: &RaceResult);
}

impl<F> ResultSink for F
where
    F: FnMut(&RaceResult),
{
    fn publish(&mut self, result: &RaceResult) {
        self(result)
    }
}
