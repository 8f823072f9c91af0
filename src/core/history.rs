//! Transition history for one race attempt.
//!
//! History is immutable: [`StateHistory::record`] returns a new history with
//! the transition appended.

use super::state::State;
use serde::{Deserialize, Serialize};

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use dragtree::core::{RaceState, StateTransition};
///
/// let transition = StateTransition {
///     from: RaceState::Idle,
///     to: RaceState::Staging,
///     at_millis: 0.0,
///     attempt: 1,
/// };
/// assert_eq!(transition.to, RaceState::Staging);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// Timer clock reading when the transition was applied
    pub at_millis: f64,
    /// Attempt number the transition belongs to
    pub attempt: usize,
}

/// Ordered history of state transitions.
///
/// # Example
///
/// ```rust
/// use dragtree::core::{RaceState, StateHistory, StateTransition};
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: RaceState::Idle,
///         to: RaceState::Staging,
///         at_millis: 0.0,
///         attempt: 1,
///     })
///     .record(StateTransition {
///         from: RaceState::Staging,
///         to: RaceState::Racing,
///         at_millis: 2000.0,
///         attempt: 1,
///     });
///
/// assert_eq!(
///     history.get_path(),
///     vec![&RaceState::Idle, &RaceState::Staging, &RaceState::Racing]
/// );
/// assert_eq!(history.elapsed_millis(), Some(2000.0));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// States traversed: the first `from`, then each `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Milliseconds between the first and last transition.
    ///
    /// Returns `None` when nothing has been recorded.
    pub fn elapsed_millis(&self) -> Option<f64> {
        match (self.transitions.first(), self.transitions.last()) {
            (Some(first), Some(last)) => Some(last.at_millis - first.at_millis),
            _ => None,
        }
    }

    /// The most recently entered state.
    pub fn last_state(&self) -> Option<&S> {
        self.transitions.last().map(|t| &t.to)
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
