//! State trait and the race lifecycle states.
//!
//! Every machine state implements [`State`] so it can be named in logs,
//! recorded in a [`StateHistory`](super::StateHistory) and serialized into a
//! snapshot.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for machine states.
///
/// Methods are pure queries over an immutable value.
///
/// # Example
///
/// ```rust
/// use dragtree::core::{RaceState, State};
///
/// assert_eq!(RaceState::Staging.name(), "Staging");
/// assert!(RaceState::Finished.is_final());
/// assert!(!RaceState::Racing.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in logs and snapshots.
    fn name(&self) -> &str;

    /// Whether the machine rests here until it is explicitly restarted.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Whether this state represents a failure.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

crate::state_enum! {
    /// Lifecycle of one race attempt.
    ///
    /// `Idle -> Staging -> {Racing | Finished} -> Finished`, and back to
    /// `Staging` on the next start.
    #[derive(Copy, Eq, Hash)]
    pub enum RaceState {
        /// No attempt has been started yet.
        Idle,
        /// The tree is counting down; launching now is a foul.
        Staging,
        /// The go light is lit and the reaction clock is running.
        Racing,
        /// The attempt has an outcome.
        Finished,
    }
    final: [Finished]
}

impl RaceState {
    /// Whether a launch in this state produces an outcome.
    pub fn accepts_launch(&self) -> bool {
        matches!(self, Self::Staging | Self::Racing)
    }

    /// Whether an attempt is in flight with timers that may still fire.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Staging | Self::Racing)
    }
}

impl Default for RaceState {
    fn default() -> Self {
        Self::Idle
    }
}
