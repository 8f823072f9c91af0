//! Race snapshots.
//!
//! A snapshot is a serializable copy of one attempt: where the machine is,
//! what the tree shows and, once finished, the outcome and its display
//! record. Hosts use it to share a result or keep a log of attempts.
//! Pending timers are not part of a snapshot.

use crate::core::{Lights, RaceOutcome, RaceState, StateHistory, TreeType};
use crate::race::RaceResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RaceSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    pub attempt: usize,
    pub tree: TreeType,
    pub state: RaceState,
    pub lights: Lights,
    pub outcome: Option<RaceOutcome>,
    pub result: Option<RaceResult>,
    pub history: StateHistory<RaceState>,
}

impl RaceSnapshot {
    pub(crate) fn capture(
        attempt: usize,
        tree: TreeType,
        state: RaceState,
        lights: Lights,
        outcome: Option<RaceOutcome>,
        result: Option<RaceResult>,
        history: StateHistory<RaceState>,
    ) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            taken_at: Utc::now(),
            attempt,
            tree,
            state,
            lights,
            outcome,
            result,
            history,
        }
    }

    /// Reaction time of a finished, clean attempt.
    pub fn reaction_time_millis(&self) -> Option<f64> {
        self.outcome.and_then(|o| o.reaction_time_millis())
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check the version and that the outcome agrees with the state.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        let finished = self.state == RaceState::Finished;
        if finished != self.outcome.is_some() || finished != self.result.is_some() {
            return Err(SnapshotError::ValidationFailed(format!(
                "state {:?} does not match recorded outcome",
                self.state
            )));
        }

        Ok(())
    }
}
