//! The race transition table.

use crate::core::RaceState;
use serde::{Deserialize, Serialize};

/// Inputs the race machine reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RaceEvent {
    /// Host asked for a new attempt.
    StartRace,
    /// Player hit launch.
    Launch,
    /// The sequencer lit the go light.
    Go,
}

/// One row of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: RaceState,
    pub event: RaceEvent,
    pub to: RaceState,
}

impl Transition {
    const fn new(from: RaceState, event: RaceEvent, to: RaceState) -> Self {
        Self { from, event, to }
    }

    pub fn can_execute(&self, current: RaceState, event: RaceEvent) -> bool {
        self.from == current && self.event == event
    }
}

use RaceEvent::{Go, Launch, StartRace};
use RaceState::{Finished, Idle, Racing, Staging};

/// Every legal move. Pairs missing here are no-ops.
///
/// Starting from `Staging` or `Racing` abandons the attempt in flight and
/// stages a fresh one.
pub const TRANSITIONS: &[Transition] = &[
    Transition::new(Idle, StartRace, Staging),
    Transition::new(Finished, StartRace, Staging),
    Transition::new(Staging, StartRace, Staging),
    Transition::new(Racing, StartRace, Staging),
    Transition::new(Staging, Launch, Finished),
    Transition::new(Staging, Go, Racing),
    Transition::new(Racing, Launch, Finished),
];

/// Look up where `event` takes the machine from `current`.
pub fn next_state(current: RaceState, event: RaceEvent) -> Option<RaceState> {
    TRANSITIONS
        .iter()
        .find(|t| t.can_execute(current, event))
        .map(|t| t.to)
}
