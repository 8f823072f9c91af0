//! Race state machine and result delivery.
//!
//! # Key Concepts
//!
//! - **Transition table**: `Idle -> Staging -> {Racing | Finished} -> Finished`,
//!   with a restart allowed from any state
//! - **Race**: owns the timer, the light sequencer and the current attempt
//! - **Results**: each finished attempt is formatted once and handed to every
//!   registered [`ResultSink`]

mod error;
mod machine;
mod result;
mod transition;

pub use error::RaceError;
pub use machine::{ManualRace, Race, SystemRace};
pub use result::{format_outcome, RaceResult, ResultKind, ResultSink, FOUL_MESSAGE};
pub use transition::{next_state, RaceEvent, Transition, TRANSITIONS};
