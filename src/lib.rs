//! Dragtree: a drag-race start tree and reaction timer.
//!
//! The crate runs a Sportsman or Pro start tree, detects foul starts and
//! measures reaction time. It is a plain state machine with an injected
//! timer source, so it can be driven by a UI event loop or by a simulated
//! clock in tests.
//!
//! # Core Concepts
//!
//! - **Race**: `Idle -> Staging -> {Racing | Finished}`, driven by
//!   `start_race`, `launch` and the tree's own timed steps
//! - **Light sequencer**: schedules the amber and go lamps for a tree
//! - **Timer source**: monotonic clock plus cancellable delayed events
//! - **Results**: display records handed to result sinks
//!
//! # Example
//!
//! ```rust
//! use dragtree::core::{RaceState, TreeType, FOUL};
//! use dragtree::race::{ManualRace, ResultKind};
//! use dragtree::timer::ManualClock;
//!
//! let mut race = ManualRace::new(ManualClock::new());
//!
//! race.start_race(TreeType::Sportsman).unwrap();
//! race.advance(1200.0);
//! race.launch();
//!
//! assert_eq!(race.race_state(), RaceState::Finished);
//! assert_eq!(race.lights(), FOUL);
//! assert_eq!(race.result().unwrap().kind, ResultKind::Foul);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod race;
pub mod sequencer;
pub mod timer;
pub mod validation;

// Re-export commonly used types
pub use crate::builder::RaceBuilder;
pub use crate::config::RaceConfig;
pub use crate::core::{LightState, Lights, RaceOutcome, RaceState, State, TreeType};
pub use crate::race::{ManualRace, Race, RaceError, RaceResult, ResultSink, SystemRace};
pub use crate::timer::{CancelToken, ManualClock, SystemClock, TimerSource};
