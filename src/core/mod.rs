//! Core race types.
//!
//! Plain values with no timers or side effects:
//! - States via the `State` trait and `RaceState`
//! - Lamps, start trees and their schedules
//! - Outcomes and immutable transition history

mod history;
mod lights;
mod outcome;
mod state;
mod tree;

pub use history::{StateHistory, StateTransition};
pub use lights::{describe, LightState, Lights, ALL_OFF, FOUL, GO, LIGHT_COUNT};
pub use outcome::RaceOutcome;
pub use state::{RaceState, State};
pub use tree::{LightSchedule, ParseTreeTypeError, ScheduledTransition, TreeType};
