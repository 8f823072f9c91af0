//! Builder API for race construction.
//!
//! Provides the fluent [`RaceBuilder`] and the `state_enum!` macro used to
//! declare machine states with minimal boilerplate.

pub mod error;
pub mod macros;
pub mod race;

pub use error::BuildError;
pub use race::RaceBuilder;
