//! Validation of custom light schedules.
//!
//! Uses Stillwater's `Validation` to report every problem with a schedule in
//! one pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use dragtree::core::{LightSchedule, ScheduledTransition, ALL_OFF};
//! use dragtree::validation::{collect_violations, validate_schedule, ScheduleViolation};
//!
//! let schedule = LightSchedule::new(vec![ScheduledTransition::step(f64::NAN, ALL_OFF)]);
//! let found = collect_violations(validate_schedule(&schedule));
//!
//! assert!(found.contains(&ScheduleViolation::MissingGo));
//! assert_eq!(found.len(), 2);
//! ```

pub mod rules;
pub mod violations;

pub use rules::{collect_violations, validate_schedule, ScheduleValidation};
pub use violations::ScheduleViolation;
