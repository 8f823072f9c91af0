//! Start tree variants and their light schedules.

use super::lights::{LightState, Lights, GO};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const A: LightState = LightState::Amber;
const O: LightState = LightState::Off;

/// Start tree variant chosen before a race.
///
/// Sportsman staggers the ambers top to bottom; Pro flashes all ambers at
/// once and goes green sooner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeType {
    #[default]
    Sportsman,
    Pro,
}

impl TreeType {
    /// Delay from staging start to the go light on the standard schedule.
    pub fn go_delay_millis(&self) -> f64 {
        match self {
            Self::Sportsman => 2000.0,
            Self::Pro => 900.0,
        }
    }

    /// The standard schedule for this tree.
    pub fn schedule(&self) -> LightSchedule {
        match self {
            Self::Sportsman => LightSchedule::new(vec![
                ScheduledTransition::step(500.0, [A, O, O]),
                ScheduledTransition::step(1000.0, [A, A, O]),
                ScheduledTransition::step(1500.0, [A, A, A]),
                ScheduledTransition::go(2000.0),
            ]),
            Self::Pro => LightSchedule::new(vec![
                ScheduledTransition::step(500.0, [A, A, A]),
                ScheduledTransition::go(900.0),
            ]),
        }
    }
}

impl fmt::Display for TreeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sportsman => f.write_str("sportsman"),
            Self::Pro => f.write_str("pro"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown tree type '{0}', expected 'sportsman' or 'pro'")]
pub struct ParseTreeTypeError(pub String);

impl FromStr for TreeType {
    type Err = ParseTreeTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sportsman" => Ok(Self::Sportsman),
            "pro" => Ok(Self::Pro),
            _ => Err(ParseTreeTypeError(s.to_string())),
        }
    }
}

/// One timed change of the tree, measured from staging start.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTransition {
    pub delay_millis: f64,
    pub lights: Lights,
    /// Set on the transition that lights the go lamp and starts the reaction clock.
    pub is_go: bool,
}

impl ScheduledTransition {
    pub fn step(delay_millis: f64, lights: Lights) -> Self {
        Self {
            delay_millis,
            lights,
            is_go: false,
        }
    }

    pub fn go(delay_millis: f64) -> Self {
        Self {
            delay_millis,
            lights: GO,
            is_go: true,
        }
    }
}

/// Ordered transitions for one attempt, ending in the go transition.
///
/// Custom schedules are checked with
/// [`validate_schedule`](crate::validation::validate_schedule) before use.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightSchedule {
    transitions: Vec<ScheduledTransition>,
}

impl LightSchedule {
    pub fn new(transitions: Vec<ScheduledTransition>) -> Self {
        Self { transitions }
    }

    pub fn transitions(&self) -> &[ScheduledTransition] {
        &self.transitions
    }

    /// Delay of the go transition, if the schedule has one.
    pub fn go_delay_millis(&self) -> Option<f64> {
        self.transitions
            .iter()
            .find(|t| t.is_go)
            .map(|t| t.delay_millis)
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sportsman_staggers_ambers() {
        let schedule = TreeType::Sportsman.schedule();
        let delays: Vec<f64> = schedule.transitions().iter().map(|t| t.delay_millis).collect();
        assert_eq!(delays, vec![500.0, 1000.0, 1500.0, 2000.0]);
        assert_eq!(schedule.transitions()[0].lights, [A, O, O]);
        assert_eq!(schedule.transitions()[1].lights, [A, A, O]);
        assert_eq!(schedule.transitions()[2].lights, [A, A, A]);
        assert_eq!(schedule.transitions()[3].lights, GO);
        assert!(schedule.transitions()[3].is_go);
    }

    #[test]
    fn pro_flashes_ambers_together() {
        let schedule = TreeType::Pro.schedule();
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.transitions()[0].lights, [A, A, A]);
        assert!(!schedule.transitions()[0].is_go);
        assert_eq!(schedule.go_delay_millis(), Some(900.0));
    }

    #[test]
    fn go_delay_matches_schedule() {
        for tree in [TreeType::Sportsman, TreeType::Pro] {
            assert_eq!(tree.schedule().go_delay_millis(), Some(tree.go_delay_millis()));
        }
    }

    #[test]
    fn parses_tree_names() {
        assert_eq!("sportsman".parse::<TreeType>(), Ok(TreeType::Sportsman));
        assert_eq!(" PRO ".parse::<TreeType>(), Ok(TreeType::Pro));
        assert!("christmas".parse::<TreeType>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for tree in [TreeType::Sportsman, TreeType::Pro] {
            assert_eq!(tree.to_string().parse::<TreeType>(), Ok(tree));
        }
    }
}
