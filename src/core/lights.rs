//! Start tree lamps.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of lamp positions on the tree: two staged ambers and the go/foul lamp.
pub const LIGHT_COUNT: usize = 3;

/// Snapshot of every lamp position, top to bottom.
pub type Lights = [LightState; LIGHT_COUNT];

/// Every lamp dark. The tree starts each attempt like this.
pub const ALL_OFF: Lights = [LightState::Off, LightState::Off, LightState::Off];

/// Go: ambers dark, bottom lamp green.
pub const GO: Lights = [LightState::Off, LightState::Off, LightState::Green];

/// Red light shown after a foul start.
pub const FOUL: Lights = [LightState::Off, LightState::Off, LightState::Red];

/// State of a single lamp.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightState {
    #[default]
    Off,
    Amber,
    Green,
    Red,
}

impl LightState {
    pub fn is_lit(&self) -> bool {
        !matches!(self, Self::Off)
    }
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Off => "off",
            Self::Amber => "amber",
            Self::Green => "green",
            Self::Red => "red",
        };
        f.write_str(name)
    }
}

/// Render a snapshot as `off/amber/green`, used in log fields.
pub fn describe(lights: &Lights) -> String {
    lights
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_snapshots() {
        assert!(ALL_OFF.iter().all(|l| !l.is_lit()));
        assert_eq!(GO[2], LightState::Green);
        assert_eq!(FOUL[2], LightState::Red);
        assert!(!GO[0].is_lit() && !GO[1].is_lit());
    }

    #[test]
    fn describe_joins_lamps() {
        assert_eq!(describe(&FOUL), "off/off/red");
        assert_eq!(
            describe(&[LightState::Amber, LightState::Amber, LightState::Off]),
            "amber/amber/off"
        );
    }

    #[test]
    fn lamps_serialize_lowercase() {
        let json = serde_json::to_string(&GO).unwrap();
        assert_eq!(json, r#"["off","off","green"]"#);
    }
}
