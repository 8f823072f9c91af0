use serde::{Deserialize, Serialize};

/// How a finished attempt ended. Produced once per attempt.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum RaceOutcome {
    /// Launched before the go light.
    Foul {
        /// Milliseconds between staging start and the launch.
        triggered_at_millis: f64,
    },
    /// Launched after the go light.
    ReactionResult {
        /// Milliseconds between the go light and the launch.
        reaction_time_millis: f64,
    },
}

impl RaceOutcome {
    pub fn is_foul(&self) -> bool {
        matches!(self, Self::Foul { .. })
    }

    pub fn reaction_time_millis(&self) -> Option<f64> {
        match self {
            Self::ReactionResult {
                reaction_time_millis,
            } => Some(*reaction_time_millis),
            Self::Foul { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foul_has_no_reaction_time() {
        let foul = RaceOutcome::Foul {
            triggered_at_millis: 300.0,
        };
        assert!(foul.is_foul());
        assert_eq!(foul.reaction_time_millis(), None);
    }

    #[test]
    fn reaction_result_exposes_time() {
        let result = RaceOutcome::ReactionResult {
            reaction_time_millis: 250.0,
        };
        assert!(!result.is_foul());
        assert_eq!(result.reaction_time_millis(), Some(250.0));
    }
}
