//! Race configuration.
//!
//! Defaults reproduce the standard trees. Hosts can override the default
//! tree from the environment and swap in custom schedules, which are
//! validated before a race is built.

use crate::core::{LightSchedule, ParseTreeTypeError, TreeType};
use crate::validation::{collect_violations, validate_schedule, ScheduleViolation};
use std::env;
use thiserror::Error;
use tracing::{info, warn};

/// Environment variable selecting the default tree.
pub const TREE_ENV: &str = "DRAGTREE_TREE";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value: {source}")]
    InvalidTree {
        key: String,
        source: ParseTreeTypeError,
    },

    #[error("{tree} schedule is invalid: {violations:?}")]
    InvalidSchedule {
        tree: TreeType,
        violations: Vec<ScheduleViolation>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct RaceConfig {
    /// Tree used by `Race::start_default`.
    pub default_tree: TreeType,
    pub sportsman: LightSchedule,
    pub pro: LightSchedule,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            default_tree: TreeType::default(),
            sportsman: TreeType::Sportsman.schedule(),
            pro: TreeType::Pro.schedule(),
        }
    }
}

impl RaceConfig {
    /// Load overrides from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load overrides through `lookup`, which maps a key to its raw value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_tree = match lookup(TREE_ENV) {
            Some(raw) => raw.parse().map_err(|source| {
                warn!("Invalid {TREE_ENV} value: {raw}");
                ConfigError::InvalidTree {
                    key: TREE_ENV.to_string(),
                    source,
                }
            })?,
            None => {
                info!("{TREE_ENV} not set, using default: {}", TreeType::default());
                TreeType::default()
            }
        };

        Ok(Self {
            default_tree,
            ..Self::default()
        })
    }

    pub fn with_default_tree(mut self, tree: TreeType) -> Self {
        self.default_tree = tree;
        self
    }

    pub fn with_schedule(mut self, tree: TreeType, schedule: LightSchedule) -> Self {
        match tree {
            TreeType::Sportsman => self.sportsman = schedule,
            TreeType::Pro => self.pro = schedule,
        }
        self
    }

    pub fn schedule(&self, tree: TreeType) -> &LightSchedule {
        match tree {
            TreeType::Sportsman => &self.sportsman,
            TreeType::Pro => &self.pro,
        }
    }

    /// Check both schedules, reporting the first tree with violations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for tree in [TreeType::Sportsman, TreeType::Pro] {
            let violations = collect_violations(validate_schedule(self.schedule(tree)));
            if !violations.is_empty() {
                return Err(ConfigError::InvalidSchedule { tree, violations });
            }
        }
        Ok(())
    }
}
