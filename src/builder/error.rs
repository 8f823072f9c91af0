//! Build errors for the race builder.

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Timer source not specified. Call .timer(source) before .build()")]
    MissingTimer,

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}
