use crate::sequencer::SequencerError;
use crate::timer::TimerError;
use thiserror::Error;

/// Failures surfaced by `Race::start_race`.
///
/// Launching outside an attempt is not an error; it is a no-op.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RaceError {
    #[error("Could not schedule the start tree: {0}")]
    Timer(#[from] TimerError),

    #[error("Light sequencer refused to start: {0}")]
    Sequencer(SequencerError),
}

impl From<SequencerError> for RaceError {
    fn from(err: SequencerError) -> Self {
        match err {
            SequencerError::Timer(timer) => Self::Timer(timer),
            other => Self::Sequencer(other),
        }
    }
}
