//! Light sequencer: drives one light schedule through a timer source.
//!
//! Every transition of the schedule is scheduled up front as a
//! [`SequencerStep`]. The owner feeds due steps back through
//! [`LightSequencer::fire`], which answers with the signal the step raises:
//! an ordinary light change or the go light.

use crate::core::{Lights, LightSchedule, ScheduledTransition, TreeType};
use crate::timer::{CancelToken, TimerError, TimerSource};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SequencerError {
    #[error("A light sequence is already running, abort it first")]
    AlreadyActive,

    #[error(transparent)]
    Timer(#[from] TimerError),
}

/// Timer event carrying one scheduled transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequencerStep {
    pub index: usize,
    pub transition: ScheduledTransition,
}

/// What a fired step asks the owner to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SequencerSignal {
    /// Show these lights.
    Transition(Lights),
    /// Show these lights and start the reaction clock.
    Go(Lights),
}

impl SequencerSignal {
    pub fn lights(&self) -> Lights {
        match self {
            Self::Transition(lights) | Self::Go(lights) => *lights,
        }
    }
}

#[derive(Default)]
pub struct LightSequencer {
    pending: Vec<(usize, CancelToken)>,
}

impl LightSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the standard schedule for `tree`.
    pub fn begin_tree<T>(&mut self, tree: TreeType, timer: &mut T) -> Result<(), SequencerError>
    where
        T: TimerSource<SequencerStep>,
    {
        self.begin(&tree.schedule(), timer)
    }

    /// Schedule every transition of `schedule`, relative to `timer.now()`.
    ///
    /// If scheduling fails partway, the steps already scheduled are cancelled.
    pub fn begin<T>(&mut self, schedule: &LightSchedule, timer: &mut T) -> Result<(), SequencerError>
    where
        T: TimerSource<SequencerStep>,
    {
        if self.is_active() {
            return Err(SequencerError::AlreadyActive);
        }

        for (index, transition) in schedule.transitions().iter().enumerate() {
            let step = SequencerStep {
                index,
                transition: *transition,
            };
            match timer.after(transition.delay_millis, step) {
                Ok(token) => self.pending.push((index, token)),
                Err(err) => {
                    self.abort();
                    return Err(err.into());
                }
            }
        }

        debug!(steps = schedule.len(), "light sequence scheduled");
        Ok(())
    }

    /// Cancel every pending step. Lights already applied stay as they are.
    pub fn abort(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        debug!(cancelled = self.pending.len(), "light sequence aborted");
        for (_, token) in self.pending.drain(..) {
            token.cancel();
        }
    }

    /// Apply a delivered step.
    ///
    /// Returns `None` for a step this sequencer is not waiting on.
    pub fn fire(&mut self, step: SequencerStep) -> Option<SequencerSignal> {
        let position = self.pending.iter().position(|(i, _)| *i == step.index)?;
        self.pending.remove(position);

        let lights = step.transition.lights;
        if step.transition.is_go {
            self.abort();
            Some(SequencerSignal::Go(lights))
        } else {
            Some(SequencerSignal::Transition(lights))
        }
    }

    /// Whether any step is still waiting on the timer.
    pub fn is_active(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_steps(&self) -> usize {
        self.pending.len()
    }
}
