//! Builder for constructing races.

use crate::builder::error::BuildError;
use crate::config::RaceConfig;
use crate::core::{LightSchedule, TreeType};
use crate::race::{Race, ResultSink};
use crate::sequencer::SequencerStep;
use crate::timer::TimerSource;

/// Fluent builder for [`Race`].
///
/// # Example
///
/// ```rust
/// use dragtree::builder::RaceBuilder;
/// use dragtree::core::{RaceState, TreeType};
/// use dragtree::race::{ManualRace, RaceResult};
/// use dragtree::timer::ManualClock;
///
/// let race: ManualRace = RaceBuilder::new()
///     .timer(ManualClock::new())
///     .tree(TreeType::Pro)
///     .sink(|result: &RaceResult| println!("{}", result.message))
///     .build()
///     .unwrap();
///
/// assert_eq!(race.race_state(), RaceState::Idle);
/// assert_eq!(race.tree(), TreeType::Pro);
/// ```
pub struct RaceBuilder<T> {
    timer: Option<T>,
    config: RaceConfig,
    sinks: Vec<Box<dyn ResultSink>>,
}

impl<T: TimerSource<SequencerStep>> RaceBuilder<T> {
    pub fn new() -> Self {
        Self {
            timer: None,
            config: RaceConfig::default(),
            sinks: Vec::new(),
        }
    }

    /// Set the timer source (required).
    pub fn timer(mut self, timer: T) -> Self {
        self.timer = Some(timer);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: RaceConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the default tree.
    pub fn tree(mut self, tree: TreeType) -> Self {
        self.config.default_tree = tree;
        self
    }

    /// Use a custom schedule for `tree`. Checked by `build`.
    pub fn schedule(mut self, tree: TreeType, schedule: LightSchedule) -> Self {
        self.config = self.config.with_schedule(tree, schedule);
        self
    }

    /// Register a result sink.
    pub fn sink<K>(mut self, sink: K) -> Self
    where
        K: ResultSink + 'static,
    {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Build the race.
    /// Returns an error if the timer is missing or a schedule is invalid.
    pub fn build(self) -> Result<Race<T>, BuildError> {
        let timer = self.timer.ok_or(BuildError::MissingTimer)?;
        self.config.validate()?;
        Ok(Race::from_parts(timer, self.config, self.sinks))
    }
}

impl<T: TimerSource<SequencerStep>> Default for RaceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::core::{RaceState, ScheduledTransition, ALL_OFF};
    use crate::timer::ManualClock;

    type Clock = ManualClock<SequencerStep>;

    #[test]
    fn builder_requires_timer() {
        let result = RaceBuilder::<Clock>::new().build();
        assert!(matches!(result, Err(BuildError::MissingTimer)));
    }

    #[test]
    fn builder_rejects_invalid_schedule() {
        let result = RaceBuilder::<Clock>::new()
            .timer(ManualClock::new())
            .schedule(
                TreeType::Sportsman,
                LightSchedule::new(vec![ScheduledTransition::step(500.0, ALL_OFF)]),
            )
            .build();

        assert!(matches!(
            result,
            Err(BuildError::InvalidConfig(ConfigError::InvalidSchedule {
                tree: TreeType::Sportsman,
                ..
            }))
        ));
    }

    #[test]
    fn custom_schedule_drives_the_race() {
        let mut race = RaceBuilder::<Clock>::new()
            .timer(ManualClock::new())
            .schedule(
                TreeType::Pro,
                LightSchedule::new(vec![ScheduledTransition::go(400.0)]),
            )
            .tree(TreeType::Pro)
            .build()
            .unwrap();

        race.start_default().unwrap();
        race.advance(399.0);
        assert_eq!(race.race_state(), RaceState::Staging);
        race.advance(1.0);
        assert_eq!(race.race_state(), RaceState::Racing);
    }

    #[test]
    fn sinks_are_registered() {
        let mut race = RaceBuilder::<Clock>::new()
            .timer(ManualClock::new())
            .sink(|_: &crate::race::RaceResult| {})
            .build()
            .unwrap();

        race.start_race(TreeType::Pro).unwrap();
        assert!(race.launch().is_some());
    }
}
