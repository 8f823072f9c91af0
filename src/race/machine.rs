//! The race state machine.

use crate::builder::RaceBuilder;
use crate::checkpoint::RaceSnapshot;
use crate::config::RaceConfig;
use crate::core::{
    describe, Lights, RaceOutcome, RaceState, State, StateHistory, StateTransition, TreeType,
    ALL_OFF, FOUL, GO,
};
use crate::race::error::RaceError;
use crate::race::result::{format_outcome, RaceResult, ResultSink};
use crate::race::transition::{next_state, RaceEvent};
use crate::sequencer::{LightSequencer, SequencerSignal, SequencerStep};
use crate::timer::{ManualClock, SystemClock, TimerSource};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Race driven by a simulated clock.
pub type ManualRace = Race<ManualClock<SequencerStep>>;

/// Race driven by the system clock.
pub type SystemRace = Race<SystemClock<SequencerStep>>;

/// One start tree and its reaction timer.
///
/// All commands run on the caller's thread. Timer events only reach the
/// machine through [`Race::poll`] (or [`Race::advance`] on a simulated clock),
/// so they are serialized with `start_race` and `launch`.
///
/// # Example
///
/// ```rust
/// use dragtree::core::{RaceState, TreeType, GO};
/// use dragtree::race::ManualRace;
/// use dragtree::timer::ManualClock;
///
/// let mut race = ManualRace::new(ManualClock::new());
/// race.start_race(TreeType::Pro).unwrap();
///
/// race.advance(900.0);
/// assert_eq!(race.race_state(), RaceState::Racing);
/// assert_eq!(race.lights(), GO);
///
/// race.advance(180.0);
/// race.launch();
/// assert_eq!(race.result().unwrap().message, "Reaction Time: 180.000ms");
/// ```
pub struct Race<T> {
    timer: T,
    sequencer: LightSequencer,
    config: RaceConfig,
    sinks: Vec<Box<dyn ResultSink>>,
    state: RaceState,
    lights: Lights,
    tree: TreeType,
    attempt: usize,
    staging_started_at: Option<f64>,
    go_at: Option<f64>,
    outcome: Option<RaceOutcome>,
    result: Option<RaceResult>,
    history: StateHistory<RaceState>,
}

impl<T: TimerSource<SequencerStep>> Race<T> {
    /// Create an idle race with the standard schedules.
    pub fn new(timer: T) -> Self {
        Self::from_parts(timer, RaceConfig::default(), Vec::new())
    }

    /// Fluent builder for a race with custom config or sinks.
    pub fn builder() -> RaceBuilder<T> {
        RaceBuilder::new()
    }

    pub(crate) fn from_parts(timer: T, config: RaceConfig, sinks: Vec<Box<dyn ResultSink>>) -> Self {
        Self {
            timer,
            sequencer: LightSequencer::new(),
            tree: config.default_tree,
            config,
            sinks,
            state: RaceState::Idle,
            lights: ALL_OFF,
            attempt: 0,
            staging_started_at: None,
            go_at: None,
            outcome: None,
            result: None,
            history: StateHistory::new(),
        }
    }

    /// Register a sink that receives every finished result.
    pub fn add_sink<K>(&mut self, sink: K)
    where
        K: ResultSink + 'static,
    {
        self.sinks.push(Box::new(sink));
    }

    /// Stage a new attempt on `tree`.
    ///
    /// Any attempt in flight is abandoned: its timers are cancelled before
    /// anything else changes. The previous outcome is discarded.
    ///
    /// If the tree cannot be scheduled the race is left idle with nothing
    /// pending and the error is returned.
    pub fn start_race(&mut self, tree: TreeType) -> Result<(), RaceError> {
        self.sequencer.abort();
        if self.state.is_active() {
            debug!(attempt = self.attempt, state = self.state.name(), "abandoning attempt in flight");
        }

        self.attempt += 1;
        self.tree = tree;
        self.lights = ALL_OFF;
        self.outcome = None;
        self.result = None;
        self.go_at = None;
        let started_at = self.timer.now();
        self.staging_started_at = Some(started_at);
        self.history = StateHistory::new();
        self.enter(RaceEvent::StartRace, started_at);

        if let Err(err) = self
            .sequencer
            .begin(self.config.schedule(tree), &mut self.timer)
        {
            warn!(attempt = self.attempt, %tree, error = %err, "failed to start race");
            self.sequencer.abort();
            self.state = RaceState::Idle;
            self.staging_started_at = None;
            self.history = StateHistory::new();
            return Err(err.into());
        }

        info!(attempt = self.attempt, %tree, "race staged");
        Ok(())
    }

    /// Stage a new attempt on the configured default tree.
    pub fn start_default(&mut self) -> Result<(), RaceError> {
        self.start_race(self.config.default_tree)
    }

    /// Player input.
    ///
    /// Light steps already due are applied first. While staging this is a
    /// foul; while racing it stops the reaction clock. In any other state it
    /// does nothing and returns `None`.
    pub fn launch(&mut self) -> Option<RaceOutcome> {
        self.poll();

        let now = self.timer.now();
        let outcome = match self.state {
            RaceState::Staging => RaceOutcome::Foul {
                triggered_at_millis: now - self.staging_started_at.unwrap_or(now),
            },
            RaceState::Racing => RaceOutcome::ReactionResult {
                reaction_time_millis: now - self.go_at.unwrap_or(now),
            },
            RaceState::Idle | RaceState::Finished => {
                debug!(state = self.state.name(), "launch ignored");
                return None;
            }
        };

        self.sequencer.abort();
        self.lights = if outcome.is_foul() { FOUL } else { GO };
        self.enter(RaceEvent::Launch, now);
        self.finish(outcome);
        Some(outcome)
    }

    /// Apply every timer event that has fallen due. Returns how many were delivered.
    pub fn poll(&mut self) -> usize {
        let mut delivered = 0;
        while let Some(step) = self.timer.poll_due() {
            self.apply_step(step);
            delivered += 1;
        }
        delivered
    }

    /// Current lamp snapshot.
    pub fn lights(&self) -> Lights {
        self.lights
    }

    /// Current machine state.
    pub fn race_state(&self) -> RaceState {
        self.state
    }

    /// Tree of the current (or next default) attempt.
    pub fn tree(&self) -> TreeType {
        self.tree
    }

    /// Outcome of a finished attempt.
    pub fn outcome(&self) -> Option<&RaceOutcome> {
        self.outcome.as_ref()
    }

    pub fn result(&self) -> Option<&RaceResult> {
        self.result.as_ref()
    }

    /// Transitions of the current attempt.
    pub fn history(&self) -> &StateHistory<RaceState> {
        &self.history
    }

    /// Number of attempts started so far.
    pub fn attempt(&self) -> usize {
        self.attempt
    }

    /// Schedules and default tree in use.
    pub fn config(&self) -> &RaceConfig {
        &self.config
    }

    /// The underlying timer source.
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Serializable copy of the current attempt.
    pub fn snapshot(&self) -> RaceSnapshot {
        RaceSnapshot::capture(
            self.attempt,
            self.tree,
            self.state,
            self.lights,
            self.outcome,
            self.result.clone(),
            self.history.clone(),
        )
    }

    fn apply_step(&mut self, step: SequencerStep) {
        if self.state != RaceState::Staging {
            warn!(index = step.index, state = self.state.name(), "stale light step ignored");
            return;
        }
        let Some(signal) = self.sequencer.fire(step) else {
            warn!(index = step.index, "unexpected light step ignored");
            return;
        };

        self.lights = signal.lights();
        debug!(index = step.index, lights = %describe(&self.lights), "lights changed");

        // The go instant is the scheduled one, however late the step is polled.
        if let SequencerSignal::Go(_) = signal {
            let go_at = self
                .staging_started_at
                .map_or_else(|| self.timer.now(), |start| start + step.transition.delay_millis);
            self.go_at = Some(go_at);
            self.enter(RaceEvent::Go, go_at);
        }
    }

    fn enter(&mut self, event: RaceEvent, at_millis: f64) {
        let Some(to) = next_state(self.state, event) else {
            debug!(state = self.state.name(), ?event, "no transition");
            return;
        };

        debug!(
            attempt = self.attempt,
            from = self.state.name(),
            to = to.name(),
            ?event,
            at_millis,
            "race transition"
        );
        self.history = self.history.record(StateTransition {
            from: self.state,
            to,
            at_millis,
            attempt: self.attempt,
        });
        self.state = to;
    }

    fn finish(&mut self, outcome: RaceOutcome) {
        let result = format_outcome(&outcome);
        info!(attempt = self.attempt, tree = %self.tree, result = %result.message, "race finished");

        for sink in &mut self.sinks {
            sink.publish(&result);
        }
        self.outcome = Some(outcome);
        self.result = Some(result);
    }
}

impl Race<ManualClock<SequencerStep>> {
    /// Move simulated time forward by `millis`, delivering events on the way.
    ///
    /// The clock is set to each deadline before its event is applied, so
    /// the go light is timestamped with its scheduled time exactly.
    pub fn advance(&mut self, millis: f64) {
        let target = self.timer.now() + millis;
        self.advance_to(target);
    }

    /// Move simulated time forward to `millis`.
    pub fn advance_to(&mut self, millis: f64) {
        while let Some(deadline) = self.timer.next_deadline().filter(|d| *d <= millis) {
            self.timer.advance_to(deadline);
            self.poll();
        }
        self.timer.advance_to(millis);
        self.poll();
    }

    /// Current simulated time.
    pub fn now(&self) -> f64 {
        self.timer.now()
    }
}

impl Race<SystemClock<SequencerStep>> {
    /// How long a host loop may sleep before the next light step is due.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.timer.time_until_next()
    }
}
