//! Simulated clock driven by explicit `advance_to` calls.

use super::queue::TimerQueue;
use super::{CancelToken, TimerError, TimerSource};

/// Clock that only moves when told to.
///
/// # Example
///
/// ```rust
/// use dragtree::timer::{ManualClock, TimerSource};
///
/// let mut clock = ManualClock::new();
/// clock.after(500.0, "amber").unwrap();
///
/// assert_eq!(clock.poll_due(), None);
/// clock.advance_to(500.0);
/// assert_eq!(clock.poll_due(), Some("amber"));
/// ```
pub struct ManualClock<E> {
    now: f64,
    queue: TimerQueue<E>,
}

impl<E> ManualClock<E> {
    pub fn new() -> Self {
        Self::starting_at(0.0)
    }

    pub fn starting_at(millis: f64) -> Self {
        Self {
            now: millis,
            queue: TimerQueue::new(),
        }
    }

    /// Move the clock to `millis`. Earlier readings are ignored.
    pub fn advance_to(&mut self, millis: f64) {
        if millis > self.now {
            self.now = millis;
        }
    }

    pub fn advance_by(&mut self, millis: f64) {
        self.advance_to(self.now + millis);
    }

    /// Number of scheduled events not yet delivered or cancelled.
    pub fn pending(&self) -> usize {
        self.queue.pending()
    }
}

impl<E> Default for ManualClock<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerSource<E> for ManualClock<E> {
    fn now(&self) -> f64 {
        self.now
    }

    fn after(&mut self, delay_millis: f64, event: E) -> Result<CancelToken, TimerError> {
        self.queue.schedule(self.now, delay_millis, event)
    }

    fn poll_due(&mut self) -> Option<E> {
        self.queue.pop_due(self.now)
    }

    fn next_deadline(&self) -> Option<f64> {
        self.queue.next_deadline()
    }
}
