//! Real monotonic clock.

use super::queue::TimerQueue;
use super::{CancelToken, TimerError, TimerSource};
use std::time::{Duration, Instant};

/// Clock backed by [`Instant`]. `now()` is measured from construction.
///
/// Events are handed out by `poll_due` once their deadline has passed; the
/// host decides how long to wait, typically with [`SystemClock::time_until_next`].
pub struct SystemClock<E> {
    origin: Instant,
    queue: TimerQueue<E>,
}

impl<E> SystemClock<E> {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            queue: TimerQueue::new(),
        }
    }

    /// How long until the next live event falls due.
    ///
    /// `Duration::ZERO` when one is already due, `None` when nothing is pending.
    pub fn time_until_next(&self) -> Option<Duration> {
        let deadline = self.queue.next_deadline()?;
        let remaining = (deadline - self.now()).max(0.0);
        Some(Duration::from_secs_f64(remaining / 1000.0))
    }
}

impl<E> Default for SystemClock<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerSource<E> for SystemClock<E> {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    fn after(&mut self, delay_millis: f64, event: E) -> Result<CancelToken, TimerError> {
        let now = self.now();
        self.queue.schedule(now, delay_millis, event)
    }

    fn poll_due(&mut self) -> Option<E> {
        let now = self.now();
        self.queue.pop_due(now)
    }

    fn next_deadline(&self) -> Option<f64> {
        self.queue.next_deadline()
    }
}
