//! Timer sources: monotonic time plus single-shot delayed events.
//!
//! A delayed callback is modelled as a typed event handed back to its owner
//! through [`TimerSource::poll_due`], so it re-enters the owner's event queue
//! serialized with user commands. Events that fall due at the same instant
//! come back in the order they were scheduled.
//!
//! Two sources are provided:
//! - [`ManualClock`] only moves when told to, for tests and replays
//! - [`SystemClock`] follows `std::time::Instant`

mod manual;
mod queue;
mod system;

pub use manual::ManualClock;
pub use system::SystemClock;

use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;

/// Errors raised while scheduling.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TimerError {
    #[error("Invalid timer delay {delay_millis}ms, expected a finite non-negative value")]
    InvalidDelay { delay_millis: f64 },
}

/// Monotonic clock with delayed single-shot events.
pub trait TimerSource<E> {
    /// Milliseconds since the source's origin. Never decreases.
    fn now(&self) -> f64;

    /// Schedule one delivery of `event` no earlier than `delay_millis` from now.
    fn after(&mut self, delay_millis: f64, event: E) -> Result<CancelToken, TimerError>;

    /// Pop the next live event whose deadline has passed.
    fn poll_due(&mut self) -> Option<E>;

    /// Deadline of the next live event, on the `now()` scale.
    fn next_deadline(&self) -> Option<f64>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TokenStatus {
    Pending,
    Cancelled,
    Fired,
}

/// Handle to one scheduled event.
///
/// Cancelling is idempotent and has no effect once the event was delivered.
/// Tokens share their status with the queue entry and stay on the owner's
/// thread.
#[derive(Clone, Debug)]
pub struct CancelToken {
    status: Rc<Cell<TokenStatus>>,
}

impl CancelToken {
    fn new() -> Self {
        Self {
            status: Rc::new(Cell::new(TokenStatus::Pending)),
        }
    }

    pub fn cancel(&self) {
        self.settle(TokenStatus::Cancelled);
    }

    pub fn is_cancelled(&self) -> bool {
        self.status.get() == TokenStatus::Cancelled
    }

    pub fn is_pending(&self) -> bool {
        self.status.get() == TokenStatus::Pending
    }

    fn mark_fired(&self) {
        self.settle(TokenStatus::Fired);
    }

    // Only a pending token changes status.
    fn settle(&self, to: TokenStatus) {
        if self.is_pending() {
            self.status.set(to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_is_idempotent() {
        let token = CancelToken::new();
        assert!(token.is_pending());

        token.cancel();
        token.cancel();
        assert!(token.is_cancelled());
        assert!(!token.is_pending());
    }

    #[test]
    fn cancel_after_fire_is_ignored() {
        let token = CancelToken::new();
        token.mark_fired();
        token.cancel();

        assert!(!token.is_cancelled());
        assert!(!token.is_pending());
    }

    #[test]
    fn fire_after_cancel_keeps_it_cancelled() {
        let token = CancelToken::new();
        token.cancel();
        token.mark_fired();

        assert!(token.is_cancelled());
    }

    #[test]
    fn clones_share_status() {
        let token = CancelToken::new();
        let clone = token.clone();
        clone.cancel();
        assert!(token.is_cancelled());
    }
}
