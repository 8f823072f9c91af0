//! Pending-event queue shared by the clock implementations.

use super::{CancelToken, TimerError};

struct Entry<E> {
    due: f64,
    seq: u64,
    token: CancelToken,
    event: E,
}

/// Events ordered by deadline, ties broken by scheduling order.
pub(crate) struct TimerQueue<E> {
    entries: Vec<Entry<E>>,
    next_seq: u64,
}

impl<E> TimerQueue<E> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    pub(crate) fn schedule(
        &mut self,
        now: f64,
        delay_millis: f64,
        event: E,
    ) -> Result<CancelToken, TimerError> {
        if !delay_millis.is_finite() || delay_millis < 0.0 {
            return Err(TimerError::InvalidDelay { delay_millis });
        }

        let token = CancelToken::new();
        self.entries.push(Entry {
            due: now + delay_millis,
            seq: self.next_seq,
            token: token.clone(),
            event,
        });
        self.next_seq += 1;
        Ok(token)
    }

    /// Remove and return the earliest live event due at or before `until`.
    pub(crate) fn pop_due(&mut self, until: f64) -> Option<E> {
        self.prune();
        let index = self.earliest()?;
        if self.entries[index].due > until {
            return None;
        }
        let entry = self.entries.swap_remove(index);
        entry.token.mark_fired();
        Some(entry.event)
    }

    /// Deadline of the earliest live event.
    pub(crate) fn next_deadline(&self) -> Option<f64> {
        self.entries
            .iter()
            .filter(|e| !e.token.is_cancelled())
            .map(|e| e.due)
            .min_by(f64::total_cmp)
    }

    pub(crate) fn pending(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| !e.token.is_cancelled())
            .count()
    }

    fn prune(&mut self) {
        self.entries.retain(|e| !e.token.is_cancelled());
    }

    fn earliest(&self) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)))
            .map(|(i, _)| i)
    }
}
