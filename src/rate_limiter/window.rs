//! Rolling window of admitted request instants.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub(crate) struct RequestWindow {
    admitted: VecDeque<Instant>,
}

impl RequestWindow {
    /// Drops entries at least `window` older than `now`.
    pub(crate) fn prune(&mut self, now: Instant, window: Duration) {
        while self
            .admitted
            .front()
            .is_some_and(|&t| now.saturating_duration_since(t) >= window)
        {
            self.admitted.pop_front();
        }
    }

    /// Records `now` if fewer than `limit` entries remain after pruning.
    ///
    /// Returns the number of entries in the window after the attempt, and
    /// whether the request was admitted.
    pub(crate) fn try_admit(&mut self, now: Instant, window: Duration, limit: u32) -> (usize, bool) {
        self.prune(now, window);
        if self.admitted.len() >= limit as usize {
            return (self.admitted.len(), false);
        }
        self.admitted.push_back(now);
        (self.admitted.len(), true)
    }

    /// Time until the oldest entry ages out.
    pub(crate) fn time_until_slot(&self, now: Instant, window: Duration) -> Duration {
        self.admitted
            .front()
            .map(|&oldest| window.saturating_sub(now.saturating_duration_since(oldest)))
            .unwrap_or_default()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.admitted.is_empty()
    }
}
