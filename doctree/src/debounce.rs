use std::time::{Duration, Instant};

/// Trailing-edge debounce driven by host-supplied timestamps.
///
/// Each `call` cancels whatever is pending and schedules `value` to be
/// released `wait` after `now`. The host releases it with `poll`.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    wait: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debounce<T> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Schedule `value`. Returns true if a pending value was cancelled.
    pub fn call(&mut self, value: T, now: Instant) -> bool {
        let cancelled = self.pending.is_some();
        self.pending = Some((now + self.wait, value));
        cancelled
    }

    /// Take the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if *deadline <= now => self.pending.take().map(|(_, v)| v),
            _ => None,
        }
    }

    /// Drop the pending value without releasing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, v)| v)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }
}
