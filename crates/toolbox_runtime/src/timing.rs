//! Input rate limiting driven by explicit millisecond timestamps.
//!
//! The runtime owns no timers. The host loop passes the current time into `call`/`poll`, which
//! keeps both utilities deterministic under test.

/// Collapses a burst of calls into the last one, released after a quiet window.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window_ms: u64,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    due_at_ms: u64,
}

impl<T> Debouncer<T> {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            pending: None,
        }
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Replaces any pending value and restarts the quiet window at `now_ms`.
    pub fn call(&mut self, value: T, now_ms: u64) {
        self.pending = Some(Pending {
            value,
            due_at_ms: now_ms.saturating_add(self.window_ms),
        });
    }

    /// Releases the pending value once its window has elapsed. Each value is released once.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match &self.pending {
            Some(pending) if now_ms >= pending.due_at_ms => {
                self.pending.take().map(|pending| pending.value)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending value, for hosts that schedule a wake-up.
    pub fn due_at_ms(&self) -> Option<u64> {
        self.pending.as_ref().map(|pending| pending.due_at_ms)
    }
}

/// Admits the first call, then drops calls until `limit_ms` has passed.
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    limit_ms: u64,
    open_at_ms: Option<u64>,
}

impl Throttle {
    pub fn new(limit_ms: u64) -> Self {
        Self {
            limit_ms,
            open_at_ms: None,
        }
    }

    /// Returns whether a call at `now_ms` may run.
    pub fn admit(&mut self, now_ms: u64) -> bool {
        if self.open_at_ms.is_some_and(|open_at| now_ms < open_at) {
            return false;
        }
        self.open_at_ms = Some(now_ms.saturating_add(self.limit_ms));
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn burst_collapses_to_last_value_released_once() {
        let mut debouncer = Debouncer::new(300);
        debouncer.call("c", 0);
        debouncer.call("ca", 100);
        debouncer.call("cal", 150);

        for now in [150, 300, 449] {
            assert_eq!(debouncer.poll(now), None, "released early at {now}ms");
        }
        assert_eq!(debouncer.due_at_ms(), Some(450));
        assert_eq!(debouncer.poll(450), Some("cal"));
        assert_eq!(debouncer.poll(451), None);
        assert_eq!(debouncer.poll(10_000), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn late_poll_still_releases_pending_value() {
        let mut debouncer = Debouncer::new(300);
        debouncer.call(7, 1_000);
        assert_eq!(debouncer.poll(5_000), Some(7));
    }

    #[test]
    fn zero_window_releases_on_the_same_tick() {
        let mut debouncer = Debouncer::new(0);
        debouncer.call("now", 42);
        assert_eq!(debouncer.poll(42), Some("now"));
    }

    #[test]
    fn throttle_admits_first_call_per_period() {
        let mut throttle = Throttle::new(100);
        assert!(throttle.admit(0));
        assert!(!throttle.admit(50));
        assert!(!throttle.admit(99));
        assert!(throttle.admit(100));
        assert!(!throttle.admit(150));
        assert!(throttle.admit(400));
    }
}
