use std::sync::Arc;

use jiff::{SignedDuration, Timestamp};
use parking_lot::Mutex;

/// Source of the current time for link lifecycle decisions.
///
/// The registry reads its clock exactly once per operation, so creation,
/// expiry, and click timestamps all line up under a substituted clock.
pub trait Clock: Send + Sync + 'static {
    /// Returns the current time of the clock.
    fn now(&self) -> Timestamp;
}

/// Clock backed by the real system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same instant, so a test can hold one handle and
/// advance time while the registry owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Timestamp>>,
}

impl ManualClock {
    pub fn new(now: Timestamp) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// Moves the clock forward (or backward) by the given duration.
    pub fn advance(&self, duration: SignedDuration) {
        let mut now = self.now.lock();
        *now = *now + duration;
    }

    /// Jumps the clock to an absolute instant.
    pub fn set(&self, now: Timestamp) {
        *self.now.lock() = now;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.now.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_does_not_go_backwards() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn manual_clock_moves_only_when_told() {
        let start = Timestamp::now();
        let clock = ManualClock::new(start);

        assert_eq!(clock.now(), start);
        assert_eq!(clock.now(), start);

        clock.advance(SignedDuration::from_secs(61));
        assert_eq!(clock.now(), start + SignedDuration::from_secs(61));
    }

    #[test]
    fn manual_clock_clones_share_the_instant() {
        let start = Timestamp::now();
        let clock = ManualClock::new(start);
        let handle = clock.clone();

        handle.advance(SignedDuration::from_mins(5));
        assert_eq!(clock.now(), start + SignedDuration::from_mins(5));

        handle.set(start);
        assert_eq!(clock.now(), start);
    }
}
