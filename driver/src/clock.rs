use std::sync::{PoisonError, RwLock};

use time::{Duration, OffsetDateTime};

use kernel::interface::clock::Clock;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock(RwLock<OffsetDateTime>);

impl ManualClock {
    pub fn new(now: OffsetDateTime) -> Self {
        Self(RwLock::new(now))
    }

    pub fn set(&self, now: OffsetDateTime) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.0.write().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> OffsetDateTime {
        *self.0.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod test {
    use time::macros::datetime;
    use time::Duration;

    use kernel::interface::clock::Clock;

    use crate::clock::ManualClock;

    #[test]
    fn manual_clock_moves_only_when_told() {
        let clock = ManualClock::new(datetime!(2024-01-01 00:00 UTC));
        assert_eq!(clock.now(), clock.now());
        clock.advance(Duration::hours(26));
        assert_eq!(clock.now(), datetime!(2024-01-02 02:00 UTC));
        clock.set(datetime!(2023-12-31 00:00 UTC));
        assert_eq!(clock.now(), datetime!(2023-12-31 00:00 UTC));
    }
}
