//! Shared helpers for unit tests.

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock frozen at a fixed instant until a test advances it.
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    /// Clock starting at 2024-09-01T08:30:00Z.
    pub fn at_fixture_instant() -> Self {
        Self::new(fixture_instant())
    }

    pub fn advance_seconds(&self, seconds: i64) {
        let mut now = self.lock_clock();
        *now += Duration::seconds(seconds);
    }

    fn lock_clock(&self) -> MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

/// 2024-09-01T08:30:00Z.
pub fn fixture_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 1, 8, 30, 0)
        .single()
        .expect("fixture instant is unambiguous")
}
