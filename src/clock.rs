//! Wall-clock source for the repository.
//!
//! All timestamps are local wall-clock `NaiveDateTime`s. Streaks are counted
//! in local calendar days, so the repository never needs a time zone.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use std::cell::Cell;
use std::rc::Rc;

/// Source of the current local time.
pub trait Clock {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    /// Current local calendar day.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Manually driven clock for tests and replays.
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<NaiveDateTime>,
}

impl ManualClock {
    /// Create a clock frozen at `now`.
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    /// Move the clock to an absolute time.
    pub fn set(&self, now: NaiveDateTime) {
        self.now.set(now);
    }

    /// Move the clock forward by whole days.
    pub fn advance_days(&self, days: i64) {
        self.now.set(self.now.get() + Duration::days(days));
    }

    /// Move the clock forward by hours.
    pub fn advance_hours(&self, hours: i64) {
        self.now.set(self.now.get() + Duration::hours(hours));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Convert a wall-clock time to the epoch-millisecond form used in preferences.
pub fn to_millis(at: NaiveDateTime) -> i64 {
    at.and_utc().timestamp_millis()
}

/// Inverse of [`to_millis`]. Returns `None` for non-positive or out-of-range values.
pub fn from_millis(millis: i64) -> Option<NaiveDateTime> {
    if millis <= 0 {
        return None;
    }
    chrono::DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
}
