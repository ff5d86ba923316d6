use chrono::{Local, NaiveTime, Timelike};

/// Source of wall-clock time for history timestamps.
///
/// Abstracted so tests can pin the time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveTime;
}

/// Local wall-clock time at second resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        let now = Local::now().time();
        now.with_nanosecond(0).unwrap_or(now)
    }
}

/// A clock that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}
