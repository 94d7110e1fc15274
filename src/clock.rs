//! Source of the current local time of the business.
use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;

/// The business is located in Germany unless configured otherwise.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Berlin;

pub trait Clock {
    /// Current wall clock time in the timezone of the business.
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    timezone: Tz,
}

impl SystemClock {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEZONE)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.timezone).naive_local()
    }
}

/// Always reports the same time, used for `--now` and in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Picks a fixed clock if a time was given explicitly, otherwise the
/// system clock in the given or default timezone.
pub fn clock(now: Option<NaiveDateTime>, timezone: Option<Tz>) -> Box<dyn Clock> {
    match now {
        Some(now) => Box::new(FixedClock(now)),
        None => Box::new(SystemClock::new(timezone.unwrap_or(DEFAULT_TIMEZONE))),
    }
}
