//! Timer and break-response interfaces, plus the daily usage timer.

use std::cell::Cell;
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// Source of the elapsed/limit figures a break window displays.
pub trait TimerSource {
    fn elapsed(&self) -> Duration;
    fn limit(&self) -> Duration;

    fn remaining(&self) -> Duration {
        self.limit().saturating_sub(self.elapsed())
    }

    fn is_over_limit(&self) -> bool {
        self.elapsed() >= self.limit()
    }
}

/// Receives the user's decision about a break.
pub trait BreakResponse {
    fn postpone_break(&self);
    fn skip_break(&self);
}

/// Calendar date of `t` in the local time zone.
pub fn local_date(t: SystemTime) -> NaiveDate {
    date_in(t, &Local)
}

/// Calendar date of `t` in `tz`.
pub fn date_in<Tz: TimeZone>(t: SystemTime, tz: &Tz) -> NaiveDate {
    DateTime::<Utc>::from(t).with_timezone(tz).date_naive()
}

/// Accumulates active time against a daily limit.
#[derive(Debug)]
pub struct DailyUsageTimer {
    elapsed: Cell<Duration>,
    limit: Cell<Duration>,
    base_limit: Duration,
    day: Cell<NaiveDate>,
}

impl DailyUsageTimer {
    pub fn new(limit: Duration, today: NaiveDate) -> Self {
        Self {
            elapsed: Cell::new(Duration::ZERO),
            limit: Cell::new(limit),
            base_limit: limit,
            day: Cell::new(today),
        }
    }

    /// Adds `dt` of active time.
    pub fn advance(&self, dt: Duration) {
        self.elapsed.set(self.elapsed.get().saturating_add(dt));
    }

    /// Raises today's limit by `by`, measured from the current usage when
    /// already over the limit.
    pub fn postpone(&self, by: Duration) {
        let base = self.limit.get().max(self.elapsed.get());
        self.limit.set(base.saturating_add(by));
    }

    /// Starts a fresh day if `today` differs from the tracked date. Returns
    /// true if reset.
    pub fn roll_over(&self, today: NaiveDate) -> bool {
        if today == self.day.get() {
            return false;
        }
        self.day.set(today);
        self.elapsed.set(Duration::ZERO);
        self.limit.set(self.base_limit);
        true
    }
}

impl TimerSource for DailyUsageTimer {
    fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }

    fn limit(&self) -> Duration {
        self.limit.get()
    }
}
