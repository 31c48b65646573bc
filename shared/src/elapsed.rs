//! Elapsed-time calculation
//!
//! Breaks the whole seconds between a birth instant and "now" into
//! days, hours, minutes and seconds. Every division floors; nothing rounds.
//! When "now" precedes the birth instant the result is clamped to zero.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::birth_date::BirthDate;

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Time lived since the birth date, recomputed on every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElapsedTime {
    pub days: u64,
    /// 0-23
    pub hours: u32,
    /// 0-59
    pub minutes: u32,
    /// 0-59
    pub seconds: u32,
}

impl ElapsedTime {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn from_total_seconds(total: u64) -> Self {
        Self {
            days: total / SECONDS_PER_DAY,
            hours: ((total % SECONDS_PER_DAY) / SECONDS_PER_HOUR) as u32,
            minutes: ((total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u32,
            seconds: (total % SECONDS_PER_MINUTE) as u32,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + u64::from(self.hours) * SECONDS_PER_HOUR
            + u64::from(self.minutes) * SECONDS_PER_MINUTE
            + u64::from(self.seconds)
    }
}

/// Elapsed time between two instants, zero if `now` is before `birth`
pub fn elapsed_between(birth: DateTime<Utc>, now: DateTime<Utc>) -> ElapsedTime {
    let millis = now.signed_duration_since(birth).num_milliseconds();
    let total_seconds = millis.div_euclid(1000);
    if total_seconds <= 0 {
        return ElapsedTime::ZERO;
    }
    ElapsedTime::from_total_seconds(total_seconds as u64)
}

/// Elapsed time since a birth date, absent when there is no date
pub fn elapsed_since(birth_date: Option<&BirthDate>, now: DateTime<Utc>) -> Option<ElapsedTime> {
    birth_date.map(|date| elapsed_between(date.start_instant(), now))
}

/// Elapsed time since a raw date string; empty or unparseable input yields nothing
pub fn calculate(raw: &str, now: DateTime<Utc>) -> Option<ElapsedTime> {
    let date = BirthDate::parse(raw).ok()?;
    elapsed_since(Some(&date), now)
}
