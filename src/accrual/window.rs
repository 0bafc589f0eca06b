//! Module `accrual::window`.
//!
//! UTC day-window arithmetic for accrual runs. The batch job processes one
//! completed UTC day at a time; these helpers turn calendar dates into the
//! unix-second bounds the engine consumes.

use chrono::{DateTime, NaiveDate, Utc};

use crate::rates::compounding::SECONDS_PER_DAY;

/// A half-open accrual window `[start, end)` in unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DayWindow {
    /// Window start, unix seconds (inclusive).
    pub start: i64,
    /// Window end, unix seconds (exclusive).
    pub end: i64,
}

impl DayWindow {
    /// Builds the 24-hour window covering `day` from UTC midnight.
    pub fn utc_day(day: NaiveDate) -> Self {
        let start = day.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp();
        Self {
            start,
            end: start + SECONDS_PER_DAY,
        }
    }

    /// Window length in seconds.
    pub fn duration_seconds(&self) -> i64 {
        self.end - self.start
    }
}

/// Returns the most recent completed UTC day as of `now`.
///
/// Default target for a batch run: yesterday's accruals are final, today's
/// are still in flight.
pub fn previous_utc_day(now: DateTime<Utc>) -> NaiveDate {
    now.date_naive().pred_opt().unwrap()
}
