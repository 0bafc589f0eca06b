//! Module `rates::resample`.
//!
//! Materializes a coarse, storable rate curve from sparse upstream samples
//! by stepping through a window at fixed hourly intervals.
//!
//! Resampling shares the sanitization contract of [`crate::rates::timeline`]
//! but is purely diagnostic: the accrual engine operates on exact
//! breakpoints and is unaffected by this coarsening.

use super::compounding::SECONDS_PER_HOUR;
use super::timeline::{sanitize_rate_points, RatePoint};

/// Emits one rate point per hour across `[start, end)`, each holding the
/// step-function value in force at that hour's start.
///
/// The seed value is the earliest sample at or after `start`, falling back
/// to the latest sample overall when every sample precedes the window; the
/// cursor then advances through samples as the hourly walk passes them.
/// Returns an empty vector when no usable samples exist.
pub fn build_hourly_rate_points(points: &[RatePoint], start: i64, end: i64) -> Vec<RatePoint> {
    let sanitized = sanitize_rate_points(points);
    if sanitized.is_empty() {
        return Vec::new();
    }

    let mut index = sanitized
        .iter()
        .position(|point| point.timestamp >= start)
        .unwrap_or(sanitized.len() - 1);
    let mut current_apy = sanitized[index].apy;

    let mut hourly = Vec::new();
    let mut cursor = start;
    while cursor < end {
        while index < sanitized.len() && sanitized[index].timestamp <= cursor {
            current_apy = sanitized[index].apy;
            index += 1;
        }

        hourly.push(RatePoint {
            timestamp: cursor,
            apy: current_apy,
        });
        cursor += SECONDS_PER_HOUR;
    }

    hourly
}
