//! Module `accrual::engine`.
//!
//! Computes, for one borrower over one day window, the interest that
//! actually accrued, the interest a capped rate would have accrued, and the
//! reimbursement owed as the positive difference.
//!
//! The window is partitioned at the union of rate-change timestamps and
//! principal-event timestamps. Each atomic sub-interval has a constant rate
//! and no interior event; events apply instantaneously at sub-interval
//! boundaries, and interest compounds continuously within them.
//!
//! The capped leg is a what-if series evaluated against the *actual*
//! principal trajectory: capped interest over each sub-interval is
//! `principal_before * (cap_growth - 1)`, and only actual-rate growth is
//! carried into subsequent principal. The cap models a rate ceiling, not an
//! independently compounding shadow balance.
//!
//! A window with no usable rate samples accrues nothing on either leg:
//! events still apply and the single zero-APY segment is still reported,
//! but without an observed rate there is no basis to charge the capped
//! what-if leg either.

use crate::core::AccrualError;
use crate::ledger::{normalize_events, PrincipalEvent};
use crate::rates::compounding::{apy_to_continuous_rate, apy_to_growth};
use crate::rates::timeline::{build_rate_segments, RatePoint};

/// An atomic accrual record: a maximal sub-interval with a constant rate
/// and no interior principal event.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SegmentDetail {
    /// Sub-interval start, unix seconds (inclusive).
    pub start: i64,
    /// Sub-interval end, unix seconds (exclusive).
    pub end: i64,
    /// Market APY in force.
    pub apy: f64,
    /// Cap APR the what-if leg was evaluated at.
    pub cap_apr: f64,
    /// Sub-interval duration in seconds.
    pub delta_seconds: i64,
    /// Principal entering the sub-interval.
    pub principal_before: f64,
    /// Principal leaving the sub-interval; equals
    /// `principal_before + interest_accrued`.
    pub principal_after: f64,
    /// Interest accrued at the market rate.
    pub interest_accrued: f64,
    /// Interest the cap rate would have accrued on `principal_before`.
    pub capped_interest_accrued: f64,
}

/// Full engine output for one borrower-day.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DailyAccrualResult {
    /// Principal at the end of the window, after all growth and events.
    pub ending_principal: f64,
    /// Total interest accrued at the market rate.
    pub actual_interest: f64,
    /// Total interest the cap rate would have accrued.
    pub capped_interest: f64,
    /// `max(0, actual_interest - capped_interest)`.
    pub reimbursement: f64,
    /// Ordered atomic accrual records covering the window.
    pub segments: Vec<SegmentDetail>,
    /// Events applied, in application order.
    pub events_applied: Vec<PrincipalEvent>,
}

/// Computes a borrower's daily accrual and reimbursement.
///
/// Parameters:
/// - `window_start`, `window_end`: day bounds, unix seconds; accrual covers
///   `[window_start, window_end)` and events on either bound apply.
/// - `starting_principal`: USD principal entering the window; negative
///   inputs are clamped to zero rather than rejected.
/// - `cap_apr`: the configured rate ceiling as a decimal fraction.
/// - `rate_points`: sparse market APY samples; unsorted and noisy inputs
///   are sanitized, and an empty curve accrues nothing on either leg.
/// - `events`: borrow/repay deltas; only those inside the window apply,
///   in ascending-timestamp order with input order breaking ties.
///
/// Principal is clamped at zero after every event application, so a
/// repayment larger than the outstanding balance zeroes the balance instead
/// of going negative.
///
/// # Errors
/// - [`AccrualError::InvalidWindow`] when `window_end <= window_start`.
/// - [`AccrualError::InvalidApy`] when a surviving rate sample or the cap
///   itself has no continuous-rate representation (at or below -100%).
pub fn calculate_daily_reimbursement(
    window_start: i64,
    window_end: i64,
    starting_principal: f64,
    cap_apr: f64,
    rate_points: &[RatePoint],
    events: &[PrincipalEvent],
) -> Result<DailyAccrualResult, AccrualError> {
    if window_end <= window_start {
        return Err(AccrualError::InvalidWindow {
            start: window_start,
            end: window_end,
        });
    }

    // The cap must be representable even when no rate data survives and the
    // no-data branch never converts it.
    apy_to_continuous_rate(cap_apr)?;

    let has_rate_data = rate_points.iter().any(|point| point.apy.is_finite());
    let segments = build_rate_segments(rate_points, window_start, window_end);
    let events = normalize_events(events, window_start, window_end);

    let mut principal = starting_principal.max(0.0);
    let mut actual_interest = 0.0;
    let mut capped_interest = 0.0;
    let mut event_index = 0;

    let mut details: Vec<SegmentDetail> = Vec::new();
    let mut events_applied: Vec<PrincipalEvent> = Vec::new();

    // Events at the exact window start apply before any accrual.
    while event_index < events.len() && events[event_index].timestamp == window_start {
        principal = (principal + events[event_index].delta).max(0.0);
        events_applied.push(events[event_index].clone());
        event_index += 1;
    }

    for segment in &segments {
        let mut cursor = segment.start;

        while cursor < segment.end {
            while event_index < events.len() && events[event_index].timestamp == cursor {
                principal = (principal + events[event_index].delta).max(0.0);
                events_applied.push(events[event_index].clone());
                event_index += 1;
            }

            let boundary = match events.get(event_index) {
                Some(next) if next.timestamp > cursor && next.timestamp < segment.end => {
                    next.timestamp
                }
                _ => segment.end,
            };

            let delta_seconds = boundary.min(segment.end) - cursor;
            if delta_seconds > 0 {
                let (growth, cap_growth) = if has_rate_data {
                    (
                        apy_to_growth(segment.apy, delta_seconds)?,
                        apy_to_growth(cap_apr, delta_seconds)?,
                    )
                } else {
                    (1.0, 1.0)
                };

                let principal_after = principal * growth;
                let interest = principal_after - principal;
                let capped = principal * (cap_growth - 1.0);

                details.push(SegmentDetail {
                    start: cursor,
                    end: boundary,
                    apy: segment.apy,
                    cap_apr,
                    delta_seconds,
                    principal_before: principal,
                    principal_after,
                    interest_accrued: interest,
                    capped_interest_accrued: capped,
                });

                principal = principal_after;
                actual_interest += interest;
                capped_interest += capped;
            }

            cursor = boundary;
        }
    }

    // Events at the exact window end apply after the last segment.
    while event_index < events.len() && events[event_index].timestamp == window_end {
        principal = (principal + events[event_index].delta).max(0.0);
        events_applied.push(events[event_index].clone());
        event_index += 1;
    }

    let reimbursement = (actual_interest - capped_interest).max(0.0);

    Ok(DailyAccrualResult {
        ending_principal: principal,
        actual_interest,
        capped_interest,
        reimbursement,
        segments: details,
        events_applied,
    })
}
