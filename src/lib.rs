//! Ratecap computes daily interest reimbursements for borrowers in
//! rate-capped lending markets.
//!
//! Given a borrower's principal, a time-varying market APY, a configured
//! cap rate, and the borrow/repay events of a 24-hour window, the engine
//! accrues continuously-compounded interest piecewise over the window and
//! reports the difference between what the market rate charged and what the
//! cap would have charged. Breakpoints are the union of rate changes and
//! event timestamps; events apply atomically at breakpoints and interest
//! compounds between them.
//!
//! Numerical conventions:
//! - All rates are continuous-compounding: `rate = ln(1 + APY) / seconds
//!   per 365-day year`, growth `exp(rate * seconds)`. Both the actual and
//!   capped legs share this time base.
//! - The capped leg is evaluated against the actual principal trajectory;
//!   it is a rate ceiling, not a separately compounding balance.
//! - Noisy upstream data (non-finite samples, out-of-window events,
//!   negative principal) is sanitized or clamped, never fatal; only an
//!   inverted window or an APY at or below -100% aborts a computation.
//!
//! The crate is a pure computation library: no I/O, no shared state, safe
//! to invoke concurrently across borrowers and markets.
//!
//! # Quick Start
//! Accrue one borrower-day at a flat 20% APY against a 10% cap:
//! ```rust
//! use ratecap::prelude::*;
//!
//! let start = 1_700_000_000;
//! let end = start + 86_400;
//! let result = calculate_daily_reimbursement(
//!     start,
//!     end,
//!     1_000.0,
//!     0.10,
//!     &[RatePoint { timestamp: start, apy: 0.20 }],
//!     &[],
//! )
//! .unwrap();
//! assert!(result.reimbursement > 0.0);
//! ```
//!
//! Apply a mid-day repayment:
//! ```rust
//! use ratecap::prelude::*;
//!
//! let start = 1_700_000_000;
//! let end = start + 86_400;
//! let result = calculate_daily_reimbursement(
//!     start,
//!     end,
//!     1_000.0,
//!     0.10,
//!     &[RatePoint { timestamp: start, apy: 0.15 }],
//!     &[PrincipalEvent::new(start + 43_200, -400.0)],
//! )
//! .unwrap();
//! assert_eq!(result.events_applied.len(), 1);
//! assert!(result.ending_principal < 700.0);
//! ```
//!
//! Resolve the effective cap table for the orchestration layer:
//! ```rust
//! use std::collections::BTreeMap;
//! use ratecap::config::resolve_market_caps;
//!
//! let caps = resolve_market_caps(&BTreeMap::new());
//! assert!(caps.values().all(|cap| cap.cap_apr > 0.0));
//! ```

pub mod accrual;
pub mod config;
pub mod core;
pub mod ledger;
pub mod metrics;
pub mod rates;

/// Common imports for ergonomic usage.
pub mod prelude {
    pub use crate::accrual::{
        calculate_daily_reimbursement, previous_utc_day, DailyAccrualResult, DayWindow,
        SegmentDetail,
    };
    pub use crate::config::{resolve_market_caps, MarketCapConfig, MarketCapOverride};
    pub use crate::core::{AccrualError, AccrualAuditRecord};
    pub use crate::ledger::{normalize_events, EventKind, PrincipalEvent};
    pub use crate::metrics::{
        summarize_daily_accruals, BorrowerDailyAccrual, MarketReimbursementBreakdown,
        ReimbursementSummary,
    };
    pub use crate::rates::{
        apy_to_continuous_rate, apy_to_growth, build_hourly_rate_points, build_rate_segments,
        growth_from_rate, RatePoint, RateSegment, SECONDS_PER_DAY, SECONDS_PER_HOUR,
        SECONDS_PER_YEAR,
    };
}
