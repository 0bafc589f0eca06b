//! Daily reimbursement accrual: the core engine and its window helpers.

pub mod engine;
pub mod window;

pub use engine::{calculate_daily_reimbursement, DailyAccrualResult, SegmentDetail};
pub use window::{previous_utc_day, DayWindow};
