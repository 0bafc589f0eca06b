//! Borrow-rate primitives: continuous compounding, step-function timelines,
//! and hourly resampling.

pub mod compounding;
pub mod resample;
pub mod timeline;

pub use compounding::{
    apy_to_continuous_rate, apy_to_growth, growth_from_rate, SECONDS_PER_DAY, SECONDS_PER_HOUR,
    SECONDS_PER_YEAR,
};
pub use resample::build_hourly_rate_points;
pub use timeline::{build_rate_segments, sanitize_rate_points, RatePoint, RateSegment};
