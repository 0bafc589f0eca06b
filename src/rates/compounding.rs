//! Module `rates::compounding`.
//!
//! Converts annualized yields into continuous compounding rates and growth
//! factors over integer-second intervals.
//!
//! The upstream lending protocol quotes continuously-compounded APYs over a
//! fixed 365-day year. Both the actual and the capped accrual legs use the
//! same conversion and the same year constant, so the two legs share one
//! time base and their difference isolates the rate gap alone.

use crate::core::AccrualError;

/// Seconds in the fixed 365-day year used for all rate conversions.
pub const SECONDS_PER_YEAR: f64 = 365.0 * 86_400.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Seconds in one hour, the resampling step of [`crate::rates::resample`].
pub const SECONDS_PER_HOUR: i64 = 3_600;

/// Converts an APY (decimal fraction, e.g. `0.12` for 12%) into a
/// per-second continuous compounding rate: `ln(1 + apy) / SECONDS_PER_YEAR`.
///
/// # Errors
/// Returns [`AccrualError::InvalidApy`] when `apy` is non-finite or at or
/// below -100%, which has no continuous-rate representation. Rate points fed
/// through the timeline builder are pre-sanitized, but the conversion
/// enforces the invariant regardless.
pub fn apy_to_continuous_rate(apy: f64) -> Result<f64, AccrualError> {
    if !apy.is_finite() || apy <= -1.0 {
        return Err(AccrualError::InvalidApy(apy));
    }
    Ok((1.0 + apy).ln() / SECONDS_PER_YEAR)
}

/// Growth factor `exp(rate * delta_seconds)` over an interval.
///
/// Non-positive durations return `1.0` (no growth), so zero-length
/// sub-intervals are exact no-ops.
pub fn growth_from_rate(rate: f64, delta_seconds: i64) -> f64 {
    if delta_seconds <= 0 {
        return 1.0;
    }
    (rate * delta_seconds as f64).exp()
}

/// Growth factor over an interval directly from an APY.
///
/// # Errors
/// Returns [`AccrualError::InvalidApy`] under the same conditions as
/// [`apy_to_continuous_rate`].
pub fn apy_to_growth(apy: f64, delta_seconds: i64) -> Result<f64, AccrualError> {
    Ok(growth_from_rate(apy_to_continuous_rate(apy)?, delta_seconds))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn one_year_growth_recovers_the_apy() {
        let apy = 0.12;
        let rate = apy_to_continuous_rate(apy).unwrap();
        let growth = growth_from_rate(rate, SECONDS_PER_YEAR as i64);
        assert_relative_eq!(growth, 1.0 + apy, epsilon = 1.0e-12);
    }

    #[test]
    fn zero_apy_accrues_nothing() {
        let rate = apy_to_continuous_rate(0.0).unwrap();
        assert_eq!(rate, 0.0);
        assert_eq!(growth_from_rate(rate, 86_400), 1.0);
    }

    #[test]
    fn non_positive_durations_are_no_ops() {
        let rate = apy_to_continuous_rate(0.25).unwrap();
        assert_eq!(growth_from_rate(rate, 0), 1.0);
        assert_eq!(growth_from_rate(rate, -5), 1.0);
    }

    #[test]
    fn negative_apy_above_floor_is_accepted() {
        let rate = apy_to_continuous_rate(-0.5).unwrap();
        assert!(rate < 0.0);
        assert!(growth_from_rate(rate, 86_400) < 1.0);
    }

    #[test]
    fn invalid_apys_are_rejected() {
        assert_eq!(
            apy_to_continuous_rate(-1.0),
            Err(AccrualError::InvalidApy(-1.0))
        );
        assert_eq!(
            apy_to_continuous_rate(-2.0),
            Err(AccrualError::InvalidApy(-2.0))
        );
        assert!(apy_to_continuous_rate(f64::NAN).is_err());
        assert!(apy_to_continuous_rate(f64::INFINITY).is_err());
    }

    #[test]
    fn apy_to_growth_composes_conversion_and_growth() {
        let direct = apy_to_growth(0.2, 43_200).unwrap();
        let rate = apy_to_continuous_rate(0.2).unwrap();
        assert_eq!(direct, growth_from_rate(rate, 43_200));
    }
}
