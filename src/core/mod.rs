//! Library-wide error types and audit serialization payloads.

pub mod serialization;

pub use serialization::{from_json, from_msgpack, to_json_pretty, to_msgpack, AccrualAuditRecord};

/// Fatal conditions surfaced by the accrual engine.
///
/// Everything else — non-finite rate points, out-of-window events, negative
/// starting principal — is sanitized or clamped locally so that one noisy
/// upstream feed cannot abort a batch run. Callers audit the returned
/// segment details and applied events to detect such anomalies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccrualError {
    /// The accrual window is empty or inverted (`end <= start`).
    InvalidWindow {
        /// Requested window start, unix seconds.
        start: i64,
        /// Requested window end, unix seconds.
        end: i64,
    },
    /// An APY is non-finite or at/below -100% and has no continuous-rate
    /// representation.
    InvalidApy(f64),
}

impl std::fmt::Display for AccrualError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidWindow { start, end } => {
                write!(
                    f,
                    "invalid window: end ({end}) must be greater than start ({start})"
                )
            }
            Self::InvalidApy(apy) => {
                write!(f, "invalid apy: {apy} must be finite and greater than -100%")
            }
        }
    }
}

impl std::error::Error for AccrualError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_offending_values() {
        let w = AccrualError::InvalidWindow {
            start: 100,
            end: 100,
        };
        assert!(w.to_string().contains("100"));

        let a = AccrualError::InvalidApy(-1.5);
        assert!(a.to_string().contains("-1.5"));
    }
}
