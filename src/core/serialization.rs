//! Stable serde payloads for persisting accrual output.
//!
//! The engine's segment details and totals are stored verbatim for audit;
//! these helpers provide the canonical JSON and MessagePack encodings of
//! that record.
//!
//! # Examples
//! ```rust
//! use chrono::NaiveDate;
//! use ratecap::core::{from_json, to_json_pretty, AccrualAuditRecord};
//! use ratecap::prelude::*;
//!
//! let day = NaiveDate::from_ymd_opt(2023, 11, 14).unwrap();
//! let window = DayWindow::utc_day(day);
//! let result = calculate_daily_reimbursement(
//!     window.start,
//!     window.end,
//!     1_000.0,
//!     0.10,
//!     &[RatePoint { timestamp: window.start, apy: 0.20 }],
//!     &[],
//! )
//! .unwrap();
//!
//! let record = AccrualAuditRecord {
//!     market_key: "0x1947...1794".to_string(),
//!     borrower_address: "0xabc".to_string(),
//!     day,
//!     result,
//! };
//!
//! let json = to_json_pretty(&record).expect("json serialization");
//! let decoded: AccrualAuditRecord = from_json(&json).expect("json deserialization");
//! assert_eq!(decoded, record);
//! ```

use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use crate::accrual::DailyAccrualResult;

/// One borrower-day accrual outcome, persisted verbatim by the caller.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AccrualAuditRecord {
    /// Market unique key from the upstream protocol.
    pub market_key: String,
    /// Borrower account address.
    pub borrower_address: String,
    /// UTC day the accrual covers.
    pub day: NaiveDate,
    /// Full engine output, including the ordered segment details.
    pub result: DailyAccrualResult,
}

/// Serializes a payload to pretty-printed JSON.
pub fn to_json_pretty<T: serde::Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Deserializes a payload from JSON.
pub fn from_json<T: DeserializeOwned>(payload: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(payload)
}

/// Serializes a payload to MessagePack bytes.
pub fn to_msgpack<T: serde::Serialize>(value: &T) -> Result<Vec<u8>, rmp_serde::encode::Error> {
    rmp_serde::to_vec_named(value)
}

/// Deserializes a payload from MessagePack bytes.
pub fn from_msgpack<T: DeserializeOwned>(payload: &[u8]) -> Result<T, rmp_serde::decode::Error> {
    rmp_serde::from_slice(payload)
}
