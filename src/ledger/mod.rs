//! Discrete principal-changing events: borrows and repayments.
//!
//! Events arrive from the transaction feed already converted to signed USD
//! deltas (positive = borrow, negative = repay). This module normalizes a
//! raw batch into the strict ascending-timestamp order the accrual engine
//! applies them in.

/// Transaction type tag carried through from the upstream feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Principal increase.
    Borrow,
    /// Principal decrease.
    Repay,
}

/// An instantaneous change to a borrower's principal.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PrincipalEvent {
    /// Event time, unix seconds.
    pub timestamp: i64,
    /// Signed USD change to principal; positive borrows, negative repays.
    pub delta: f64,
    /// Originating transaction hash, when the feed supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// Transaction type tag, when the feed supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<EventKind>,
}

impl PrincipalEvent {
    /// Builds a bare event with no feed metadata.
    pub fn new(timestamp: i64, delta: f64) -> Self {
        Self {
            timestamp,
            delta,
            hash: None,
            kind: None,
        }
    }
}

/// Normalizes a raw event batch against an inclusive window `[start, end]`.
///
/// Events with non-finite deltas or timestamps outside the window are
/// dropped silently; the remainder is sorted ascending by timestamp with a
/// stable sort, so events sharing a timestamp keep their input order. That
/// tie-break is inherited upstream behavior, preserved deliberately rather
/// than re-derived from type or hash.
///
/// Both window bounds are inclusive: an event at exactly `start` applies
/// before any accrual, one at exactly `end` applies after the last segment.
pub fn normalize_events(events: &[PrincipalEvent], start: i64, end: i64) -> Vec<PrincipalEvent> {
    let mut normalized: Vec<PrincipalEvent> = events
        .iter()
        .filter(|event| event.delta.is_finite() && event.timestamp >= start && event.timestamp <= end)
        .cloned()
        .collect();
    normalized.sort_by_key(|event| event.timestamp);
    normalized
}
