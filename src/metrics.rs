//! Cross-borrower reimbursement rollups.
//!
//! Aggregates persisted borrower-day accrual records into per-market
//! breakdowns and a day-level summary. Pure in-memory aggregation; loading
//! the records is the caller's concern.

use std::collections::BTreeMap;

use chrono::NaiveDate;

/// One borrower's persisted accrual totals for a day, as read back from
/// storage.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BorrowerDailyAccrual {
    /// Market unique key.
    pub market_key: String,
    /// Borrower account address.
    pub borrower_address: String,
    /// Interest accrued at the market rate, USD.
    pub actual_interest_usd: f64,
    /// Interest the cap rate would have accrued, USD.
    pub capped_interest_usd: f64,
    /// Reimbursement owed, USD.
    pub reimbursement_usd: f64,
}

/// Aggregated reimbursement figures for one market.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MarketReimbursementBreakdown {
    /// Market unique key.
    pub market_key: String,
    /// Sum of reimbursements across borrowers, USD.
    pub reimbursement_usd: f64,
    /// Sum of actual interest across borrowers, USD.
    pub actual_interest_usd: f64,
    /// Sum of capped interest across borrowers, USD.
    pub capped_interest_usd: f64,
    /// Number of borrower records.
    pub borrower_count: usize,
    /// Number of borrowers with a positive reimbursement.
    pub borrowers_above_cap: usize,
}

/// Day-level reimbursement summary across all markets.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReimbursementSummary {
    /// The day covered, or `None` when no records exist.
    pub day: Option<NaiveDate>,
    /// Total actual interest, USD.
    pub total_actual_usd: f64,
    /// Total capped interest, USD.
    pub total_capped_usd: f64,
    /// Total reimbursement, USD.
    pub total_reimbursement_usd: f64,
    /// Total borrower records.
    pub borrower_count: usize,
    /// Borrowers with a positive reimbursement.
    pub borrowers_above_cap: usize,
    /// Per-market breakdowns, ordered by market key.
    pub markets: Vec<MarketReimbursementBreakdown>,
}

impl ReimbursementSummary {
    fn empty() -> Self {
        Self {
            day: None,
            total_actual_usd: 0.0,
            total_capped_usd: 0.0,
            total_reimbursement_usd: 0.0,
            borrower_count: 0,
            borrowers_above_cap: 0,
            markets: Vec::new(),
        }
    }
}

/// Rolls one day's borrower accrual records up into per-market breakdowns
/// and grand totals.
///
/// Markets are grouped and emitted in key order, so the summary is
/// deterministic regardless of record order. Empty input yields an empty
/// summary with `day: None`.
pub fn summarize_daily_accruals(
    day: NaiveDate,
    records: &[BorrowerDailyAccrual],
) -> ReimbursementSummary {
    if records.is_empty() {
        return ReimbursementSummary::empty();
    }

    let mut by_market: BTreeMap<&str, MarketReimbursementBreakdown> = BTreeMap::new();
    for record in records {
        let entry = by_market
            .entry(record.market_key.as_str())
            .or_insert_with(|| MarketReimbursementBreakdown {
                market_key: record.market_key.clone(),
                reimbursement_usd: 0.0,
                actual_interest_usd: 0.0,
                capped_interest_usd: 0.0,
                borrower_count: 0,
                borrowers_above_cap: 0,
            });

        entry.reimbursement_usd += record.reimbursement_usd;
        entry.actual_interest_usd += record.actual_interest_usd;
        entry.capped_interest_usd += record.capped_interest_usd;
        entry.borrower_count += 1;
        if record.reimbursement_usd > 0.0 {
            entry.borrowers_above_cap += 1;
        }
    }

    let markets: Vec<MarketReimbursementBreakdown> = by_market.into_values().collect();

    let mut summary = ReimbursementSummary {
        day: Some(day),
        markets: Vec::new(),
        ..ReimbursementSummary::empty()
    };
    for market in &markets {
        summary.total_actual_usd += market.actual_interest_usd;
        summary.total_capped_usd += market.capped_interest_usd;
        summary.total_reimbursement_usd += market.reimbursement_usd;
        summary.borrower_count += market.borrower_count;
        summary.borrowers_above_cap += market.borrowers_above_cap;
    }
    summary.markets = markets;

    summary
}
