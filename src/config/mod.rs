//! Per-market rate-cap configuration.
//!
//! The orchestration layer decides which markets to process; this module
//! only resolves the cap table it consults. Resolution is an explicit value
//! computation — a built-in default table merged under caller-supplied
//! overrides — with no mutable globals and no storage access.

use std::collections::BTreeMap;

/// Basis points in one whole unit.
const BPS_PER_UNIT: f64 = 10_000.0;

/// Resolved cap configuration for one market.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MarketCapConfig {
    /// Chain the market lives on.
    pub chain_id: u64,
    /// Cap APR as a decimal fraction, passed unchanged into the engine.
    pub cap_apr: f64,
    /// Human-readable `collateral/loan` label.
    pub label: String,
}

/// A stored per-market override, as the operator configuration supplies it.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MarketCapOverride {
    /// Chain the market lives on.
    pub chain_id: u64,
    /// Cap in basis points; `120` means 1.2% APR.
    pub apr_cap_bps: u32,
    /// Collateral asset symbol, for the display label.
    pub collateral_symbol: String,
    /// Loan asset symbol, for the display label.
    pub loan_symbol: String,
    /// Whether the market is enabled for processing.
    pub tracked: bool,
}

/// Converts a basis-point cap into a decimal fraction.
pub fn cap_apr_from_bps(bps: u32) -> f64 {
    bps as f64 / BPS_PER_UNIT
}

/// The built-in cap table for the initially tracked Polygon markets.
pub fn default_market_caps() -> BTreeMap<String, MarketCapConfig> {
    let defaults = [
        (
            "0x1947267c49c3629c5ed59c88c411e8cf28c4d2afdb5da046dc8e3846a4761794",
            137,
            0.011,
            "MaticX/USDC",
        ),
        (
            "0x1cfe584af3db05c7f39d60e458a87a8b2f6b5d8c6125631984ec489f1d13553b",
            137,
            0.012,
            "WBTC/USDC",
        ),
        (
            "0xb8ae474af3b91c8143303723618b31683b52e9c86566aa54c06f0bc27906bcae",
            137,
            0.012,
            "wstETH/WETH",
        ),
    ];

    defaults
        .into_iter()
        .map(|(key, chain_id, cap_apr, label)| {
            (
                key.to_string(),
                MarketCapConfig {
                    chain_id,
                    cap_apr,
                    label: label.to_string(),
                },
            )
        })
        .collect()
}

/// Resolves the effective cap table: defaults merged under overrides.
///
/// A tracked override with a positive cap replaces (or adds) its market's
/// entry; an untracked or zero-cap override removes the market entirely,
/// including any default for it. Markets without overrides keep their
/// default entries.
pub fn resolve_market_caps(
    overrides: &BTreeMap<String, MarketCapOverride>,
) -> BTreeMap<String, MarketCapConfig> {
    let mut resolved = default_market_caps();

    for (key, entry) in overrides {
        if entry.tracked && entry.apr_cap_bps > 0 {
            resolved.insert(
                key.clone(),
                MarketCapConfig {
                    chain_id: entry.chain_id,
                    cap_apr: cap_apr_from_bps(entry.apr_cap_bps),
                    label: format!("{}/{}", entry.collateral_symbol, entry.loan_symbol),
                },
            );
        } else {
            resolved.remove(key);
        }
    }

    resolved
}
