use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Performance report for one pot. Always recomputed, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PotReport {
    pub pot_id: i64,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    #[serde(with = "rust_decimal::serde::float")]
    pub opening_balance: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub current_balance: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub contributions_excl_rebates: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub contributions_incl_rebates: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_flows: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub growth: Decimal,
    /// Balance-ratio growth, annualized. Ignores the timing of cash flows.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub cagr_annual_percent: Option<Decimal>,
    /// Money-weighted return (XIRR) over the transaction schedule.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub irr_annual_percent: Option<Decimal>,
}

impl PotReport {
    /// Report for a pot that exists but has no snapshots yet.
    pub fn empty(pot_id: i64) -> Self {
        Self {
            pot_id,
            from_date: None,
            to_date: None,
            opening_balance: Decimal::ZERO,
            current_balance: Decimal::ZERO,
            contributions_excl_rebates: Decimal::ZERO,
            contributions_incl_rebates: Decimal::ZERO,
            net_flows: Decimal::ZERO,
            growth: Decimal::ZERO,
            cagr_annual_percent: None,
            irr_annual_percent: None,
        }
    }
}
