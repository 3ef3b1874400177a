use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::services::{rate_to_percent, DAYS_PER_YEAR};

/// Compound annual growth rate between two balances, as a rounded percent.
///
/// Returns None when it cannot be computed:
/// - either balance is zero or negative
/// - either date is missing
/// - `to` is not strictly after `from`
pub fn cagr_percent(
    opening: Decimal,
    current: Decimal,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Option<Decimal> {
    let (from, to) = (from?, to?);
    if opening <= Decimal::ZERO || current <= Decimal::ZERO || to <= from {
        return None;
    }

    let years = (to - from).num_days() as f64 / DAYS_PER_YEAR;

    let ratio = current.to_f64()? / opening.to_f64()?;
    rate_to_percent(ratio.powf(1.0 / years) - 1.0)
}
