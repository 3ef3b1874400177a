//! Per-pot performance report.
//!
//! The report is a pure function of a pot's date-ordered snapshots and
//! transactions. Data comes in through [`PotDataSource`] so the engine has
//! no storage dependency and can be driven from in-memory fixtures.

use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::{PotReport, Snapshot, Transaction};
use crate::services::cagr::cagr_percent;
use crate::services::flows::aggregate;
use crate::services::xirr::{investor_cash_flows, solve_xirr, XirrConfig};
use crate::services::{rate_to_percent, round_money};

/// Read-only access to the records a report is built from.
///
/// Both listings must come back sorted by date, oldest first. The report
/// builder does not re-sort.
pub trait PotDataSource {
    fn pot_exists(&self, pot_id: i64) -> AppResult<bool>;
    fn snapshots_by_date(&self, pot_id: i64) -> AppResult<Vec<Snapshot>>;
    fn transactions_by_date(&self, pot_id: i64) -> AppResult<Vec<Transaction>>;
}

/// Build the report for `pot_id`.
///
/// Fails with [`AppError::NotFound`] if the pot does not exist; nothing else
/// is fetched or computed in that case. A pot without snapshots gets an
/// all-zero report with no dates.
pub fn build_report<S: PotDataSource + ?Sized>(source: &S, pot_id: i64) -> AppResult<PotReport> {
    if !source.pot_exists(pot_id)? {
        return Err(AppError::NotFound(format!("Pot {} not found", pot_id)));
    }

    let snapshots = source.snapshots_by_date(pot_id)?;
    if snapshots.is_empty() {
        debug!(pot_id, "No snapshots, returning empty report");
        return Ok(PotReport::empty(pot_id));
    }

    let transactions = source.transactions_by_date(pot_id)?;
    debug!(
        pot_id,
        snapshots = snapshots.len(),
        transactions = transactions.len(),
        "Building pot report"
    );

    assemble_report(pot_id, &snapshots, &transactions)
}

/// Compute a report from already-fetched, date-ordered records.
///
/// Totals too large for a `Decimal` are rejected as a validation error.
pub fn assemble_report(
    pot_id: i64,
    snapshots: &[Snapshot],
    transactions: &[Transaction],
) -> AppResult<PotReport> {
    let (Some(first), Some(last)) = (snapshots.first(), snapshots.last()) else {
        return Ok(PotReport::empty(pot_id));
    };

    let out_of_range = || AppError::Validation(format!("Pot {} totals are out of range", pot_id));

    let opening_balance = round_money(first.balance);
    let current_balance = round_money(last.balance);
    let totals = aggregate(transactions).ok_or_else(out_of_range)?;

    // Whatever the net cash flows don't explain is investment growth
    let growth = current_balance
        .checked_sub(opening_balance)
        .and_then(|d| d.checked_sub(totals.net_flows))
        .map(round_money)
        .ok_or_else(out_of_range)?;

    let cagr_annual_percent = cagr_percent(
        opening_balance,
        current_balance,
        Some(first.date),
        Some(last.date),
    );

    let schedule = investor_cash_flows(transactions, last.date, current_balance);
    let solution = solve_xirr(&schedule, &XirrConfig::default());
    debug!(
        pot_id,
        outcome = ?solution.outcome,
        iterations = solution.iterations,
        "Solved money-weighted return"
    );

    Ok(PotReport {
        pot_id,
        from_date: Some(first.date),
        to_date: Some(last.date),
        opening_balance,
        current_balance,
        contributions_excl_rebates: totals.contributions_excl_rebates,
        contributions_incl_rebates: totals.contributions_incl_rebates,
        net_flows: totals.net_flows,
        growth,
        cagr_annual_percent,
        irr_annual_percent: solution.rate.and_then(rate_to_percent),
    })
}
