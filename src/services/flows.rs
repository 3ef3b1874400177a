//! Transaction classification and contribution/net-flow totals.

use rust_decimal::Decimal;

use crate::models::{Transaction, TransactionType};
use crate::services::round_money;

/// Reporting direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowClass {
    /// New money paid into the pot.
    Inflow,
    /// Provider credit. Counted as a contribution in only one of the totals.
    Rebate,
    /// Everything else, adjustments included.
    Outflow,
}

impl FlowClass {
    /// True for money the saver put in (inflows and rebates).
    pub fn is_contribution(&self) -> bool {
        matches!(self, Self::Inflow | Self::Rebate)
    }
}

pub fn classify(transaction_type: TransactionType) -> FlowClass {
    match transaction_type {
        TransactionType::Contribution
        | TransactionType::EmployerMatch
        | TransactionType::TransferIn => FlowClass::Inflow,
        TransactionType::Rebate => FlowClass::Rebate,
        TransactionType::TransferOut
        | TransactionType::Withdrawal
        | TransactionType::Fee
        | TransactionType::Adjustment => FlowClass::Outflow,
    }
}

/// Cash-flow totals for a pot, rounded to pennies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlowTotals {
    pub contributions_excl_rebates: Decimal,
    pub contributions_incl_rebates: Decimal,
    pub net_flows: Decimal,
}

/// Sum transaction amounts into report totals.
///
/// Order does not matter. Amounts are summed exactly and rounded once at the
/// end, so per-row rounding never accumulates. Returns None if a sum leaves
/// the range of a `Decimal`.
pub fn aggregate(transactions: &[Transaction]) -> Option<FlowTotals> {
    let mut inflows = Decimal::ZERO;
    let mut rebates = Decimal::ZERO;
    let mut net = Decimal::ZERO;

    for tx in transactions {
        match classify(tx.transaction_type) {
            FlowClass::Inflow => inflows = inflows.checked_add(tx.amount)?,
            FlowClass::Rebate => rebates = rebates.checked_add(tx.amount)?,
            FlowClass::Outflow => {}
        }
        net = net.checked_add(tx.amount)?;
    }

    Some(FlowTotals {
        contributions_excl_rebates: round_money(inflows),
        contributions_incl_rebates: round_money(inflows.checked_add(rebates)?),
        net_flows: round_money(net),
    })
}
