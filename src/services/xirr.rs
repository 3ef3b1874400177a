use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::Transaction;
use crate::services::flows::classify;
use crate::services::DAYS_PER_YEAR;

/// Starting rate for the Newton-Raphson search (7%).
pub const DEFAULT_INITIAL_GUESS: f64 = 0.07;
/// Hard cap on solver steps.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
/// Converged once a step moves the rate by less than this.
pub const DEFAULT_TOLERANCE: f64 = 1e-7;
/// Below this the NPV curve is treated as flat and the search stops.
pub const DEFAULT_MIN_DERIVATIVE: f64 = 1e-12;

/// A cash flow with a date and amount, from the investor's point of view
#[derive(Debug, Clone)]
pub struct CashFlow {
    pub date: NaiveDate,
    pub amount: f64, // negative = paid in, positive = paid back
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XirrConfig {
    pub initial_guess: f64,
    pub max_iterations: u32,
    pub tolerance: f64,
    pub min_derivative: f64,
}

impl Default for XirrConfig {
    fn default() -> Self {
        Self {
            initial_guess: DEFAULT_INITIAL_GUESS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
            min_derivative: DEFAULT_MIN_DERIVATIVE,
        }
    }
}

/// How the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XirrOutcome {
    /// Flows were empty, all zero, or all one sign. No iteration ran.
    Degenerate,
    /// A step moved the rate by less than the tolerance.
    Converged,
    /// The derivative vanished; the last rate is kept if finite.
    FlatDerivative,
    /// Ran out of iterations; the last rate is kept if finite.
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XirrSolution {
    /// Annual rate as a fraction (0.07 for 7%), None if not computable.
    pub rate: Option<f64>,
    /// Number of NPV evaluations performed.
    pub iterations: u32,
    pub outcome: XirrOutcome,
}

impl XirrSolution {
    fn degenerate() -> Self {
        Self {
            rate: None,
            iterations: 0,
            outcome: XirrOutcome::Degenerate,
        }
    }
}

/// Build the investor-side cash-flow schedule for a pot.
///
/// Contributions and rebates leave the investor's pocket, so they are
/// negated. Every other type keeps its stored amount unchanged. A final flow
/// of `current_balance` on `to_date` stands for cashing the pot in.
pub fn investor_cash_flows(
    transactions: &[Transaction],
    to_date: NaiveDate,
    current_balance: Decimal,
) -> Vec<CashFlow> {
    let mut flows: Vec<CashFlow> = transactions
        .iter()
        .map(|tx| {
            let amount = tx.amount.to_f64().unwrap_or(0.0);
            CashFlow {
                date: tx.date,
                amount: if classify(tx.transaction_type).is_contribution() {
                    -amount
                } else {
                    amount
                },
            }
        })
        .collect();

    flows.push(CashFlow {
        date: to_date,
        amount: current_balance.to_f64().unwrap_or(0.0),
    });

    flows
}

/// Calculate XIRR (Extended Internal Rate of Return) using Newton-Raphson method
///
/// XIRR finds the discount rate that makes the net present value of all cash
/// flows equal to zero. Years are measured from the date of the first flow.
///
/// There is no bracketing or bisection fallback: oscillating or diverging
/// searches simply end up as a non-finite rate, reported as None.
pub fn solve_xirr(cash_flows: &[CashFlow], config: &XirrConfig) -> XirrSolution {
    let Some(first) = cash_flows.first() else {
        return XirrSolution::degenerate();
    };

    // Need both money in and money out, which also rules out all-zero flows
    let has_negative = cash_flows.iter().any(|cf| cf.amount < 0.0);
    let has_positive = cash_flows.iter().any(|cf| cf.amount > 0.0);
    if !has_negative || !has_positive {
        return XirrSolution::degenerate();
    }

    let base_date = first.date;
    let mut rate = config.initial_guess;

    for iteration in 1..=config.max_iterations {
        let (npv, npv_derivative) = calculate_npv_and_derivative(cash_flows, base_date, rate);

        if npv_derivative.abs() < config.min_derivative {
            return XirrSolution {
                rate: finite(rate),
                iterations: iteration,
                outcome: XirrOutcome::FlatDerivative,
            };
        }

        let new_rate = rate - npv / npv_derivative;

        if (new_rate - rate).abs() < config.tolerance {
            return XirrSolution {
                rate: finite(new_rate),
                iterations: iteration,
                outcome: XirrOutcome::Converged,
            };
        }

        rate = new_rate;
    }

    XirrSolution {
        rate: finite(rate),
        iterations: config.max_iterations,
        outcome: XirrOutcome::Exhausted,
    }
}

/// Solve with the default configuration, returning just the rate.
pub fn calculate_xirr(cash_flows: &[CashFlow]) -> Option<f64> {
    solve_xirr(cash_flows, &XirrConfig::default()).rate
}

fn finite(rate: f64) -> Option<f64> {
    rate.is_finite().then_some(rate)
}

/// Calculate NPV and its derivative with respect to rate
fn calculate_npv_and_derivative(
    cash_flows: &[CashFlow],
    base_date: NaiveDate,
    rate: f64,
) -> (f64, f64) {
    let mut npv = 0.0;
    let mut npv_derivative = 0.0;

    for cf in cash_flows {
        let days = (cf.date - base_date).num_days() as f64;
        let years = days / DAYS_PER_YEAR;

        let discount_factor = (1.0 + rate).powf(-years);
        npv += cf.amount * discount_factor;

        // Derivative: d/dr [amount * (1+r)^(-t)] = -t * amount * (1+r)^(-t-1)
        npv_derivative -= years * cf.amount * (1.0 + rate).powf(-years - 1.0);
    }

    (npv, npv_derivative)
}
