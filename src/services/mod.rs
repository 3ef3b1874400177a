pub mod cagr;
pub mod flows;
pub mod report;
pub mod xirr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Day count used to turn calendar spans into years.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Round a monetary value to pennies, halves towards positive infinity.
///
/// `-1.005` becomes `-1.00`, the same as `1.005` becoming `1.01`.
pub fn round_money(value: Decimal) -> Decimal {
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    value.round_dp_with_strategy(2, strategy)
}

/// Convert a fractional rate (0.07) into a rounded percentage (7.00).
///
/// Returns None for NaN, infinities and values too large for a Decimal.
pub fn rate_to_percent(rate: f64) -> Option<Decimal> {
    if !rate.is_finite() {
        return None;
    }
    Decimal::from_f64(rate * 100.0).map(round_money)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_money_half_up() {
        assert_eq!(round_money(dec!(1.005)), dec!(1.01));
        assert_eq!(round_money(dec!(1.004)), dec!(1.00));
        assert_eq!(round_money(dec!(-1.005)), dec!(-1.00));
        assert_eq!(round_money(dec!(-1.006)), dec!(-1.01));
        assert_eq!(round_money(dec!(12)), dec!(12.00));
    }

    #[test]
    fn test_rate_to_percent() {
        assert_eq!(rate_to_percent(0.07), Some(dec!(7.00)));
        assert_eq!(rate_to_percent(0.123456), Some(dec!(12.35)));
        assert_eq!(rate_to_percent(-0.5), Some(dec!(-50.00)));
        assert_eq!(rate_to_percent(f64::NAN), None);
        assert_eq!(rate_to_percent(f64::INFINITY), None);
        assert_eq!(rate_to_percent(1e300), None);
    }
}
