//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::borrow::Borrow;
use std::fmt::Display;

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a monetary amount with exactly two decimals (`950.5` -> `950.50`).
///
/// Halves round away from zero.
#[must_use]
pub fn format_amount(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

/// Render an amount with two decimals.
///
/// Usage in templates: `{{ row.price|amount }}`
#[askama::filter_fn]
pub fn amount(value: impl Borrow<Decimal>, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_amount(*value.borrow()))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_pads_decimals() {
        assert_eq!(format_amount(Decimal::new(9505, 1)), "950.50");
        assert_eq!(format_amount(Decimal::new(1200, 0)), "1200.00");
        assert_eq!(format_amount(Decimal::new(95050, 2)), "950.50");
    }

    #[test]
    fn test_format_amount_rounds_half_away_from_zero() {
        assert_eq!(format_amount(Decimal::new(19999, 3)), "20.00");
        assert_eq!(format_amount(Decimal::new(1005, 3)), "1.01");
        assert_eq!(format_amount(Decimal::new(-15, 1)), "-1.50");
    }
}
