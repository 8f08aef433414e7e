//! Display formatting for amounts. Totals stay exact; only these helpers round.

use rust_decimal::{Decimal, RoundingStrategy};

use super::currencies::Currency;

/// Round to `dp` decimal places, midpoint away from zero.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount with two decimals and the currency symbol,
/// e.g. `"$127.13"` or `"-€5.00"`.
pub fn format_money(value: Decimal, currency: &Currency) -> String {
    let rounded = round_half_up(value, 2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{}{:.2}", currency.symbol, rounded.abs())
}
