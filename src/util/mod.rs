//! Small shared helpers.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a storefront display price such as `"₺499"` or `"1499,90 TL"`.
///
/// Strips everything except digits, `.` and `,`, normalizes the decimal
/// comma to a dot, and falls back to zero when nothing parseable remains.
pub fn parse_price(raw: &str) -> Decimal {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    let normalized = cleaned.replace(',', ".");
    Decimal::from_str(&normalized).unwrap_or(Decimal::ZERO)
}

/// Format an amount with two decimal places and its currency code.
pub fn format_money(amount: Decimal, currency: &str) -> String {
    format!("{:.2} {}", amount, currency)
}
