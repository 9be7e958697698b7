//! Discount codes and their application rules.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    Percentage,
    Fixed,
}

impl DiscountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountKind::Percentage => "percentage",
            DiscountKind::Fixed => "fixed",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "fixed" => DiscountKind::Fixed,
            _ => DiscountKind::Percentage,
        }
    }
}

/// A table-driven promotional code. `value` is percent points for
/// percentage codes and a currency amount for fixed codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountCode {
    pub code: String,
    pub kind: DiscountKind,
    pub value: Decimal,
    pub min_amount: Option<Decimal>,
    pub expires: NaiveDate,
}

impl DiscountCode {
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        today > self.expires
    }

    /// Apply the discount to a subtotal.
    ///
    /// Below `min_amount` the discount is a no-op; fixed discounts clamp
    /// the result at zero.
    pub fn apply(&self, subtotal: Decimal) -> Decimal {
        if let Some(min) = self.min_amount {
            if subtotal < min {
                return subtotal;
            }
        }
        match self.kind {
            DiscountKind::Percentage => {
                subtotal * (Decimal::ONE - self.value / Decimal::from(100))
            }
            DiscountKind::Fixed => std::cmp::max(subtotal - self.value, Decimal::ZERO),
        }
    }
}

/// Built-in demo codes, matching the storefront promotions.
pub static DEMO_DISCOUNT_CODES: Lazy<Vec<DiscountCode>> = Lazy::new(|| {
    let expires = NaiveDate::from_ymd_opt(2030, 12, 31).unwrap_or(NaiveDate::MAX);
    vec![
        DiscountCode {
            code: "ELALDI10".to_string(),
            kind: DiscountKind::Percentage,
            value: Decimal::from(10),
            min_amount: Some(Decimal::from(100)),
            expires,
        },
        DiscountCode {
            code: "ELALDI20".to_string(),
            kind: DiscountKind::Percentage,
            value: Decimal::from(20),
            min_amount: Some(Decimal::from(300)),
            expires,
        },
        DiscountCode {
            code: "WELCOME50".to_string(),
            kind: DiscountKind::Fixed,
            value: Decimal::from(50),
            min_amount: None,
            expires,
        },
        DiscountCode {
            code: "FIRSTORDER".to_string(),
            kind: DiscountKind::Percentage,
            value: Decimal::from(15),
            min_amount: None,
            expires,
        },
    ]
});

pub fn demo_discount_codes() -> Vec<DiscountCode> {
    DEMO_DISCOUNT_CODES.clone()
}

/// Look up a code in a table, case-insensitively, rejecting expired entries.
pub fn find_discount_code(
    table: &[DiscountCode],
    code: &str,
    today: NaiveDate,
) -> Option<DiscountCode> {
    let wanted = code.trim();
    table
        .iter()
        .find(|entry| entry.code.eq_ignore_ascii_case(wanted))
        .filter(|entry| !entry.is_expired(today))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percentage(value: i64, min: Option<i64>) -> DiscountCode {
        DiscountCode {
            code: "TEST".to_string(),
            kind: DiscountKind::Percentage,
            value: Decimal::from(value),
            min_amount: min.map(Decimal::from),
            expires: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
        }
    }

    #[test]
    fn percentage_below_minimum_is_noop() {
        let code = percentage(10, Some(100));
        assert_eq!(code.apply(Decimal::from(99)), Decimal::from(99));
    }

    #[test]
    fn percentage_at_minimum_applies() {
        let code = percentage(10, Some(100));
        assert_eq!(code.apply(Decimal::from(100)), Decimal::from(90));
    }

    #[test]
    fn fixed_discount_clamps_at_zero() {
        let code = DiscountCode {
            code: "WELCOME50".to_string(),
            kind: DiscountKind::Fixed,
            value: Decimal::from(50),
            min_amount: None,
            expires: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
        };
        assert_eq!(code.apply(Decimal::from(30)), Decimal::ZERO);
        assert_eq!(code.apply(Decimal::from(80)), Decimal::from(30));
    }

    #[test]
    fn expired_codes_are_not_found() {
        let mut code = percentage(10, None);
        code.expires = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let table = vec![code];
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert!(find_discount_code(&table, "TEST", today).is_none());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let table = demo_discount_codes();
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert!(find_discount_code(&table, "welcome50", today).is_some());
        assert!(find_discount_code(&table, "NOPE", today).is_none());
    }
}
