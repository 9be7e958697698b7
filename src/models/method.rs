//! Payment method identifiers and the descriptive catalog shown at checkout.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::{BankAccount, CheckoutConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodKind {
    Eft,
    CreditCard,
    Qr,
}

impl PaymentMethodKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethodKind::Eft => "eft",
            PaymentMethodKind::CreditCard => "credit_card",
            PaymentMethodKind::Qr => "qr",
        }
    }

    /// Parse a method id from form input. Unknown ids are rejected rather
    /// than defaulted; the checkout pipeline must not guess a method.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "eft" => Some(PaymentMethodKind::Eft),
            "credit_card" => Some(PaymentMethodKind::CreditCard),
            "qr" => Some(PaymentMethodKind::Qr),
            _ => None,
        }
    }
}

impl std::fmt::Display for PaymentMethodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation-layer description of a payment method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodInfo {
    pub kind: PaymentMethodKind,
    pub name: String,
    pub description: String,
    /// Processing fee in percent. Catalog data only; fees are not applied
    /// to cart totals.
    pub fee_percent: Decimal,
    pub processing_time: String,
    pub bank_accounts: Vec<BankAccount>,
    pub supported_cards: Vec<String>,
}

/// The catalog offered at checkout. EFT instructions carry the merchant's
/// bank accounts from configuration.
pub fn payment_method_catalog(config: &CheckoutConfig) -> Vec<PaymentMethodInfo> {
    vec![
        PaymentMethodInfo {
            kind: PaymentMethodKind::Eft,
            name: "EFT / Wire transfer".to_string(),
            description: "Bank-to-bank transfer".to_string(),
            fee_percent: Decimal::ZERO,
            processing_time: "1-2 business days".to_string(),
            bank_accounts: config.merchant.bank_accounts.clone(),
            supported_cards: vec![],
        },
        PaymentMethodInfo {
            kind: PaymentMethodKind::CreditCard,
            name: "Credit card".to_string(),
            description: "Online payment".to_string(),
            fee_percent: Decimal::from_str("2.5").unwrap_or(Decimal::ZERO),
            processing_time: "Instant".to_string(),
            bank_accounts: vec![],
            supported_cards: vec![
                "Visa".to_string(),
                "Mastercard".to_string(),
                "American Express".to_string(),
            ],
        },
        PaymentMethodInfo {
            kind: PaymentMethodKind::Qr,
            name: "QR code".to_string(),
            description: "Mobile payment".to_string(),
            fee_percent: Decimal::from_str("1.5").unwrap_or(Decimal::ZERO),
            processing_time: "Instant".to_string(),
            bank_accounts: vec![],
            supported_cards: vec![],
        },
    ]
}
