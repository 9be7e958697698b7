//! Invoice derived from a completed order.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CartItem, Customer, SelectedPlan};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Void,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Void => "void",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "paid" => InvoiceStatus::Paid,
            "void" => InvoiceStatus::Void,
            _ => InvoiceStatus::Pending,
        }
    }
}

/// Discount line printed on the invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountLine {
    pub code: String,
    pub amount: Decimal,
}

/// Derived 1:1 from an [`super::Order`] when the customer requests one.
/// Adds the flat tax computation and a due date; it has no lifecycle of
/// its own beyond creation and storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    pub order_id: Uuid,
    pub customer: Customer,
    pub items: Vec<CartItem>,
    pub plan: Option<SelectedPlan>,
    /// Pre-discount sum of the order lines.
    pub subtotal: Decimal,
    pub discount: Option<DiscountLine>,
    /// Post-discount net total, equal to the order total.
    pub total: Decimal,
    pub tax_rate_percent: Decimal,
    pub tax_amount: Decimal,
    pub grand_total: Decimal,
    pub issue_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub status: InvoiceStatus,
}
