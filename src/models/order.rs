//! Orders and payment receipts.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CartItem, DiscountCode, PaymentMethodKind, SelectedPlan};

/// Customer details collected from the checkout form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub tax_number: String,
    #[serde(default)]
    pub address: String,
}

/// Outcome status reported by a payment provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Completed,
    PendingApproval,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Completed => "completed",
            PaymentStatus::PendingApproval => "pending_approval",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "pending_approval" => PaymentStatus::PendingApproval,
            _ => PaymentStatus::Completed,
        }
    }
}

/// Result of a successful provider charge. Declines surface as errors,
/// never as a receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub transaction_id: Uuid,
    /// Human-facing reference, e.g. what the customer writes in the EFT
    /// transfer description.
    pub reference: String,
    pub amount: Decimal,
    pub method: PaymentMethodKind,
    pub timestamp: DateTime<Utc>,
    pub status: PaymentStatus,
    pub admin_approval_required: bool,
}

impl PaymentReceipt {
    pub fn new(
        method: PaymentMethodKind,
        amount: Decimal,
        status: PaymentStatus,
        reference: String,
    ) -> Self {
        Self {
            transaction_id: Uuid::new_v4(),
            reference,
            amount,
            method,
            timestamp: Utc::now(),
            status,
            admin_approval_required: status == PaymentStatus::PendingApproval,
        }
    }
}

/// Order lifecycle status. `PendingApproval` orders wait for the
/// out-of-band admin decision; the transition is the only mutation an
/// order sees after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    PendingApproval,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::PendingApproval => "pending_approval",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "pending_approval" => OrderStatus::PendingApproval,
            "cancelled" => OrderStatus::Cancelled,
            _ => OrderStatus::Completed,
        }
    }
}

impl From<PaymentStatus> for OrderStatus {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Completed => OrderStatus::Completed,
            PaymentStatus::PendingApproval => OrderStatus::PendingApproval,
        }
    }
}

/// A completed checkout. Items, plan and discount are snapshots of the
/// cart at checkout time; `subtotal` is pre-discount, `total` is what the
/// provider charged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub items: Vec<CartItem>,
    pub plan: Option<SelectedPlan>,
    pub subtotal: Decimal,
    pub total: Decimal,
    pub discount: Option<DiscountCode>,
    pub payment: PaymentReceipt,
    pub customer: Customer,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub admin_approval_required: bool,
}
