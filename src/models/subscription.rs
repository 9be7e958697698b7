//! Subscription derived from an order that carried a plan.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Customer, PaymentMethodKind, SelectedPlan};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Cancelled,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "cancelled" => SubscriptionStatus::Cancelled,
            _ => SubscriptionStatus::Active,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: Uuid,
    pub order_id: Uuid,
    pub plan: SelectedPlan,
    pub customer: Customer,
    pub start_date: DateTime<Utc>,
    /// End of the current paid period, computed from the billing period.
    pub end_date: DateTime<Utc>,
    pub next_billing_date: DateTime<Utc>,
    pub status: SubscriptionStatus,
    pub auto_renew: bool,
    pub payment_method: PaymentMethodKind,
    pub cancelled_at: Option<DateTime<Utc>>,
}
