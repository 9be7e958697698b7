//! Cart line items and plan selection.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::util::parse_price;

/// Kind of purchasable cart entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Service,
    Product,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Service => "service",
            ItemKind::Product => "product",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "product" => ItemKind::Product,
            _ => ItemKind::Service,
        }
    }
}

/// A cart line. Identity is the `(id, kind)` pair; adding a matching item
/// increments `quantity` instead of duplicating the line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub kind: ItemKind,
    pub name: String,
    /// Display price as shown in the storefront, e.g. `"₺499"`.
    pub price: String,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    pub fn unit_price(&self) -> Decimal {
        parse_price(&self.price)
    }

    pub fn line_total(&self) -> Decimal {
        self.unit_price() * Decimal::from(self.quantity)
    }
}

/// Input for adding an item to the cart. Without an `id` one is generated
/// from the kind.
#[derive(Debug, Clone)]
pub struct AddItem {
    pub id: Option<String>,
    pub kind: ItemKind,
    pub name: String,
    pub price: String,
    pub quantity: u32,
}

impl AddItem {
    pub(crate) fn generated_id(&self) -> String {
        format!("{}_{}", self.kind.as_str(), Uuid::new_v4().simple())
    }
}

/// Billing period of a subscription plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingPeriod {
    Monthly,
    Quarterly,
    Yearly,
}

impl BillingPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "monthly",
            BillingPeriod::Quarterly => "quarterly",
            BillingPeriod::Yearly => "yearly",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "quarterly" => BillingPeriod::Quarterly,
            "yearly" => BillingPeriod::Yearly,
            _ => BillingPeriod::Monthly,
        }
    }

    /// Length of one period in calendar months.
    pub fn months(&self) -> u32 {
        match self {
            BillingPeriod::Monthly => 1,
            BillingPeriod::Quarterly => 3,
            BillingPeriod::Yearly => 12,
        }
    }
}

/// Subscription plan selection. At most one is active at a time,
/// independently of the cart lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedPlan {
    pub name: String,
    /// Display price, parsed the same way as item prices.
    pub price: String,
    pub billing_period: BillingPeriod,
}

impl SelectedPlan {
    pub fn plan_price(&self) -> Decimal {
        parse_price(&self.price)
    }
}
