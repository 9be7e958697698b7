//! Domain models for the checkout engine.

mod cart;
mod discount;
mod invoice;
mod method;
mod order;
mod subscription;

pub use cart::{AddItem, BillingPeriod, CartItem, ItemKind, SelectedPlan};
pub use discount::{demo_discount_codes, find_discount_code, DiscountCode, DiscountKind};
pub use invoice::{DiscountLine, Invoice, InvoiceStatus};
pub use method::{payment_method_catalog, PaymentMethodInfo, PaymentMethodKind};
pub use order::{Customer, Order, OrderStatus, PaymentReceipt, PaymentStatus};
pub use subscription::{Subscription, SubscriptionStatus};
