//! User and admin notifications.
//!
//! The engine never renders UI; it reports through an injected [`Notifier`]
//! and the presentation layer decides how to show the message. The admin
//! side of an EFT order is a WhatsApp deep link carrying the order summary;
//! no network call is made here.

use crate::config::CheckoutConfig;
use crate::models::{Order, PaymentMethodKind};
use crate::util::format_money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// Sink for customer-facing messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, level: NoticeLevel, message: &str);

    fn info(&self, message: &str) {
        self.notify(NoticeLevel::Info, message);
    }

    fn success(&self, message: &str) {
        self.notify(NoticeLevel::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(NoticeLevel::Error, message);
    }
}

/// Default sink: structured log records, nothing user-visible.
#[derive(Debug, Default, Clone)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Info | NoticeLevel::Success => tracing::info!(%message, "notice"),
            NoticeLevel::Error => tracing::warn!(%message, "notice"),
        }
    }
}

/// Build a `wa.me` deep link with a pre-filled message.
pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(message))
}

/// Message the admin receives for an EFT order awaiting approval.
pub fn eft_approval_message(order: &Order, currency: &str) -> String {
    format!(
        "New EFT order\n\nOrder: {}\nCustomer: {}\nE-mail: {}\nAmount: {}\n\nPlease match the transfer with reference {} and approve.",
        order.id,
        order.customer.name,
        order.customer.email,
        format_money(order.total, currency),
        order.payment.reference,
    )
}

/// Record a new order for the admin. EFT orders additionally get the
/// prepared WhatsApp link logged so the operator can follow up.
pub fn admin_order_alert(config: &CheckoutConfig, order: &Order) {
    tracing::info!(
        order_id = %order.id,
        customer = %order.customer.name,
        total = %order.total,
        status = order.status.as_str(),
        "new order"
    );

    if order.payment.method == PaymentMethodKind::Eft {
        let message = eft_approval_message(order, &config.billing.currency);
        let link = whatsapp_link(&config.merchant.whatsapp_number, &message);
        tracing::info!(%link, "EFT approval notification prepared");
    }
}
