//! Checkout pipeline: validate, charge, record.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::config::CheckoutConfig;
use crate::error::CheckoutError;
use crate::models::{
    Customer, Invoice, Order, OrderStatus, PaymentMethodKind, PaymentReceipt, Subscription,
};
use crate::providers::{self, card, CardDetails, ChargeRequest, PaymentProvider};
use crate::services::cart::CartService;
use crate::services::notify::{self, Notifier};
use crate::services::store::CheckoutStore;
use crate::services::{invoicing, subscription};

/// Payment data collected from the checkout form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckoutRequest {
    #[validate(length(min = 1, message = "Payment method is required"))]
    pub method: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Enter a valid e-mail address"))]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub tax_number: String,
    #[serde(default)]
    pub address: String,
    /// Derive and store an invoice alongside the order.
    #[serde(default)]
    pub need_invoice: bool,
    #[serde(default)]
    pub card_number: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub cvc: Option<String>,
    #[serde(default)]
    pub card_name: Option<String>,
}

impl CheckoutRequest {
    fn customer(&self) -> Customer {
        Customer {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            company: self.company.clone(),
            tax_number: self.tax_number.clone(),
            address: self.address.clone(),
        }
    }

    /// Card fields are only required for the card method: all three must
    /// be present and the number must pass the Luhn check.
    fn card_details(&self) -> Result<CardDetails, CheckoutError> {
        let (Some(number), Some(expiry), Some(cvc)) =
            (&self.card_number, &self.expiry_date, &self.cvc)
        else {
            return Err(CheckoutError::InvalidRequest(
                "Enter the complete card details".to_string(),
            ));
        };
        if number.trim().is_empty() || expiry.trim().is_empty() || cvc.trim().is_empty() {
            return Err(CheckoutError::InvalidRequest(
                "Enter the complete card details".to_string(),
            ));
        }
        if !card::luhn_check(number) {
            return Err(CheckoutError::InvalidRequest(
                "Invalid card number".to_string(),
            ));
        }

        Ok(CardDetails {
            number: number.clone(),
            expiry: expiry.clone(),
            cvc: cvc.clone(),
            holder: self.card_name.clone(),
        })
    }
}

/// Everything the pipeline hands back on success. `redirect` is the page
/// the presentation layer navigates to.
#[derive(Debug, Clone)]
pub struct CheckoutSuccess {
    pub order: Order,
    pub invoice: Option<Invoice>,
    pub subscription: Option<Subscription>,
    pub redirect: String,
    pub message: String,
}

/// Drives checkout against a cart: validates the request, dispatches to
/// the provider registered for the method, records the order and derives
/// invoice and subscription. Aborts before order creation on any
/// validation or provider failure; nothing partial is written and nothing
/// is retried.
pub struct CheckoutService {
    config: CheckoutConfig,
    store: CheckoutStore,
    notifier: Arc<dyn Notifier>,
    providers: HashMap<PaymentMethodKind, Arc<dyn PaymentProvider>>,
}

impl CheckoutService {
    /// Build with the bundled simulated providers.
    pub fn new(config: CheckoutConfig, store: CheckoutStore, notifier: Arc<dyn Notifier>) -> Self {
        let mut service = Self {
            providers: HashMap::new(),
            config,
            store,
            notifier,
        };
        for provider in providers::default_providers(&service.config.gateway) {
            service.providers.insert(provider.method(), provider);
        }
        service
    }

    /// Register or replace the provider for its method.
    pub fn with_provider(mut self, provider: Arc<dyn PaymentProvider>) -> Self {
        self.providers.insert(provider.method(), provider);
        self
    }

    pub fn config(&self) -> &CheckoutConfig {
        &self.config
    }

    #[instrument(skip_all, fields(method = %request.method, email = %request.email))]
    pub async fn process(
        &self,
        cart: &mut CartService,
        request: CheckoutRequest,
    ) -> Result<CheckoutSuccess, CheckoutError> {
        request.validate()?;

        let method = PaymentMethodKind::parse(&request.method)
            .ok_or_else(|| CheckoutError::UnsupportedMethod(request.method.clone()))?;

        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let card = if method == PaymentMethodKind::CreditCard {
            Some(request.card_details()?)
        } else {
            None
        };

        let provider = self
            .providers
            .get(&method)
            .ok_or_else(|| CheckoutError::UnsupportedMethod(method.to_string()))?;

        let charge = ChargeRequest {
            amount: cart.total(),
            currency: self.config.billing.currency.clone(),
            customer_email: request.email.clone(),
            card,
        };

        let receipt = match provider.charge(&charge).await {
            Ok(receipt) => receipt,
            Err(err) => {
                self.notifier.error(&err.to_string());
                return Err(err);
            }
        };

        let order = self.create_order(cart, &request, receipt).await?;
        let had_plan = order.plan.is_some();

        cart.clear().await?;

        let invoice = if request.need_invoice {
            Some(invoicing::generate(&self.store, &self.config, &order).await?)
        } else {
            None
        };

        let subscription = if had_plan {
            Some(subscription::start(&self.store, self.notifier.as_ref(), &order).await?)
        } else {
            None
        };

        self.notifier.success("Your payment has been received");

        Ok(CheckoutSuccess {
            redirect: format!("/payment/success?order={}", order.id),
            message: "Your payment has been received".to_string(),
            order,
            invoice,
            subscription,
        })
    }

    async fn create_order(
        &self,
        cart: &CartService,
        request: &CheckoutRequest,
        receipt: PaymentReceipt,
    ) -> Result<Order, CheckoutError> {
        let order = Order {
            id: Uuid::new_v4(),
            items: cart.items().to_vec(),
            plan: cart.plan().cloned(),
            subtotal: cart.subtotal(),
            total: cart.total(),
            discount: cart.discount().cloned(),
            customer: request.customer(),
            created_at: chrono::Utc::now(),
            status: OrderStatus::from(receipt.status),
            admin_approval_required: receipt.admin_approval_required,
            payment: receipt,
        };

        self.store.append_order(&order).await?;
        notify::admin_order_alert(&self.config, &order);

        tracing::info!(
            order_id = %order.id,
            total = %order.total,
            status = order.status.as_str(),
            "order recorded"
        );
        Ok(order)
    }

    pub async fn order(&self, id: Uuid) -> Result<Option<Order>, CheckoutError> {
        self.store.find_order(id).await
    }

    /// Orders placed under a customer e-mail address.
    pub async fn orders_for_customer(&self, email: &str) -> Result<Vec<Order>, CheckoutError> {
        Ok(self
            .store
            .orders()
            .await?
            .into_iter()
            .filter(|order| order.customer.email.eq_ignore_ascii_case(email))
            .collect())
    }

    /// Admin-driven status transition, the only mutation an order sees
    /// after creation. The admin panel calls this when approving or
    /// cancelling an EFT order.
    #[instrument(skip(self))]
    pub async fn update_order_status(
        &self,
        id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, CheckoutError> {
        let mut orders = self.store.orders().await?;
        let Some(order) = orders.iter_mut().find(|order| order.id == id) else {
            return Err(CheckoutError::NotFound(format!("order {}", id)));
        };

        order.status = status;
        let updated = order.clone();
        self.store.save_orders(&orders).await?;

        tracing::info!(order_id = %id, status = status.as_str(), "order status updated");
        Ok(updated)
    }

    pub async fn invoice(&self, id: Uuid) -> Result<Option<Invoice>, CheckoutError> {
        self.store.find_invoice(id).await
    }

    /// Printable HTML document for an invoice.
    pub fn render_invoice_html(&self, invoice: &Invoice) -> String {
        invoicing::render_html(invoice, &self.config)
    }

    pub async fn subscriptions(&self) -> Result<Vec<Subscription>, CheckoutError> {
        self.store.subscriptions().await
    }

    /// Cancel a subscription. Returns whether it existed.
    pub async fn cancel_subscription(&self, id: Uuid) -> Result<bool, CheckoutError> {
        subscription::cancel(&self.store, self.notifier.as_ref(), id).await
    }
}
