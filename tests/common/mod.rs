//! Shared test harness: in-memory store, zero-latency gateways and a
//! recording notifier.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use checkout_core::config::{CheckoutConfig, GatewayConfig};
use checkout_core::models::{AddItem, BillingPeriod, ItemKind, SelectedPlan};
use checkout_core::services::notify::{NoticeLevel, Notifier};
use checkout_core::services::store::CheckoutStore;
use checkout_core::{CartService, CheckoutRequest, CheckoutService};

pub struct TestContext {
    pub store: CheckoutStore,
    pub cart: CartService,
    pub checkout: CheckoutService,
    pub notifier: Arc<RecordingNotifier>,
}

pub async fn setup() -> TestContext {
    init_tracing();

    let store = CheckoutStore::in_memory();
    let notifier = Arc::new(RecordingNotifier::default());

    let mut config = CheckoutConfig::default();
    config.gateway = GatewayConfig::zero_latency();

    let cart = CartService::load(store.clone(), notifier.clone())
        .await
        .expect("cart should load from an empty store");
    let checkout = CheckoutService::new(config, store.clone(), notifier.clone());

    TestContext {
        store,
        cart,
        checkout,
        notifier,
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Notifier that records every message for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(NoticeLevel, String)>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<(NoticeLevel, String)> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}

pub fn service_item(id: &str, name: &str, price: &str) -> AddItem {
    AddItem {
        id: Some(id.to_string()),
        kind: ItemKind::Service,
        name: name.to_string(),
        price: price.to_string(),
        quantity: 1,
    }
}

pub fn monthly_plan(name: &str, price: &str) -> SelectedPlan {
    plan_with_period(name, price, BillingPeriod::Monthly)
}

pub fn plan_with_period(name: &str, price: &str, billing_period: BillingPeriod) -> SelectedPlan {
    SelectedPlan {
        name: name.to_string(),
        price: price.to_string(),
        billing_period,
    }
}

pub fn base_request(method: &str) -> CheckoutRequest {
    CheckoutRequest {
        method: method.to_string(),
        name: "Demo Customer".to_string(),
        email: "demo@example.com".to_string(),
        phone: "5551234567".to_string(),
        company: String::new(),
        tax_number: String::new(),
        address: String::new(),
        need_invoice: false,
        card_number: None,
        expiry_date: None,
        cvc: None,
        card_name: None,
    }
}

pub fn eft_request() -> CheckoutRequest {
    base_request("eft")
}

pub fn card_request(number: &str) -> CheckoutRequest {
    let mut request = base_request("credit_card");
    request.card_number = Some(number.to_string());
    request.expiry_date = Some("12/28".to_string());
    request.cvc = Some("123".to_string());
    request
}
