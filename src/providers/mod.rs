//! Pluggable payment providers.
//!
//! Every method the checkout pipeline can dispatch to implements
//! [`PaymentProvider`]. The bundled implementations simulate their gateways
//! with cooperative delays and fixed demo behavior; a real integration
//! replaces one of them behind the same contract.

pub mod card;
pub mod eft;
pub mod qr;

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

pub use card::CardProvider;
pub use eft::EftProvider;
pub use qr::QrProvider;

use crate::config::GatewayConfig;
use crate::error::CheckoutError;
use crate::models::{PaymentMethodKind, PaymentReceipt};

/// Card fields forwarded to a card-capable provider.
#[derive(Debug, Clone)]
pub struct CardDetails {
    pub number: String,
    pub expiry: String,
    pub cvc: String,
    pub holder: Option<String>,
}

/// Everything a provider needs to attempt a charge. The pipeline computes
/// the amount once; providers never recompute totals.
#[derive(Debug, Clone)]
pub struct ChargeRequest {
    pub amount: Decimal,
    pub currency: String,
    pub customer_email: String,
    pub card: Option<CardDetails>,
}

#[async_trait]
pub trait PaymentProvider: Send + Sync {
    fn method(&self) -> PaymentMethodKind;

    /// Attempt the charge. A decline is an error, never a receipt.
    async fn charge(&self, request: &ChargeRequest) -> Result<PaymentReceipt, CheckoutError>;
}

/// The bundled simulated providers, one per supported method.
pub fn default_providers(gateway: &GatewayConfig) -> Vec<Arc<dyn PaymentProvider>> {
    vec![
        Arc::new(EftProvider::new(gateway)),
        Arc::new(CardProvider::new(gateway)),
        Arc::new(QrProvider::new(gateway)),
    ]
}
