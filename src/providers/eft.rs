//! Simulated bank-transfer provider.

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;
use uuid::Uuid;

use super::{ChargeRequest, PaymentProvider};
use crate::config::GatewayConfig;
use crate::error::CheckoutError;
use crate::models::{PaymentMethodKind, PaymentReceipt, PaymentStatus};

/// EFT/wire transfers always succeed at the gateway but stay in
/// `pending_approval` until an admin matches the incoming transfer
/// against the reference out of band.
pub struct EftProvider {
    delay: Duration,
}

impl EftProvider {
    pub fn new(gateway: &GatewayConfig) -> Self {
        Self {
            delay: Duration::from_millis(gateway.eft_delay_ms),
        }
    }
}

#[async_trait]
impl PaymentProvider for EftProvider {
    fn method(&self) -> PaymentMethodKind {
        PaymentMethodKind::Eft
    }

    async fn charge(&self, request: &ChargeRequest) -> Result<PaymentReceipt, CheckoutError> {
        sleep(self.delay).await;

        let reference = transfer_reference();
        tracing::info!(
            amount = %request.amount,
            currency = %request.currency,
            reference = %reference,
            "EFT instruction issued, awaiting admin approval"
        );

        Ok(PaymentReceipt::new(
            PaymentMethodKind::Eft,
            request.amount,
            PaymentStatus::PendingApproval,
            reference,
        ))
    }
}

/// Short uppercase reference the customer quotes in the bank transfer
/// description.
fn transfer_reference() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("EFT-{}", id[..8].to_uppercase())
}
