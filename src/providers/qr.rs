//! Simulated QR mobile-payment provider.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::time::Duration;
use tokio::time::sleep;
use uuid::Uuid;

use super::{ChargeRequest, PaymentProvider};
use crate::config::GatewayConfig;
use crate::error::CheckoutError;
use crate::models::{PaymentMethodKind, PaymentReceipt, PaymentStatus};

pub struct QrProvider {
    delay: Duration,
}

impl QrProvider {
    pub fn new(gateway: &GatewayConfig) -> Self {
        Self {
            delay: Duration::from_millis(gateway.qr_delay_ms),
        }
    }

    /// Payload encoded into the QR image by the presentation layer.
    pub fn payment_payload(&self, reference: &str, amount: Decimal) -> String {
        format!("pay://checkout?ref={}&am={:.2}", reference, amount)
    }
}

#[async_trait]
impl PaymentProvider for QrProvider {
    fn method(&self) -> PaymentMethodKind {
        PaymentMethodKind::Qr
    }

    async fn charge(&self, request: &ChargeRequest) -> Result<PaymentReceipt, CheckoutError> {
        sleep(self.delay).await;

        let reference = qr_reference();
        tracing::info!(
            amount = %request.amount,
            currency = %request.currency,
            reference = %reference,
            "QR payment confirmed"
        );

        Ok(PaymentReceipt::new(
            PaymentMethodKind::Qr,
            request.amount,
            PaymentStatus::Completed,
            reference,
        ))
    }
}

fn qr_reference() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("QR-{}", id[..8].to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_reference_and_amount() {
        let provider = QrProvider::new(&GatewayConfig::zero_latency());
        let payload = provider.payment_payload("QR-ABCD1234", Decimal::from(150));
        assert_eq!(payload, "pay://checkout?ref=QR-ABCD1234&am=150.00");
    }
}
