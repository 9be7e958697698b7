//! Simulated credit-card provider.
//!
//! Models the real flow in two steps, a 3-D Secure verification followed by
//! the gateway capture, each behind its own cooperative delay. A fixed deny
//! list of card numbers always declines at capture, standing in for the
//! issuer rejecting the charge.

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;
use uuid::Uuid;

use super::{CardDetails, ChargeRequest, PaymentProvider};
use crate::config::GatewayConfig;
use crate::error::CheckoutError;
use crate::models::{PaymentMethodKind, PaymentReceipt, PaymentStatus};

/// Card numbers the simulated gateway always declines.
pub const DENIED_TEST_CARDS: [&str; 2] = ["4111111111111111", "5555555555554444"];

pub struct CardProvider {
    three_d_secure_delay: Duration,
    capture_delay: Duration,
    denied_cards: Vec<String>,
}

impl CardProvider {
    pub fn new(gateway: &GatewayConfig) -> Self {
        Self {
            three_d_secure_delay: Duration::from_millis(gateway.three_d_secure_delay_ms),
            capture_delay: Duration::from_millis(gateway.card_capture_delay_ms),
            denied_cards: DENIED_TEST_CARDS.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn with_denied_cards(mut self, cards: Vec<String>) -> Self {
        self.denied_cards = cards;
        self
    }

    /// Simulated ACS round trip. The demo issuer always approves; the
    /// failure path exists because a real ACS can reject.
    async fn three_d_secure(&self, _card: &CardDetails) -> bool {
        sleep(self.three_d_secure_delay).await;
        true
    }

    async fn capture(&self, card: &CardDetails) -> Result<(), CheckoutError> {
        sleep(self.capture_delay).await;

        let number = sanitize_card_number(&card.number);
        if self.denied_cards.iter().any(|denied| *denied == number) {
            tracing::warn!(last_four = %last_four(&number), "card declined by gateway");
            return Err(CheckoutError::PaymentDeclined(
                "Your card was declined. Please contact your bank.".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl PaymentProvider for CardProvider {
    fn method(&self) -> PaymentMethodKind {
        PaymentMethodKind::CreditCard
    }

    async fn charge(&self, request: &ChargeRequest) -> Result<PaymentReceipt, CheckoutError> {
        let card = request.card.as_ref().ok_or_else(|| {
            CheckoutError::InvalidRequest("Card details are required".to_string())
        })?;

        if !self.three_d_secure(card).await {
            return Err(CheckoutError::PaymentDeclined(
                "3-D Secure verification failed".to_string(),
            ));
        }

        self.capture(card).await?;

        let reference = capture_reference();
        tracing::info!(
            amount = %request.amount,
            currency = %request.currency,
            reference = %reference,
            "card charge captured"
        );

        Ok(PaymentReceipt::new(
            PaymentMethodKind::CreditCard,
            request.amount,
            PaymentStatus::Completed,
            reference,
        ))
    }
}

fn capture_reference() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("CC-{}", id[..8].to_uppercase())
}

fn sanitize_card_number(number: &str) -> String {
    number.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn last_four(number: &str) -> &str {
    let len = number.len();
    if len >= 4 {
        &number[len - 4..]
    } else {
        number
    }
}

/// Luhn checksum over the digits of a card number. Validates structure
/// only, not authorization.
pub fn luhn_check(number: &str) -> bool {
    let digits: Vec<u32> = number.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.is_empty() {
        return false;
    }

    let mut sum = 0;
    let mut double = false;
    for &digit in digits.iter().rev() {
        let mut value = digit;
        if double {
            value *= 2;
            if value > 9 {
                value -= 9;
            }
        }
        sum += value;
        double = !double;
    }

    sum % 10 == 0
}
