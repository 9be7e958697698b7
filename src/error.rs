use thiserror::Error;

/// Error taxonomy of the checkout engine.
///
/// Every variant renders as a human-readable message suitable for surfacing
/// to the customer; the embedding layer decides whether to re-prompt. No
/// failure is retried automatically.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("Your cart is empty")]
    EmptyCart,

    #[error("Invalid or expired discount code")]
    InvalidDiscount,

    #[error("Unsupported payment method: {0}")]
    UnsupportedMethod(String),

    #[error("Payment failed: {0}")]
    PaymentDeclined(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for CheckoutError {
    fn from(err: serde_json::Error) -> Self {
        CheckoutError::Storage(err.to_string())
    }
}
