//! Embeddable cart and checkout engine.
//!
//! The crate owns the cart state (line items plus an optional subscription
//! plan), computes totals with discount application, and drives a checkout
//! pipeline that dispatches to a pluggable payment provider, producing an
//! order record, an optional invoice and an optional subscription.
//!
//! Persistence goes through an injected key-value port ([`services::store`]),
//! user-facing messages through an injected [`services::notify::Notifier`].
//! The bundled payment providers simulate their gateways with cooperative
//! delays; a real gateway integration slots in behind the same
//! [`providers::PaymentProvider`] contract.

pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod services;
pub mod util;

pub use config::CheckoutConfig;
pub use error::CheckoutError;
pub use services::cart::CartService;
pub use services::checkout::{CheckoutRequest, CheckoutService, CheckoutSuccess};
