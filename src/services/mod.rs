//! Services of the checkout engine.

pub mod cart;
pub mod checkout;
pub mod invoicing;
pub mod notify;
pub mod store;
pub mod subscription;

pub use cart::CartService;
pub use checkout::{CheckoutRequest, CheckoutService, CheckoutSuccess};
pub use notify::{NoticeLevel, Notifier, TracingNotifier};
pub use store::{CheckoutStore, KeyValueStore, MemoryStore};
