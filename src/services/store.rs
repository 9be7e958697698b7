//! Persistence port and the typed store over it.
//!
//! The engine never talks to a concrete database; it writes JSON values
//! through [`KeyValueStore`]. The browser build backs this with local
//! storage, tests and demos with [`MemoryStore`], a server deployment with
//! whatever document store it has. Keys are written independently; there is
//! no transaction spanning them.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::CheckoutError;
use crate::models::{CartItem, Invoice, Order, SelectedPlan, Subscription};

pub const CART_KEY: &str = "cart";
pub const PLAN_KEY: &str = "selected_plan";
pub const ORDERS_KEY: &str = "orders";
pub const INVOICES_KEY: &str = "invoices";
pub const SUBSCRIPTIONS_KEY: &str = "subscriptions";

/// Minimal key-value contract the embedding layer implements.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CheckoutError>;
    async fn put(&self, key: &str, value: String) -> Result<(), CheckoutError>;
    async fn remove(&self, key: &str) -> Result<(), CheckoutError>;
}

/// In-memory implementation, the default for tests and demos.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CheckoutError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: String) -> Result<(), CheckoutError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), CheckoutError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

/// Typed accessors over the raw port, one per persisted collection.
#[derive(Clone)]
pub struct CheckoutStore {
    inner: Arc<dyn KeyValueStore>,
}

impl CheckoutStore {
    pub fn new(inner: Arc<dyn KeyValueStore>) -> Self {
        Self { inner }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    async fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CheckoutError> {
        match self.inner.get(key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CheckoutError> {
        let raw = serde_json::to_string(value)?;
        self.inner.put(key, raw).await
    }

    /// A cart that fails to deserialize is treated as empty rather than
    /// wedging the storefront.
    pub async fn load_cart(&self) -> Result<Vec<CartItem>, CheckoutError> {
        match self.load::<Vec<CartItem>>(CART_KEY).await {
            Ok(items) => Ok(items.unwrap_or_default()),
            Err(CheckoutError::Storage(reason)) => {
                tracing::warn!(%reason, "discarding unreadable cart state");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    pub async fn save_cart(&self, items: &[CartItem]) -> Result<(), CheckoutError> {
        self.save(CART_KEY, &items).await
    }

    pub async fn load_plan(&self) -> Result<Option<SelectedPlan>, CheckoutError> {
        match self.load::<SelectedPlan>(PLAN_KEY).await {
            Ok(plan) => Ok(plan),
            Err(CheckoutError::Storage(reason)) => {
                tracing::warn!(%reason, "discarding unreadable plan selection");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    pub async fn save_plan(&self, plan: &SelectedPlan) -> Result<(), CheckoutError> {
        self.save(PLAN_KEY, plan).await
    }

    pub async fn clear_plan(&self) -> Result<(), CheckoutError> {
        self.inner.remove(PLAN_KEY).await
    }

    pub async fn orders(&self) -> Result<Vec<Order>, CheckoutError> {
        Ok(self.load(ORDERS_KEY).await?.unwrap_or_default())
    }

    pub async fn append_order(&self, order: &Order) -> Result<(), CheckoutError> {
        let mut orders = self.orders().await?;
        orders.push(order.clone());
        self.save(ORDERS_KEY, &orders).await
    }

    pub async fn save_orders(&self, orders: &[Order]) -> Result<(), CheckoutError> {
        self.save(ORDERS_KEY, &orders).await
    }

    pub async fn find_order(&self, id: Uuid) -> Result<Option<Order>, CheckoutError> {
        Ok(self.orders().await?.into_iter().find(|order| order.id == id))
    }

    pub async fn invoices(&self) -> Result<Vec<Invoice>, CheckoutError> {
        Ok(self.load(INVOICES_KEY).await?.unwrap_or_default())
    }

    pub async fn append_invoice(&self, invoice: &Invoice) -> Result<(), CheckoutError> {
        let mut invoices = self.invoices().await?;
        invoices.push(invoice.clone());
        self.save(INVOICES_KEY, &invoices).await
    }

    pub async fn find_invoice(&self, id: Uuid) -> Result<Option<Invoice>, CheckoutError> {
        Ok(self
            .invoices()
            .await?
            .into_iter()
            .find(|invoice| invoice.id == id))
    }

    pub async fn subscriptions(&self) -> Result<Vec<Subscription>, CheckoutError> {
        Ok(self.load(SUBSCRIPTIONS_KEY).await?.unwrap_or_default())
    }

    pub async fn append_subscription(
        &self,
        subscription: &Subscription,
    ) -> Result<(), CheckoutError> {
        let mut subscriptions = self.subscriptions().await?;
        subscriptions.push(subscription.clone());
        self.save(SUBSCRIPTIONS_KEY, &subscriptions).await
    }

    pub async fn save_subscriptions(
        &self,
        subscriptions: &[Subscription],
    ) -> Result<(), CheckoutError> {
        self.save(SUBSCRIPTIONS_KEY, &subscriptions).await
    }
}
