//! Cart state and totaling.

use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::instrument;

use crate::error::CheckoutError;
use crate::models::{
    demo_discount_codes, find_discount_code, AddItem, CartItem, DiscountCode, SelectedPlan,
};
use crate::services::notify::Notifier;
use crate::services::store::CheckoutStore;

/// Owns the line items, the optional plan selection and the applied
/// discount for one session, mirroring items and plan to the store on
/// every mutation. The applied discount lives in memory only.
pub struct CartService {
    store: CheckoutStore,
    notifier: Arc<dyn Notifier>,
    discount_table: Vec<DiscountCode>,
    items: Vec<CartItem>,
    plan: Option<SelectedPlan>,
    discount: Option<DiscountCode>,
}

impl CartService {
    /// Restore cart and plan state from the store.
    pub async fn load(
        store: CheckoutStore,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, CheckoutError> {
        let items = store.load_cart().await?;
        let plan = store.load_plan().await?;
        tracing::debug!(items = items.len(), has_plan = plan.is_some(), "cart restored");

        Ok(Self {
            store,
            notifier,
            discount_table: demo_discount_codes(),
            items,
            plan,
            discount: None,
        })
    }

    /// Replace the built-in promotion table.
    pub fn with_discount_table(mut self, table: Vec<DiscountCode>) -> Self {
        self.discount_table = table;
        self
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn plan(&self) -> Option<&SelectedPlan> {
        self.plan.as_ref()
    }

    pub fn discount(&self) -> Option<&DiscountCode> {
        self.discount.as_ref()
    }

    /// A cart with neither items nor a plan has nothing to check out.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.plan.is_none()
    }

    /// Total unit count across lines, for the cart badge.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Merge by `(id, kind)` or insert a new line.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn add_item(&mut self, input: AddItem) -> Result<(), CheckoutError> {
        let quantity = input.quantity.max(1);

        let existing = input.id.as_deref().and_then(|id| {
            self.items
                .iter()
                .position(|item| item.id == id && item.kind == input.kind)
        });

        let name = input.name.clone();
        match existing {
            Some(index) => {
                let item = &mut self.items[index];
                item.quantity += quantity;
                tracing::debug!(id = %item.id, quantity = item.quantity, "cart line merged");
            }
            None => {
                let id = input.id.clone().unwrap_or_else(|| input.generated_id());
                self.items.push(CartItem {
                    id,
                    kind: input.kind,
                    name: input.name,
                    price: input.price,
                    quantity,
                    added_at: Utc::now(),
                });
            }
        }

        self.store.save_cart(&self.items).await?;
        self.notifier.success(&format!("{} added to cart", name));
        Ok(())
    }

    /// Remove a line by id. Returns whether anything was removed.
    #[instrument(skip(self))]
    pub async fn remove_item(&mut self, item_id: &str) -> Result<bool, CheckoutError> {
        let Some(index) = self.items.iter().position(|item| item.id == item_id) else {
            return Ok(false);
        };

        let removed = self.items.remove(index);
        self.store.save_cart(&self.items).await?;
        self.notifier
            .info(&format!("{} removed from cart", removed.name));
        Ok(true)
    }

    /// Set a line's quantity; zero removes the line.
    pub async fn set_quantity(&mut self, item_id: &str, quantity: u32) -> Result<bool, CheckoutError> {
        if quantity < 1 {
            return self.remove_item(item_id).await;
        }

        let Some(item) = self.items.iter_mut().find(|item| item.id == item_id) else {
            return Ok(false);
        };

        item.quantity = quantity;
        self.store.save_cart(&self.items).await?;
        Ok(true)
    }

    /// Empty the cart: items, plan selection and applied discount.
    #[instrument(skip(self))]
    pub async fn clear(&mut self) -> Result<(), CheckoutError> {
        self.items.clear();
        self.plan = None;
        self.discount = None;
        self.store.save_cart(&self.items).await?;
        self.store.clear_plan().await?;
        self.notifier.info("Cart cleared");
        Ok(())
    }

    /// Select a subscription plan, replacing any previous selection.
    pub async fn select_plan(&mut self, plan: SelectedPlan) -> Result<(), CheckoutError> {
        self.store.save_plan(&plan).await?;
        self.notifier.success(&format!("{} plan selected", plan.name));
        self.plan = Some(plan);
        Ok(())
    }

    pub async fn remove_plan(&mut self) -> Result<(), CheckoutError> {
        self.plan = None;
        self.store.clear_plan().await?;
        self.notifier.info("Plan selection removed");
        Ok(())
    }

    /// Pre-discount sum: item lines plus the plan price.
    pub fn subtotal(&self) -> Decimal {
        let items: Decimal = self.items.iter().map(CartItem::line_total).sum();
        let plan = self
            .plan
            .as_ref()
            .map(SelectedPlan::plan_price)
            .unwrap_or(Decimal::ZERO);
        items + plan
    }

    /// Cart total with the discount applied last.
    pub fn total(&self) -> Decimal {
        let subtotal = self.subtotal();
        match &self.discount {
            Some(discount) => discount.apply(subtotal),
            None => subtotal,
        }
    }

    /// Validate a code against the table and apply it. At most one
    /// discount is active; a new code replaces the previous one.
    #[instrument(skip(self))]
    pub fn apply_discount_code(&mut self, code: &str) -> Result<(), CheckoutError> {
        let today = Utc::now().date_naive();
        let Some(discount) = find_discount_code(&self.discount_table, code, today) else {
            self.notifier.error("Invalid or expired discount code");
            return Err(CheckoutError::InvalidDiscount);
        };

        self.notifier
            .success(&format!("Discount code {} applied", discount.code));
        self.discount = Some(discount);
        Ok(())
    }

    pub fn remove_discount(&mut self) {
        self.discount = None;
        self.notifier.info("Discount code removed");
    }
}
