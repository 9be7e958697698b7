//! Subscription lifecycle: start from an order, list, cancel.

use chrono::{DateTime, Months, Utc};
use uuid::Uuid;

use crate::error::CheckoutError;
use crate::models::{BillingPeriod, Order, Subscription, SubscriptionStatus};
use crate::services::notify::Notifier;
use crate::services::store::CheckoutStore;

/// End of one billing period starting at `from`. Saturates at `from` on
/// calendar overflow.
pub fn period_end(from: DateTime<Utc>, period: BillingPeriod) -> DateTime<Utc> {
    from.checked_add_months(Months::new(period.months()))
        .unwrap_or(from)
}

/// Start a subscription from an order that carried a plan and persist it.
pub async fn start(
    store: &CheckoutStore,
    notifier: &dyn Notifier,
    order: &Order,
) -> Result<Subscription, CheckoutError> {
    let Some(plan) = order.plan.clone() else {
        return Err(CheckoutError::InvalidRequest(
            "Order has no subscription plan".to_string(),
        ));
    };

    let start_date = Utc::now();
    let end_date = period_end(start_date, plan.billing_period);

    let subscription = Subscription {
        id: Uuid::new_v4(),
        order_id: order.id,
        customer: order.customer.clone(),
        start_date,
        end_date,
        next_billing_date: end_date,
        status: SubscriptionStatus::Active,
        auto_renew: true,
        payment_method: order.payment.method,
        cancelled_at: None,
        plan,
    };

    store.append_subscription(&subscription).await?;
    tracing::info!(
        subscription_id = %subscription.id,
        order_id = %order.id,
        plan = %subscription.plan.name,
        period = subscription.plan.billing_period.as_str(),
        "subscription started"
    );
    notifier.success("Your subscription has started");

    Ok(subscription)
}

/// Cancel a subscription by id. Returns whether it existed.
pub async fn cancel(
    store: &CheckoutStore,
    notifier: &dyn Notifier,
    id: Uuid,
) -> Result<bool, CheckoutError> {
    let mut subscriptions = store.subscriptions().await?;
    let Some(subscription) = subscriptions.iter_mut().find(|sub| sub.id == id) else {
        return Ok(false);
    };

    subscription.status = SubscriptionStatus::Cancelled;
    subscription.cancelled_at = Some(Utc::now());
    store.save_subscriptions(&subscriptions).await?;

    tracing::info!(subscription_id = %id, "subscription cancelled");
    notifier.success("Your subscription has been cancelled");
    Ok(true)
}
