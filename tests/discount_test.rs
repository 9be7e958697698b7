//! Discount application rules against the cart total.

mod common;

use chrono::NaiveDate;
use common::{service_item, setup};
use rust_decimal::Decimal;

use checkout_core::models::{DiscountCode, DiscountKind};
use checkout_core::CheckoutError;

#[tokio::test]
async fn percentage_below_minimum_is_a_noop() {
    let mut ctx = setup().await;

    // ELALDI10 requires a 100 minimum.
    ctx.cart
        .add_item(service_item("starter", "Starter", "₺99"))
        .await
        .unwrap();
    ctx.cart.apply_discount_code("ELALDI10").unwrap();

    assert_eq!(ctx.cart.total(), Decimal::from(99));
}

#[tokio::test]
async fn percentage_applies_from_the_minimum() {
    let mut ctx = setup().await;

    ctx.cart
        .add_item(service_item("growth", "Growth", "₺500"))
        .await
        .unwrap();
    ctx.cart.apply_discount_code("ELALDI10").unwrap();

    assert_eq!(ctx.cart.total(), Decimal::from(450));
}

#[tokio::test]
async fn fixed_discount_clamps_at_zero() {
    let mut ctx = setup().await;

    ctx.cart
        .add_item(service_item("mini", "Mini", "₺30"))
        .await
        .unwrap();
    ctx.cart.apply_discount_code("WELCOME50").unwrap();

    assert_eq!(ctx.cart.total(), Decimal::ZERO);
}

#[tokio::test]
async fn unknown_code_is_rejected() {
    let mut ctx = setup().await;

    ctx.cart
        .add_item(service_item("growth", "Growth", "₺500"))
        .await
        .unwrap();

    let result = ctx.cart.apply_discount_code("NOPE");
    assert!(matches!(result, Err(CheckoutError::InvalidDiscount)));
    assert_eq!(ctx.cart.total(), Decimal::from(500));
}

#[tokio::test]
async fn expired_code_is_rejected() {
    let ctx = setup().await;
    let mut cart = ctx.cart.with_discount_table(vec![DiscountCode {
        code: "OLDPROMO".to_string(),
        kind: DiscountKind::Percentage,
        value: Decimal::from(10),
        min_amount: None,
        expires: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
    }]);

    cart.add_item(service_item("growth", "Growth", "₺500"))
        .await
        .unwrap();

    let result = cart.apply_discount_code("OLDPROMO");
    assert!(matches!(result, Err(CheckoutError::InvalidDiscount)));
}

#[tokio::test]
async fn fixed_code_with_minimum_is_gated_too() {
    let ctx = setup().await;
    let mut cart = ctx.cart.with_discount_table(vec![DiscountCode {
        code: "BIGSPEND".to_string(),
        kind: DiscountKind::Fixed,
        value: Decimal::from(50),
        min_amount: Some(Decimal::from(200)),
        expires: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
    }]);

    cart.add_item(service_item("starter", "Starter", "₺100"))
        .await
        .unwrap();
    cart.apply_discount_code("BIGSPEND").unwrap();

    assert_eq!(cart.total(), Decimal::from(100));

    cart.set_quantity("starter", 2).await.unwrap();
    assert_eq!(cart.total(), Decimal::from(150));
}

#[tokio::test]
async fn a_new_code_replaces_the_previous_one() {
    let mut ctx = setup().await;

    ctx.cart
        .add_item(service_item("growth", "Growth", "₺500"))
        .await
        .unwrap();

    ctx.cart.apply_discount_code("ELALDI20").unwrap();
    assert_eq!(ctx.cart.total(), Decimal::from(400));

    ctx.cart.apply_discount_code("WELCOME50").unwrap();
    assert_eq!(ctx.cart.total(), Decimal::from(450));
}

#[tokio::test]
async fn remove_discount_restores_the_total() {
    let mut ctx = setup().await;

    ctx.cart
        .add_item(service_item("growth", "Growth", "₺500"))
        .await
        .unwrap();
    ctx.cart.apply_discount_code("WELCOME50").unwrap();
    assert_eq!(ctx.cart.total(), Decimal::from(450));

    ctx.cart.remove_discount();
    assert_eq!(ctx.cart.total(), Decimal::from(500));
}
