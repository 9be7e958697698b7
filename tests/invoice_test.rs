//! Invoice derivation and rendering tests.

mod common;

use chrono::Duration;
use common::{eft_request, service_item, setup};
use rust_decimal::Decimal;

use checkout_core::models::InvoiceStatus;

#[tokio::test]
async fn invoice_applies_flat_tax_and_due_date() {
    let mut ctx = setup().await;

    ctx.cart
        .add_item(service_item("growth", "Growth", "₺500"))
        .await
        .unwrap();
    ctx.cart.apply_discount_code("WELCOME50").unwrap();

    let mut request = eft_request();
    request.need_invoice = true;

    let success = ctx
        .checkout
        .process(&mut ctx.cart, request)
        .await
        .unwrap();
    let invoice = success.invoice.expect("invoice should be derived");

    assert_eq!(invoice.order_id, success.order.id);
    assert_eq!(invoice.subtotal, Decimal::from(500));
    assert_eq!(invoice.total, Decimal::from(450));
    assert_eq!(invoice.discount.as_ref().unwrap().amount, Decimal::from(50));
    // 20 % flat tax on the post-discount total.
    assert_eq!(invoice.tax_amount, Decimal::from(90));
    assert_eq!(invoice.grand_total, Decimal::from(540));
    assert_eq!(invoice.due_date - invoice.issue_date, Duration::days(30));
    assert_eq!(invoice.status, InvoiceStatus::Pending);
}

#[tokio::test]
async fn invoice_is_only_derived_on_request() {
    let mut ctx = setup().await;

    ctx.cart
        .add_item(service_item("growth", "Growth", "₺500"))
        .await
        .unwrap();

    let success = ctx
        .checkout
        .process(&mut ctx.cart, eft_request())
        .await
        .unwrap();

    assert!(success.invoice.is_none());
    assert!(ctx.store.invoices().await.unwrap().is_empty());
}

#[tokio::test]
async fn invoice_is_persisted_and_retrievable() {
    let mut ctx = setup().await;

    ctx.cart
        .add_item(service_item("growth", "Growth", "₺500"))
        .await
        .unwrap();

    let mut request = eft_request();
    request.need_invoice = true;

    let success = ctx
        .checkout
        .process(&mut ctx.cart, request)
        .await
        .unwrap();
    let invoice = success.invoice.unwrap();

    let found = ctx.checkout.invoice(invoice.id).await.unwrap();
    assert!(found.is_some());
}

#[tokio::test]
async fn printable_document_carries_parties_and_totals() {
    let mut ctx = setup().await;

    ctx.cart
        .add_item(service_item("growth", "Growth", "₺500"))
        .await
        .unwrap();

    let mut request = eft_request();
    request.need_invoice = true;

    let success = ctx
        .checkout
        .process(&mut ctx.cart, request)
        .await
        .unwrap();
    let invoice = success.invoice.unwrap();

    let html = ctx.checkout.render_invoice_html(&invoice);
    assert!(html.contains(&ctx.checkout.config().merchant.name));
    assert!(html.contains("Demo Customer"));
    assert!(html.contains("Growth"));
    assert!(html.contains("600.00 TRY")); // 500 + 20 % tax
    assert!(html.contains(&invoice.id.to_string()));
}
