//! Invoice derivation and the printable document.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::CheckoutConfig;
use crate::error::CheckoutError;
use crate::models::{DiscountLine, Invoice, InvoiceStatus, Order};
use crate::services::store::CheckoutStore;
use crate::util::format_money;

/// Derive an invoice from a completed order and persist it.
///
/// The flat tax applies to the post-discount total; the due date is the
/// issue date plus the configured number of days.
pub async fn generate(
    store: &CheckoutStore,
    config: &CheckoutConfig,
    order: &Order,
) -> Result<Invoice, CheckoutError> {
    let issue_date = Utc::now();
    let tax_rate = config.billing.tax_rate_percent;
    let tax_amount = order.total * tax_rate / Decimal::from(100);

    let discount = order.discount.as_ref().map(|code| DiscountLine {
        code: code.code.clone(),
        amount: order.subtotal - order.total,
    });

    let invoice = Invoice {
        id: Uuid::new_v4(),
        order_id: order.id,
        customer: order.customer.clone(),
        items: order.items.clone(),
        plan: order.plan.clone(),
        subtotal: order.subtotal,
        discount,
        total: order.total,
        tax_rate_percent: tax_rate,
        tax_amount,
        grand_total: order.total + tax_amount,
        issue_date,
        due_date: issue_date + Duration::days(config.billing.invoice_due_days),
        status: InvoiceStatus::Pending,
    };

    store.append_invoice(&invoice).await?;
    tracing::info!(
        invoice_id = %invoice.id,
        order_id = %order.id,
        grand_total = %invoice.grand_total,
        "invoice generated"
    );
    Ok(invoice)
}

/// Self-contained printable HTML document for an invoice. The embedding
/// layer opens and prints it; nothing is written to disk here.
pub fn render_html(invoice: &Invoice, config: &CheckoutConfig) -> String {
    let currency = &config.billing.currency;
    let merchant = &config.merchant;

    let mut rows = String::new();
    for item in &invoice.items {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            item.name,
            item.price,
            item.quantity,
            format_money(item.line_total(), currency),
        ));
    }
    if let Some(plan) = &invoice.plan {
        rows.push_str(&format!(
            "<tr><td>{} plan</td><td>{}</td><td>1</td><td>{}</td></tr>\n",
            plan.name,
            plan.price,
            format_money(plan.plan_price(), currency),
        ));
    }

    let discount_row = invoice
        .discount
        .as_ref()
        .map(|line| {
            format!(
                "<p>Discount ({}): -{}</p>\n",
                line.code,
                format_money(line.amount, currency)
            )
        })
        .unwrap_or_default();

    let bank_line = merchant
        .bank_accounts
        .first()
        .map(|account| format!("<p>EFT/wire transfers: {} {}</p>", account.bank, account.iban))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>Invoice {id}</title>
<style>
body {{ font-family: Arial, sans-serif; margin: 40px; }}
.invoice {{ border: 1px solid #ddd; padding: 30px; max-width: 800px; margin: 0 auto; }}
.header {{ display: flex; justify-content: space-between; margin-bottom: 30px; }}
table {{ width: 100%; border-collapse: collapse; margin: 20px 0; }}
th, td {{ padding: 12px; border: 1px solid #ddd; text-align: left; }}
th {{ background-color: #f5f5f5; }}
.totals {{ text-align: right; margin-top: 30px; }}
.footer {{ margin-top: 50px; font-size: 12px; color: #666; text-align: center; }}
@media print {{ body {{ margin: 0; }} }}
</style>
</head>
<body>
<div class="invoice">
<div class="header">
<div class="company-info">
<h2>{merchant_name}</h2>
<p>Tax no: {merchant_tax}</p>
<p>{merchant_address}</p>
<p>Tel: {merchant_phone}</p>
<p>E-mail: {merchant_email}</p>
</div>
<div class="invoice-info">
<h3>INVOICE</h3>
<p>Invoice no: {id}</p>
<p>Date: {issue_date}</p>
<p>Due: {due_date}</p>
</div>
</div>
<div class="details">
<h4>CUSTOMER</h4>
<p><strong>{customer_name}</strong></p>
<p>{customer_company}</p>
<p>Tax no: {customer_tax}</p>
<p>E-mail: {customer_email}</p>
</div>
<table>
<thead><tr><th>Item</th><th>Unit price</th><th>Qty</th><th>Amount</th></tr></thead>
<tbody>
{rows}</tbody>
</table>
<div class="totals">
<p>Subtotal: {subtotal}</p>
{discount_row}<p>Tax ({tax_rate}%): {tax_amount}</p>
<h3>GRAND TOTAL: {grand_total}</h3>
</div>
<div class="footer">
<p>This document is an electronic invoice; no stamp or signature is required.</p>
{bank_line}
</div>
</div>
</body>
</html>
"#,
        id = invoice.id,
        merchant_name = merchant.name,
        merchant_tax = merchant.tax_number,
        merchant_address = merchant.address,
        merchant_phone = merchant.phone,
        merchant_email = merchant.email,
        issue_date = invoice.issue_date.format("%d.%m.%Y"),
        due_date = invoice.due_date.format("%d.%m.%Y"),
        customer_name = invoice.customer.name,
        customer_company = invoice.customer.company,
        customer_tax = invoice.customer.tax_number,
        customer_email = invoice.customer.email,
        rows = rows,
        subtotal = format_money(invoice.subtotal, currency),
        discount_row = discount_row,
        tax_rate = invoice.tax_rate_percent,
        tax_amount = format_money(invoice.tax_amount, currency),
        grand_total = format_money(invoice.grand_total, currency),
        bank_line = bank_line,
    )
}
