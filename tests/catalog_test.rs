//! Payment method catalog tests.

use checkout_core::config::CheckoutConfig;
use checkout_core::models::{payment_method_catalog, PaymentMethodKind};

#[test]
fn catalog_offers_the_three_methods() {
    let config = CheckoutConfig::default();
    let catalog = payment_method_catalog(&config);

    let kinds: Vec<PaymentMethodKind> = catalog.iter().map(|method| method.kind).collect();
    assert_eq!(
        kinds,
        vec![
            PaymentMethodKind::Eft,
            PaymentMethodKind::CreditCard,
            PaymentMethodKind::Qr
        ]
    );
}

#[test]
fn eft_entry_carries_the_merchant_bank_accounts() {
    let config = CheckoutConfig::default();
    let catalog = payment_method_catalog(&config);

    let eft = catalog
        .iter()
        .find(|method| method.kind == PaymentMethodKind::Eft)
        .unwrap();
    assert_eq!(eft.bank_accounts.len(), config.merchant.bank_accounts.len());
    assert!(!eft.bank_accounts.is_empty());
}

#[test]
fn method_ids_round_trip_and_unknown_ids_fail() {
    for kind in [
        PaymentMethodKind::Eft,
        PaymentMethodKind::CreditCard,
        PaymentMethodKind::Qr,
    ] {
        assert_eq!(PaymentMethodKind::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(PaymentMethodKind::parse("bitcoin"), None);
}
