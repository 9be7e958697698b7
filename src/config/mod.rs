use anyhow::Result;
use dotenvy::dotenv;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Top-level configuration for the checkout engine.
#[derive(Deserialize, Clone, Debug)]
pub struct CheckoutConfig {
    pub merchant: MerchantConfig,
    pub billing: BillingConfig,
    pub gateway: GatewayConfig,
}

/// Merchant identity printed on invoices and used for EFT instructions and
/// the admin WhatsApp notification link.
#[derive(Deserialize, Clone, Debug)]
pub struct MerchantConfig {
    pub name: String,
    pub tax_number: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    /// Digits-only number for `wa.me` deep links.
    pub whatsapp_number: String,
    pub bank_accounts: Vec<BankAccount>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BankAccount {
    pub bank: String,
    pub account_name: String,
    pub iban: String,
    pub branch: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct BillingConfig {
    /// ISO currency code charged and printed on documents.
    pub currency: String,
    /// Flat tax rate in percent applied when deriving an invoice.
    pub tax_rate_percent: Decimal,
    /// Days until a derived invoice falls due.
    pub invoice_due_days: i64,
}

/// Simulated latencies of the demo payment gateways, in milliseconds.
#[derive(Deserialize, Clone, Debug)]
pub struct GatewayConfig {
    pub eft_delay_ms: u64,
    pub three_d_secure_delay_ms: u64,
    pub card_capture_delay_ms: u64,
    pub qr_delay_ms: u64,
}

impl GatewayConfig {
    /// All delays zeroed, for tests.
    pub fn zero_latency() -> Self {
        Self {
            eft_delay_ms: 0,
            three_d_secure_delay_ms: 0,
            card_capture_delay_ms: 0,
            qr_delay_ms: 0,
        }
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            merchant: MerchantConfig {
                name: "Elaldi Pazarlama Danismanlik".to_string(),
                tax_number: "1234567890".to_string(),
                address: "Ornek Mah. Ornek Cad. No:1 Istanbul".to_string(),
                phone: "+90 542 123 9770".to_string(),
                email: "billing@elaldi.example".to_string(),
                whatsapp_number: "905421239770".to_string(),
                bank_accounts: vec![
                    BankAccount {
                        bank: "Ziraat Bankasi".to_string(),
                        account_name: "ELALDI PAZARLAMA DANISMANLIK".to_string(),
                        iban: "TR00 0000 0000 0000 0000 0000 00".to_string(),
                        branch: "Merkez Sube".to_string(),
                    },
                    BankAccount {
                        bank: "Is Bankasi".to_string(),
                        account_name: "ELALDI PAZARLAMA DANISMANLIK".to_string(),
                        iban: "TR00 0000 0000 0000 0000 0000 00".to_string(),
                        branch: "Merkez Sube".to_string(),
                    },
                ],
            },
            billing: BillingConfig {
                currency: "TRY".to_string(),
                tax_rate_percent: Decimal::from(20),
                invoice_due_days: 30,
            },
            gateway: GatewayConfig {
                eft_delay_ms: 2000,
                three_d_secure_delay_ms: 1000,
                card_capture_delay_ms: 1500,
                qr_delay_ms: 1500,
            },
        }
    }
}

impl CheckoutConfig {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = env::var("CHECKOUT_MERCHANT_NAME") {
            config.merchant.name = name;
        }
        if let Ok(tax_number) = env::var("CHECKOUT_MERCHANT_TAX_NUMBER") {
            config.merchant.tax_number = tax_number;
        }
        if let Ok(address) = env::var("CHECKOUT_MERCHANT_ADDRESS") {
            config.merchant.address = address;
        }
        if let Ok(phone) = env::var("CHECKOUT_MERCHANT_PHONE") {
            config.merchant.phone = phone;
        }
        if let Ok(email) = env::var("CHECKOUT_MERCHANT_EMAIL") {
            config.merchant.email = email;
        }
        if let Ok(number) = env::var("CHECKOUT_WHATSAPP_NUMBER") {
            config.merchant.whatsapp_number = number;
        }

        if let Ok(currency) = env::var("CHECKOUT_CURRENCY") {
            config.billing.currency = currency;
        }
        if let Ok(rate) = env::var("CHECKOUT_TAX_RATE_PERCENT") {
            config.billing.tax_rate_percent = Decimal::from_str(&rate)?;
        }
        if let Ok(days) = env::var("CHECKOUT_INVOICE_DUE_DAYS") {
            config.billing.invoice_due_days = days.parse()?;
        }

        if let Ok(ms) = env::var("CHECKOUT_EFT_DELAY_MS") {
            config.gateway.eft_delay_ms = ms.parse()?;
        }
        if let Ok(ms) = env::var("CHECKOUT_3DS_DELAY_MS") {
            config.gateway.three_d_secure_delay_ms = ms.parse()?;
        }
        if let Ok(ms) = env::var("CHECKOUT_CARD_CAPTURE_DELAY_MS") {
            config.gateway.card_capture_delay_ms = ms.parse()?;
        }
        if let Ok(ms) = env::var("CHECKOUT_QR_DELAY_MS") {
            config.gateway.qr_delay_ms = ms.parse()?;
        }

        Ok(config)
    }
}
