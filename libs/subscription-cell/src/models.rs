use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const PRODUCT_MONTHLY: &str = "telehealth_premium_monthly";
pub const PRODUCT_ANNUAL: &str = "telehealth_premium_annual";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionStatus {
    pub is_premium: bool,
    pub expiration_date: Option<DateTime<Utc>>,
    pub product_id: Option<String>,
}

impl SubscriptionStatus {
    /// Premium entitlement for `product_id` running until `expiration_date`.
    pub fn premium(product_id: &str, expiration_date: DateTime<Utc>) -> Self {
        Self {
            is_premium: true,
            expiration_date: Some(expiration_date),
            product_id: Some(product_id.to_string()),
        }
    }

    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.is_premium && self.expiration_date.is_some_and(|expires| expires > now)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BillingPeriod {
    Monthly,
    Annual,
}

impl BillingPeriod {
    pub fn months(self) -> Months {
        match self {
            BillingPeriod::Monthly => Months::new(1),
            BillingPeriod::Annual => Months::new(12),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub product_id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub price_string: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Package {
    pub identifier: String,
    pub period: BillingPeriod,
    pub product: Product,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseRequest {
    pub package_id: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubscriptionError {
    #[error("Unknown package: {0}")]
    UnknownPackage(String),

    #[error("Could not compute expiration for package {0}")]
    ExpirationOutOfRange(String),
}
