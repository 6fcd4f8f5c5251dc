use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::models::{
    BillingPeriod, Package, Product, SubscriptionError, SubscriptionStatus, PRODUCT_ANNUAL, PRODUCT_MONTHLY,
};

/// Store-side purchase API the paywall talks to.
#[async_trait]
pub trait PurchasesProvider: Send + Sync {
    async fn status(&self) -> SubscriptionStatus;

    async fn offerings(&self) -> Vec<Package>;

    async fn purchase(&self, package_id: &str) -> Result<SubscriptionStatus, SubscriptionError>;

    async fn restore(&self) -> SubscriptionStatus;
}

/// Local stand-in for the store SDK. Purchases always succeed.
pub struct MockPurchasesProvider {
    packages: Vec<Package>,
    status: RwLock<SubscriptionStatus>,
}

impl MockPurchasesProvider {
    pub fn new() -> Self {
        let packages = vec![
            Package {
                identifier: "monthly".to_string(),
                period: BillingPeriod::Monthly,
                product: Product {
                    product_id: PRODUCT_MONTHLY.to_string(),
                    title: "Premium Monthly".to_string(),
                    description: "Unlimited consultations, billed monthly".to_string(),
                    price: 9.99,
                    price_string: "$9.99".to_string(),
                },
            },
            Package {
                identifier: "annual".to_string(),
                period: BillingPeriod::Annual,
                product: Product {
                    product_id: PRODUCT_ANNUAL.to_string(),
                    title: "Premium Annual".to_string(),
                    description: "Unlimited consultations, billed yearly. Save 58% vs monthly".to_string(),
                    price: 49.99,
                    price_string: "$49.99".to_string(),
                },
            },
        ];

        Self {
            packages,
            status: RwLock::new(SubscriptionStatus::default()),
        }
    }

    fn package(&self, package_id: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.identifier == package_id)
    }
}

impl Default for MockPurchasesProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PurchasesProvider for MockPurchasesProvider {
    async fn status(&self) -> SubscriptionStatus {
        self.status.read().await.clone()
    }

    async fn offerings(&self) -> Vec<Package> {
        self.packages.clone()
    }

    async fn purchase(&self, package_id: &str) -> Result<SubscriptionStatus, SubscriptionError> {
        let package = self.package(package_id).ok_or_else(|| {
            warn!("Purchase attempted for unknown package {}", package_id);
            SubscriptionError::UnknownPackage(package_id.to_string())
        })?;

        let expiration = Utc::now()
            .checked_add_months(package.period.months())
            .ok_or_else(|| SubscriptionError::ExpirationOutOfRange(package_id.to_string()))?;

        let status = SubscriptionStatus::premium(&package.product.product_id, expiration);
        *self.status.write().await = status.clone();

        info!("Purchased {} (expires {})", package.product.product_id, expiration);
        Ok(status)
    }

    async fn restore(&self) -> SubscriptionStatus {
        let mut status = self.status.write().await;

        if status.is_premium && !status.is_active_at(Utc::now()) {
            debug!("Restored subscription has lapsed");
            *status = SubscriptionStatus::default();
        }

        status.clone()
    }
}
