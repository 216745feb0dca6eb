use crate::dashboard::AdminDashboard;
use crate::models::{ClientRequest, Payment, PropertyRecord, Transaction, User};
use crate::sources::traits::ListingSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

/// Number of listings promoted on the home page
pub const FEATURED_COUNT: usize = 3;

const CATALOG_JSON: &str = include_str!("catalog.json");

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogFile {
    properties: Vec<PropertyRecord>,
    users: Vec<User>,
    client_requests: Vec<ClientRequest>,
    transactions: Vec<Transaction>,
    payments: Vec<Payment>,
}

/// Bundled demo dataset (Lagos and Abuja luxury listings, staff, leads and
/// payments) served as an in-memory listing source
#[derive(Debug, Clone)]
pub struct MockCatalog {
    data: CatalogFile,
    delay: Duration,
}

impl MockCatalog {
    /// Load the bundled catalog with no simulated latency
    pub fn try_new() -> Result<Self> {
        let data: CatalogFile =
            serde_json::from_str(CATALOG_JSON).context("Failed to parse bundled catalog")?;
        debug!(
            "Loaded catalog: {} properties, {} users",
            data.properties.len(),
            data.users.len()
        );
        Ok(Self {
            data,
            delay: Duration::ZERO,
        })
    }

    pub fn new() -> Self {
        Self::try_new().expect("Bundled catalog must parse")
    }

    /// Pause this long before answering `fetch_listings`
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn properties(&self) -> &[PropertyRecord] {
        &self.data.properties
    }

    pub fn users(&self) -> &[User] {
        &self.data.users
    }

    pub fn client_requests(&self) -> &[ClientRequest] {
        &self.data.client_requests
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.data.transactions
    }

    pub fn payments(&self) -> &[Payment] {
        &self.data.payments
    }

    pub fn property(&self, id: &str) -> Option<&PropertyRecord> {
        self.data.properties.iter().find(|p| p.id == id)
    }

    /// Listing agent of a property
    pub fn agent_for(&self, property: &PropertyRecord) -> Option<&User> {
        self.data.users.iter().find(|u| u.id == property.agent_id)
    }

    /// Home page highlights: the first few catalog entries
    pub fn featured(&self) -> &[PropertyRecord] {
        let end = FEATURED_COUNT.min(self.data.properties.len());
        &self.data.properties[..end]
    }

    pub fn admin_dashboard(&self) -> AdminDashboard {
        AdminDashboard::new(
            self.data.properties.clone(),
            self.data.users.clone(),
            self.data.client_requests.clone(),
            self.data.transactions.clone(),
            self.data.payments.clone(),
        )
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListingSource for MockCatalog {
    async fn fetch_listings(&self) -> Result<Vec<PropertyRecord>> {
        if !self.delay.is_zero() {
            info!("Simulating {}ms catalog latency", self.delay.as_millis());
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.data.properties.clone())
    }

    fn source_name(&self) -> &'static str {
        "Mock catalog"
    }
}
