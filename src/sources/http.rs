use crate::forms::{AgentApplication, ClientRequestSubmission, ContactMessage};
use crate::models::{Payment, PropertyRecord};
use crate::sources::traits::{LeadSink, ListingSource};
use crate::sources::types::SubmissionReceipt;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

const USER_AGENT: &str = concat!("avian-listings/", env!("CARGO_PKG_VERSION"));

fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to create HTTP client")
}

fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Listing source backed by a JSON API (`GET {base}/listings`)
pub struct HttpListingSource {
    client: Client,
    base_url: String,
}

impl HttpListingSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.into(),
        })
    }

    pub fn listings_url(&self) -> String {
        join_url(&self.base_url, "listings")
    }
}

#[async_trait]
impl ListingSource for HttpListingSource {
    async fn fetch_listings(&self) -> Result<Vec<PropertyRecord>> {
        let url = self.listings_url();
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch listings")?;

        if !response.status().is_success() {
            warn!("Listings API returned status: {}", response.status());
            anyhow::bail!("Failed to fetch listings: {}", response.status());
        }

        let listings: Vec<PropertyRecord> = response
            .json()
            .await
            .context("Failed to decode listings response")?;
        info!("Fetched {} listings from {}", listings.len(), self.base_url);
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "Listings API"
    }
}

/// Lead sink that POSTs JSON to a backend and expects a receipt back
pub struct HttpLeadSink {
    client: Client,
    base_url: String,
}

impl HttpLeadSink {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.into(),
        })
    }

    pub fn endpoint(&self, kind: &str) -> String {
        join_url(&self.base_url, &format!("leads/{}", kind))
    }

    async fn post<T: Serialize + Sync>(&self, kind: &str, body: &T) -> Result<SubmissionReceipt> {
        let url = self.endpoint(kind);
        debug!("Posting to {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to submit {}", kind))?;

        if !response.status().is_success() {
            warn!("Lead API returned status: {}", response.status());
            anyhow::bail!("Submission of {} was refused: {}", kind, response.status());
        }

        let receipt: SubmissionReceipt = response
            .json()
            .await
            .context("Failed to decode submission receipt")?;
        info!("Submitted {} as {}", kind, receipt.reference);
        Ok(receipt)
    }
}

#[async_trait]
impl LeadSink for HttpLeadSink {
    async fn submit_client_request(
        &self,
        request: &ClientRequestSubmission,
    ) -> Result<SubmissionReceipt> {
        self.post("client-requests", request).await
    }

    async fn submit_agent_application(
        &self,
        application: &AgentApplication,
    ) -> Result<SubmissionReceipt> {
        self.post("agent-applications", application).await
    }

    async fn submit_contact_message(&self, message: &ContactMessage) -> Result<SubmissionReceipt> {
        self.post("contact-messages", message).await
    }

    async fn submit_property(&self, property: &PropertyRecord) -> Result<SubmissionReceipt> {
        self.post("properties", property).await
    }

    async fn record_payment(&self, payment: &Payment) -> Result<SubmissionReceipt> {
        self.post("payments", payment).await
    }

    fn sink_name(&self) -> &'static str {
        "Lead API"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_ignore_trailing_slash() {
        let source =
            HttpListingSource::new("https://api.example.com/", Duration::from_secs(5)).unwrap();
        assert_eq!(source.listings_url(), "https://api.example.com/listings");

        let sink = HttpLeadSink::new("https://api.example.com", Duration::from_secs(5)).unwrap();
        assert_eq!(sink.endpoint("payments"), "https://api.example.com/leads/payments");
        assert_eq!(source.source_name(), "Listings API");
    }
}
