use crate::forms::{AgentApplication, ClientRequestSubmission, ContactMessage};
use crate::models::{Payment, PropertyRecord};
use crate::sources::types::SubmissionReceipt;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for everything that can supply the listing collection
/// Lets the CLI switch between the bundled catalog and a remote API
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch the full, unfiltered listing collection
    async fn fetch_listings(&self) -> Result<Vec<PropertyRecord>>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}

/// Receiver of leads and intake submissions
#[async_trait]
pub trait LeadSink: Send + Sync {
    async fn submit_client_request(
        &self,
        request: &ClientRequestSubmission,
    ) -> Result<SubmissionReceipt>;

    async fn submit_agent_application(
        &self,
        application: &AgentApplication,
    ) -> Result<SubmissionReceipt>;

    async fn submit_contact_message(&self, message: &ContactMessage) -> Result<SubmissionReceipt>;

    /// Hand a new listing to moderation
    async fn submit_property(&self, property: &PropertyRecord) -> Result<SubmissionReceipt>;

    async fn record_payment(&self, payment: &Payment) -> Result<SubmissionReceipt>;

    /// Get the name of the lead sink
    fn sink_name(&self) -> &'static str;
}
