use crate::forms::{AgentApplication, ClientRequestSubmission, ContactMessage};
use crate::models::{ClientRequest, Payment, PropertyRecord};
use crate::sources::traits::LeadSink;
use crate::sources::types::SubmissionReceipt;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::info;

#[derive(Debug, Default)]
struct Inbox {
    requests: Vec<ClientRequest>,
    applications: Vec<AgentApplication>,
    messages: Vec<ContactMessage>,
    properties: Vec<PropertyRecord>,
    payments: Vec<Payment>,
}

/// Lead sink that keeps everything in process memory
///
/// Used offline and in tests in place of a backend.
#[derive(Debug, Default)]
pub struct InMemoryLeadSink {
    inbox: Mutex<Inbox>,
    next_id: AtomicU64,
}

impl InMemoryLeadSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn receipt(&self, prefix: &str) -> SubmissionReceipt {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        SubmissionReceipt::new(format!("{}-{}", prefix, n))
    }

    pub async fn client_requests(&self) -> Vec<ClientRequest> {
        self.inbox.lock().await.requests.clone()
    }

    pub async fn agent_applications(&self) -> Vec<AgentApplication> {
        self.inbox.lock().await.applications.clone()
    }

    pub async fn contact_messages(&self) -> Vec<ContactMessage> {
        self.inbox.lock().await.messages.clone()
    }

    pub async fn properties(&self) -> Vec<PropertyRecord> {
        self.inbox.lock().await.properties.clone()
    }

    pub async fn payments(&self) -> Vec<Payment> {
        self.inbox.lock().await.payments.clone()
    }
}

#[async_trait]
impl LeadSink for InMemoryLeadSink {
    async fn submit_client_request(
        &self,
        request: &ClientRequestSubmission,
    ) -> Result<SubmissionReceipt> {
        let receipt = self.receipt("req");
        let record = request
            .clone()
            .into_request(receipt.reference.clone(), receipt.received_at);
        info!("Client request {} stored for {}", record.id, record.client_name);
        self.inbox.lock().await.requests.push(record);
        Ok(receipt)
    }

    async fn submit_agent_application(
        &self,
        application: &AgentApplication,
    ) -> Result<SubmissionReceipt> {
        let receipt = self.receipt("app");
        info!("Agent application {} stored for {}", receipt.reference, application.agency_name);
        self.inbox.lock().await.applications.push(application.clone());
        Ok(receipt)
    }

    async fn submit_contact_message(&self, message: &ContactMessage) -> Result<SubmissionReceipt> {
        let receipt = self.receipt("msg");
        info!("Contact message {} stored from {}", receipt.reference, message.email);
        self.inbox.lock().await.messages.push(message.clone());
        Ok(receipt)
    }

    async fn submit_property(&self, property: &PropertyRecord) -> Result<SubmissionReceipt> {
        let receipt = SubmissionReceipt::new(property.id.clone());
        info!("Listing {} stored for review", property.id);
        self.inbox.lock().await.properties.push(property.clone());
        Ok(receipt)
    }

    async fn record_payment(&self, payment: &Payment) -> Result<SubmissionReceipt> {
        let receipt = self.receipt("pay");
        let stored = Payment {
            id: receipt.reference.clone(),
            payment_date: receipt.received_at,
            ..payment.clone()
        };
        info!("Payment {} of ₦{} stored", stored.id, stored.amount);
        self.inbox.lock().await.payments.push(stored);
        Ok(receipt)
    }

    fn sink_name(&self) -> &'static str {
        "In-memory inbox"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PropertyType, RequestStatus};

    fn submission() -> ClientRequestSubmission {
        ClientRequestSubmission {
            full_name: "Chief Okonjo".to_string(),
            occupation: None,
            address: None,
            phone: "0800".to_string(),
            email: "okonjo@example.com".to_string(),
            property_type: PropertyType::Villa,
            preferred_location: "Lekki Phase 1".to_string(),
            land_size: None,
            building_type: None,
            budget_min: 1_500_000_000,
            budget_max: 2_000_000_000,
        }
    }

    #[tokio::test]
    async fn test_requests_get_sequential_references() {
        let sink = InMemoryLeadSink::new();
        let first = sink.submit_client_request(&submission()).await.unwrap();
        let second = sink.submit_client_request(&submission()).await.unwrap();

        assert_eq!(first.reference, "req-1");
        assert_eq!(second.reference, "req-2");

        let stored = sink.client_requests().await;
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].id, "req-1");
        assert_eq!(stored[0].status, RequestStatus::New);
    }

    #[tokio::test]
    async fn test_applications_are_kept() {
        let sink = InMemoryLeadSink::new();
        let application = AgentApplication {
            full_name: "Chidi Okoro".to_string(),
            agency_name: "Okoro Properties Ltd.".to_string(),
            phone: "0801".to_string(),
            email: "chidi@okoroproperties.com".to_string(),
            cac_number: Some("RC123456".to_string()),
        };

        sink.submit_agent_application(&application).await.unwrap();
        assert_eq!(sink.agent_applications().await, vec![application]);
    }

    #[tokio::test]
    async fn test_contact_messages_are_kept() {
        let sink = InMemoryLeadSink::new();
        let message = ContactMessage {
            name: "Adebisi Adebayo".to_string(),
            email: "adebisi@example.com".to_string(),
            phone: None,
            subject: "Inspection".to_string(),
            message: "I would like to schedule an inspection.".to_string(),
        };

        let receipt = sink.submit_contact_message(&message).await.unwrap();
        assert_eq!(receipt.reference, "msg-1");
        assert_eq!(sink.contact_messages().await, vec![message]);
        assert_eq!(sink.sink_name(), "In-memory inbox");
    }
}
