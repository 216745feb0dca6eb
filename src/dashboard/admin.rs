use crate::error::{DashboardError, DashboardResult};
use crate::models::{
    AccountStatus, ClientRequest, Payment, PropertyRecord, PropertyStatus, RequestStatus,
    Transaction, User, UserRole,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Status selector of the admin property table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(PropertyStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: PropertyStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Some(StatusFilter::All);
        }
        PropertyStatus::parse(value).map(StatusFilter::Only)
    }
}

/// Roster row for one agent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: AccountStatus,
    pub listings: usize,
}

/// Admin view over every record of the system
///
/// Owns its copy of the data so moderation decisions can be applied to it.
#[derive(Debug, Clone)]
pub struct AdminDashboard {
    properties: Vec<PropertyRecord>,
    users: Vec<User>,
    requests: Vec<ClientRequest>,
    transactions: Vec<Transaction>,
    payments: Vec<Payment>,
}

impl AdminDashboard {
    pub fn new(
        properties: Vec<PropertyRecord>,
        users: Vec<User>,
        requests: Vec<ClientRequest>,
        transactions: Vec<Transaction>,
        payments: Vec<Payment>,
    ) -> Self {
        Self {
            properties,
            users,
            requests,
            transactions,
            payments,
        }
    }

    /// Property table rows, in catalog order
    pub fn properties(&self, filter: StatusFilter) -> Vec<&PropertyRecord> {
        self.properties
            .iter()
            .filter(|p| filter.matches(p.status))
            .collect()
    }

    /// Listings waiting for a moderation decision
    pub fn review_queue(&self) -> Vec<&PropertyRecord> {
        self.properties(StatusFilter::Only(PropertyStatus::PendingReview))
    }

    pub fn agent_for(&self, property: &PropertyRecord) -> Option<&User> {
        self.users.iter().find(|u| u.id == property.agent_id)
    }

    pub fn agents(&self) -> Vec<AgentSummary> {
        self.users
            .iter()
            .filter(|u| u.role == UserRole::Agent)
            .map(|u| AgentSummary {
                id: u.id.clone(),
                name: u.name.clone(),
                email: u.email.clone(),
                status: u.status.unwrap_or(AccountStatus::Active),
                listings: self.properties.iter().filter(|p| p.agent_id == u.id).count(),
            })
            .collect()
    }

    pub fn client_requests(&self) -> &[ClientRequest] {
        &self.requests
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// Add a freshly submitted listing to the moderation queue
    pub fn receive_submission(&mut self, property: PropertyRecord) {
        info!("Listing {} received for review", property.id);
        self.properties.push(property);
    }

    pub fn receive_request(&mut self, request: ClientRequest) {
        self.requests.push(request);
    }

    pub fn approve(&mut self, property_id: &str) -> DashboardResult<&PropertyRecord> {
        self.moderate(property_id, PropertyStatus::Approved)
    }

    pub fn reject(&mut self, property_id: &str) -> DashboardResult<&PropertyRecord> {
        self.moderate(property_id, PropertyStatus::Rejected)
    }

    /// Put an approved listing on the public market
    pub fn publish(&mut self, property_id: &str) -> DashboardResult<&PropertyRecord> {
        let property = self.property_mut(property_id)?;
        if property.status != PropertyStatus::Approved {
            return Err(DashboardError::NotApproved {
                id: property.id.clone(),
                status: property.status,
            });
        }
        property.status = PropertyStatus::ForSale;
        info!("Listing {} published", property_id);
        Ok(&*property)
    }

    pub fn assign_request(
        &mut self,
        request_id: &str,
        agent_id: &str,
    ) -> DashboardResult<&ClientRequest> {
        let is_agent = self
            .users
            .iter()
            .any(|u| u.id == agent_id && u.role == UserRole::Agent);
        if !is_agent {
            return Err(DashboardError::AgentNotFound(agent_id.to_string()));
        }
        let request = self
            .requests
            .iter_mut()
            .find(|r| r.id == request_id)
            .ok_or_else(|| DashboardError::RequestNotFound(request_id.to_string()))?;
        request.assigned_agent_id = Some(agent_id.to_string());
        if request.status == RequestStatus::New {
            request.status = RequestStatus::Contacted;
        }
        info!("Request {} assigned to {}", request_id, agent_id);
        Ok(&*request)
    }

    fn moderate(
        &mut self,
        property_id: &str,
        decision: PropertyStatus,
    ) -> DashboardResult<&PropertyRecord> {
        let property = self.property_mut(property_id)?;
        if property.status != PropertyStatus::PendingReview {
            return Err(DashboardError::NotAwaitingReview {
                id: property.id.clone(),
                status: property.status,
            });
        }
        property.status = decision;
        info!("Listing {} marked {}", property_id, decision);
        Ok(&*property)
    }

    fn property_mut(&mut self, property_id: &str) -> DashboardResult<&mut PropertyRecord> {
        self.properties
            .iter_mut()
            .find(|p| p.id == property_id)
            .ok_or_else(|| DashboardError::PropertyNotFound(property_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::MockCatalog;

    fn dashboard() -> AdminDashboard {
        MockCatalog::new().admin_dashboard()
    }

    #[test]
    fn test_status_filter() {
        let admin = dashboard();
        assert_eq!(admin.properties(StatusFilter::All).len(), 8);

        let queue: Vec<_> = admin.review_queue().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(queue, vec!["prop4", "prop6"]);

        assert_eq!(StatusFilter::parse("sold"), Some(StatusFilter::Only(PropertyStatus::Sold)));
        assert_eq!(StatusFilter::parse("ALL"), Some(StatusFilter::All));
    }

    #[test]
    fn test_approve_then_publish() {
        let mut admin = dashboard();
        assert_eq!(admin.approve("prop4").unwrap().status, PropertyStatus::Approved);
        assert_eq!(admin.review_queue().len(), 1);
        assert_eq!(admin.publish("prop4").unwrap().status, PropertyStatus::ForSale);
    }

    #[test]
    fn test_only_pending_review_can_be_moderated() {
        let mut admin = dashboard();
        assert_eq!(
            admin.reject("prop1").unwrap_err(),
            DashboardError::NotAwaitingReview {
                id: "prop1".to_string(),
                status: PropertyStatus::ForSale,
            }
        );
        assert_eq!(
            admin.approve("missing").unwrap_err(),
            DashboardError::PropertyNotFound("missing".to_string())
        );

        admin.reject("prop6").unwrap();
        assert!(admin.approve("prop6").is_err());
    }

    #[test]
    fn test_agent_roster() {
        let admin = dashboard();
        let agents = admin.agents();
        let names: Vec<_> = agents.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Chidi Okoro", "Fatima Bello", "Ngozi Eze"]);
        assert_eq!(agents[0].listings, 4);
        assert_eq!(agents[2].status, AccountStatus::Suspended);

        let prop2 = admin.properties(StatusFilter::All)[1].clone();
        assert_eq!(admin.agent_for(&prop2).map(|u| u.name.as_str()), Some("Fatima Bello"));
    }

    #[test]
    fn test_assign_request() {
        let mut admin = dashboard();
        let request = admin.assign_request("req2", "user2").unwrap();
        assert_eq!(request.assigned_agent_id.as_deref(), Some("user2"));
        assert_eq!(request.status, RequestStatus::Contacted);

        assert_eq!(
            admin.assign_request("req2", "user1").unwrap_err(),
            DashboardError::AgentNotFound("user1".to_string())
        );
        assert_eq!(
            admin.assign_request("req9", "user2").unwrap_err(),
            DashboardError::RequestNotFound("req9".to_string())
        );
    }
}
