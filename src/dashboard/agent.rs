use crate::models::{ClientRequest, PropertyRecord, PropertyStatus, RequestStatus};
use crate::query::{sort_listings, SortOption};
use serde::Serialize;

/// Headline numbers on the agent dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AgentStats {
    pub active_listings: usize,
    pub properties_sold: usize,
    pub total_revenue: i64,
    pub new_leads: usize,
}

/// An agent's own listings, newest first, with their stats
#[derive(Debug, Clone, Serialize)]
pub struct AgentDashboard {
    pub agent_id: String,
    pub listings: Vec<PropertyRecord>,
    pub stats: AgentStats,
}

impl AgentDashboard {
    pub fn build(
        agent_id: &str,
        properties: &[PropertyRecord],
        requests: &[ClientRequest],
    ) -> Self {
        let mut own: Vec<&PropertyRecord> = properties
            .iter()
            .filter(|p| p.agent_id == agent_id)
            .collect();
        sort_listings(&mut own, SortOption::NewestFirst);
        let listings: Vec<PropertyRecord> = own.into_iter().cloned().collect();

        let sold = listings.iter().filter(|p| p.status == PropertyStatus::Sold);
        let stats = AgentStats {
            active_listings: listings
                .iter()
                .filter(|p| p.status == PropertyStatus::ForSale)
                .count(),
            properties_sold: sold.clone().count(),
            total_revenue: sold.map(|p| p.price).sum(),
            new_leads: requests
                .iter()
                .filter(|r| r.assigned_agent_id.as_deref() == Some(agent_id))
                .filter(|r| r.status == RequestStatus::New)
                .count(),
        };

        Self {
            agent_id: agent_id.to_string(),
            listings,
            stats,
        }
    }
}
