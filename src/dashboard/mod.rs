pub mod admin;
pub mod agent;

pub use admin::{AdminDashboard, AgentSummary, StatusFilter};
pub use agent::{AgentDashboard, AgentStats};

use crate::error::{DashboardError, DashboardResult};
use serde::{Deserialize, Serialize};

/// Who is looking at the site
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Public,
    Agent(String),
    Admin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Agent id when signed in as an agent
    pub fn agent_id(&self) -> Option<&str> {
        match self {
            Role::Agent(id) => Some(id),
            _ => None,
        }
    }

    pub fn require_admin(&self) -> DashboardResult<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(DashboardError::Forbidden)
        }
    }

    pub fn require_agent(&self) -> DashboardResult<&str> {
        self.agent_id().ok_or(DashboardError::Forbidden)
    }
}
