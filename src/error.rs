//! # Domain Errors

use crate::models::PropertyStatus;
use thiserror::Error;

/// Result type for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Admin and agent dashboard errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("Property not found: {0}")]
    PropertyNotFound(String),

    #[error("Agent not found: {0}")]
    AgentNotFound(String),

    #[error("Client request not found: {0}")]
    RequestNotFound(String),

    // Moderation
    #[error("Property {id} is {status}, only listings pending review can be moderated")]
    NotAwaitingReview { id: String, status: PropertyStatus },

    #[error("Property {id} is {status}, only approved listings can be published")]
    NotApproved { id: String, status: PropertyStatus },

    #[error("Role does not grant access to this dashboard")]
    Forbidden,
}

/// Mobilization fee payment errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error("Select a payment method before paying")]
    MethodNotSelected,

    #[error("Payment was already completed")]
    AlreadyPaid,

    #[error("Payment could not be recorded: {0}")]
    Rejected(String),
}
