//! Listing search, lead intake and dashboards for Avian Real Estate.

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod forms;
pub mod models;
pub mod payment;
pub mod query;
pub mod sources;

pub use config::Config;
pub use models::PropertyRecord;
pub use query::{query_listings, FilterSpec, PageRequest, PageResult, SortOption};
