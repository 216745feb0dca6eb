pub mod http;
pub mod memory;
pub mod mock;
pub mod traits;
pub mod types;

pub use http::{HttpLeadSink, HttpListingSource};
pub use memory::InMemoryLeadSink;
pub use mock::MockCatalog;
pub use traits::{LeadSink, ListingSource};
pub use types::SubmissionReceipt;

use crate::config::Config;
use anyhow::Result;

/// Listings API when one is configured, the bundled catalog otherwise
pub fn listing_source(config: &Config, catalog: &MockCatalog) -> Result<Box<dyn ListingSource>> {
    Ok(match &config.listings_url {
        Some(url) => Box::new(HttpListingSource::new(url.clone(), config.http_timeout)?),
        None => Box::new(catalog.clone()),
    })
}

/// Lead API when one is configured, an in-memory inbox otherwise
pub fn lead_sink(config: &Config) -> Result<Box<dyn LeadSink>> {
    Ok(match &config.leads_url {
        Some(url) => Box::new(HttpLeadSink::new(url.clone(), config.http_timeout)?),
        None => Box::new(InMemoryLeadSink::new()),
    })
}
