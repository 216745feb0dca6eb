//! Listing query pipeline: filter, then sort, then paginate.
//!
//! Everything here is a pure function of its inputs. The source collection is
//! borrowed and never reordered in place.

pub mod controls;
pub mod types;

pub use controls::{page_controls, PageControl, PaginationControls};
pub use types::{FilterSpec, PageRequest, PageResult, SortOption, TypeFilter, PAGE_SIZE};

use crate::models::{PropertyRecord, PropertyStatus};

/// Run a listing search and return the requested page
pub fn query_listings(
    records: &[PropertyRecord],
    filter: &FilterSpec,
    sort: SortOption,
    page: PageRequest,
) -> PageResult {
    let mut matches = filter_listings(records, filter);
    sort_listings(&mut matches, sort);
    paginate(matches, page)
}

pub fn filter_listings<'a>(
    records: &'a [PropertyRecord],
    filter: &FilterSpec,
) -> Vec<&'a PropertyRecord> {
    records.iter().filter(|p| filter.matches(p)).collect()
}

/// Stable sort, so equal keys keep their incoming order
pub fn sort_listings(records: &mut [&PropertyRecord], sort: SortOption) {
    match sort {
        SortOption::NewestFirst => records.sort_by(|a, b| b.date_added.cmp(&a.date_added)),
        SortOption::PriceAscending => records.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOption::PriceDescending => records.sort_by(|a, b| b.price.cmp(&a.price)),
    }
}

fn paginate(sorted: Vec<&PropertyRecord>, request: PageRequest) -> PageResult {
    let total_count = sorted.len();
    let total_pages = total_pages(total_count, request.page_size);

    let records = match request.page.checked_sub(1) {
        Some(index) if request.page_size > 0 => sorted
            .into_iter()
            .skip(index.saturating_mul(request.page_size))
            .take(request.page_size)
            .cloned()
            .collect(),
        _ => Vec::new(),
    };

    PageResult {
        records,
        total_count,
        total_pages,
        page: request.page,
        page_size: request.page_size,
    }
}

pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// Listings shown to the public: for sale or with an offer pending
pub fn visible_listings(records: &[PropertyRecord]) -> Vec<PropertyRecord> {
    records
        .iter()
        .filter(|p| matches!(p.status, PropertyStatus::ForSale | PropertyStatus::Pending))
        .cloned()
        .collect()
}
