use crate::models::{PropertyRecord, PropertyType};
use serde::{Deserialize, Serialize};

/// Number of listing cards shown per page
pub const PAGE_SIZE: usize = 6;

/// Property type restriction of a listing search
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Only(PropertyType),
}

impl TypeFilter {
    pub fn matches(&self, kind: PropertyType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(wanted) => *wanted == kind,
        }
    }

    /// `"all"` or a property type label
    pub fn parse(value: &str) -> Option<Self> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Some(TypeFilter::All);
        }
        PropertyType::parse(value).map(TypeFilter::Only)
    }
}

/// Search filters for the listings view
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterSpec {
    /// Substring matched against city, state and street
    pub location: String,
    /// Minimum price (NGN)
    pub min_price: Option<i64>,
    /// Maximum price (NGN)
    pub max_price: Option<i64>,
    pub property_type: TypeFilter,
}

impl FilterSpec {
    pub fn matches(&self, property: &PropertyRecord) -> bool {
        self.matches_location(property)
            && self.min_price.map_or(true, |min| property.price >= min)
            && self.max_price.map_or(true, |max| property.price <= max)
            && self.property_type.matches(property.property_type)
    }

    fn matches_location(&self, property: &PropertyRecord) -> bool {
        if self.location.is_empty() {
            return true;
        }
        let needle = self.location.to_lowercase();
        let address = &property.address;
        [&address.city, &address.state, &address.street]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Ordering of the listings view
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortOption {
    #[default]
    NewestFirst,
    PriceAscending,
    PriceDescending,
}

impl SortOption {
    /// Accepts the listings select values (`newest`, `price_asc`, `price_desc`)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().replace('-', "_").as_str() {
            "newest" | "newest_first" => Some(SortOption::NewestFirst),
            "price_asc" | "price_ascending" => Some(SortOption::PriceAscending),
            "price_desc" | "price_descending" => Some(SortOption::PriceDescending),
            _ => None,
        }
    }
}

/// A 1-based page of a listing search
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize) -> Self {
        Self {
            page,
            page_size: PAGE_SIZE,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1)
    }
}

/// One page of listings plus the totals needed to render pagination
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageResult {
    pub records: Vec<PropertyRecord>,
    pub total_count: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

impl PageResult {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// "Showing 6 of 8 results"
    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} results",
            self.records.len(),
            self.total_count
        )
    }
}
