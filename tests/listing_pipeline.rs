use avian_listings::models::PropertyType;
use avian_listings::query::{
    page_controls, query_listings, visible_listings, FilterSpec, PageControl, PageRequest,
    SortOption, TypeFilter,
};
use avian_listings::sources::{ListingSource, MockCatalog};

fn ids(records: &[avian_listings::PropertyRecord]) -> Vec<&str> {
    records.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn full_catalog_splits_into_six_and_two() {
    let catalog = MockCatalog::new();
    let records = catalog.properties();

    let first = query_listings(
        records,
        &FilterSpec::default(),
        SortOption::NewestFirst,
        PageRequest::new(1),
    );
    let second = query_listings(
        records,
        &FilterSpec::default(),
        SortOption::NewestFirst,
        PageRequest::new(2),
    );
    let third = query_listings(
        records,
        &FilterSpec::default(),
        SortOption::NewestFirst,
        PageRequest::new(3),
    );

    assert_eq!(first.total_count, 8);
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.records.len(), 6);
    assert_eq!(second.records.len(), 2);
    assert!(third.records.is_empty());
    assert_eq!(third.total_count, 8);
    assert_eq!(third.total_pages, 2);
}

#[test]
fn price_orders_over_catalog() {
    let catalog = MockCatalog::new();
    let all = PageRequest { page: 1, page_size: 8 };

    let asc = query_listings(
        catalog.properties(),
        &FilterSpec::default(),
        SortOption::PriceAscending,
        all,
    );
    let desc = query_listings(
        catalog.properties(),
        &FilterSpec::default(),
        SortOption::PriceDescending,
        all,
    );

    assert_eq!(
        ids(&asc.records),
        vec!["prop7", "prop5", "prop4", "prop1", "prop6", "prop2", "prop8", "prop3"]
    );
    let mut reversed = ids(&desc.records);
    reversed.reverse();
    assert_eq!(ids(&asc.records), reversed);
}

#[test]
fn villas_newest_first() {
    let catalog = MockCatalog::new();
    let villas = FilterSpec {
        property_type: TypeFilter::Only(PropertyType::Villa),
        ..Default::default()
    };

    let everything = query_listings(
        catalog.properties(),
        &villas,
        SortOption::NewestFirst,
        PageRequest::default(),
    );
    assert_eq!(ids(&everything.records), vec!["prop4", "prop2", "prop6"]);

    // listings under review are not public
    let public = visible_listings(catalog.properties());
    let listed = query_listings(&public, &villas, SortOption::NewestFirst, PageRequest::default());
    assert_eq!(ids(&listed.records), vec!["prop2"]);
}

#[test]
fn public_search_by_location_and_budget() {
    let public = visible_listings(MockCatalog::new().properties());
    assert_eq!(public.len(), 5);

    let filter = FilterSpec {
        location: "LAGOS".to_string(),
        min_price: Some(1_000_000_000),
        max_price: Some(5_000_000_000),
        ..Default::default()
    };
    let result = query_listings(
        &public,
        &filter,
        SortOption::PriceAscending,
        PageRequest::default(),
    );
    assert_eq!(ids(&result.records), vec!["prop5", "prop1"]);
    assert_eq!(result.summary(), "Showing 2 of 2 results");
}

#[test]
fn control_strip_for_long_result_sets() {
    use PageControl::{Ellipsis, Page};
    assert_eq!(
        page_controls(5, 10),
        vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
    );
    assert_eq!(page_controls(1, 2), vec![Page(1), Page(2)]);
}

#[tokio::test]
async fn fetched_listings_feed_the_pipeline() {
    let catalog = MockCatalog::new();
    let listings = catalog.fetch_listings().await.unwrap();

    let result = query_listings(
        &visible_listings(&listings),
        &FilterSpec::default(),
        SortOption::NewestFirst,
        PageRequest::default(),
    );
    assert_eq!(ids(&result.records), vec!["prop5", "prop1", "prop7", "prop2", "prop8"]);
    assert_eq!(result.total_pages, 1);
}
