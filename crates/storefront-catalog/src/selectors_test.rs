use std::sync::Arc;

use storefront_core::Product;

use super::*;

fn make_product(id: usize, name: &str, category: &str, price: f64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        image: String::new(),
        description: String::new(),
        category: category.to_string(),
    }
}

fn beauty_catalog(count: usize) -> Catalog {
    (1..=count)
        .map(|i| make_product(i, &format!("Beauty {i}"), "beauty", 10.0))
        .collect()
}

fn mixed_catalog() -> Catalog {
    Arc::from(vec![
        make_product(1, "Beef Steak", "groceries", 12.0),
        make_product(2, "Lipstick", "beauty", 35.0),
        make_product(3, "Beef Jerky", "groceries", 60.0),
        make_product(4, "Sofa", "furniture", 499.0),
        make_product(5, "Mascara", "beauty", 9.99),
        make_product(6, "Apple", "groceries", 1.99),
    ])
}

fn query<'a>(
    catalog: Option<&'a Catalog>,
    filters: &'a FilterState,
    search_query: &'a str,
    sort: SortOption,
    current_page: usize,
) -> ListQuery<'a> {
    ListQuery {
        catalog,
        filters,
        search_query,
        sort,
        pagination: PaginationState {
            current_page,
            page_size: 20,
        },
    }
}

fn names(view: &ProductListView) -> Vec<String> {
    view.products
        .as_ref()
        .expect("expected a loaded page")
        .iter()
        .map(|p| p.name.clone())
        .collect()
}

fn category(slug: &str) -> FilterState {
    FilterState {
        category_slug: Some(slug.to_string()),
        price_range_id: None,
    }
}

// -----------------------------------------------------------------------
// derive_product_list
// -----------------------------------------------------------------------

#[test]
fn first_page_of_25_beauty_products() {
    let catalog = beauty_catalog(25);
    let filters = category("beauty");
    let view = derive_product_list(&query(Some(&catalog), &filters, "", SortOption::Default, 1));

    let expected: Vec<String> = (1..=20).map(|i| format!("Beauty {i}")).collect();
    assert_eq!(names(&view), expected);
    assert_eq!(view.total_count, 25);
    assert_eq!(view.total_pages, 2);
    assert!(view.show_pagination);
}

#[test]
fn second_page_holds_the_remainder() {
    let catalog = beauty_catalog(25);
    let filters = category("beauty");
    let view = derive_product_list(&query(Some(&catalog), &filters, "", SortOption::Default, 2));
    assert_eq!(names(&view).len(), 5);
    assert_eq!(names(&view)[0], "Beauty 21");
    assert_eq!(view.current_page, 2);
}

#[test]
fn page_beyond_end_is_empty_but_keeps_metadata() {
    let catalog = beauty_catalog(25);
    let filters = FilterState::default();
    let view = derive_product_list(&query(Some(&catalog), &filters, "", SortOption::Default, 9));
    assert!(names(&view).is_empty());
    assert_eq!(view.total_count, 25);
    assert_eq!(view.total_pages, 2);
}

#[test]
fn single_page_hides_pagination() {
    let catalog = mixed_catalog();
    let filters = FilterState::default();
    let view = derive_product_list(&query(Some(&catalog), &filters, "", SortOption::Default, 1));
    assert_eq!(view.total_count, 6);
    assert_eq!(view.total_pages, 1);
    assert!(!view.show_pagination);
}

#[test]
fn search_intersects_with_category_and_price_filters() {
    let catalog = mixed_catalog();
    let filters = FilterState {
        category_slug: Some("groceries".to_string()),
        price_range_id: Some("10-50".to_string()),
    };
    let view = derive_product_list(&query(Some(&catalog), &filters, " beef ", SortOption::Default, 1));
    assert_eq!(names(&view), vec!["Beef Steak"]);
}

#[test]
fn search_then_sort_by_price_desc() {
    let catalog = mixed_catalog();
    let filters = FilterState::default();
    let view = derive_product_list(&query(Some(&catalog), &filters, "BEEF", SortOption::PriceDesc, 1));
    assert_eq!(names(&view), vec!["Beef Jerky", "Beef Steak"]);
}

#[test]
fn name_sort_over_filtered_set() {
    let catalog = mixed_catalog();
    let filters = category("beauty");
    let view = derive_product_list(&query(Some(&catalog), &filters, "", SortOption::NameAsc, 1));
    assert_eq!(names(&view), vec!["Lipstick", "Mascara"]);
}

#[test]
fn unloaded_catalog_yields_loading_view() {
    let filters = category("beauty");
    let view = derive_product_list(&query(None, &filters, "beef", SortOption::NameAsc, 1));
    assert!(view.is_loading());
    assert_eq!(view.total_count, 0);
    assert_eq!(view.total_pages, 0);
    assert!(!view.show_pagination);
}

#[test]
fn loaded_empty_catalog_is_not_loading() {
    let catalog: Catalog = Arc::from(Vec::new());
    let filters = FilterState::default();
    let view = derive_product_list(&query(Some(&catalog), &filters, "", SortOption::Default, 1));
    assert!(!view.is_loading());
    assert!(names(&view).is_empty());
}

#[test]
fn zero_page_size_reports_no_pages() {
    let catalog = beauty_catalog(3);
    let filters = FilterState::default();
    let mut q = query(Some(&catalog), &filters, "", SortOption::Default, 1);
    q.pagination.page_size = 0;
    let view = derive_product_list(&q);
    assert_eq!(view.total_count, 3);
    assert_eq!(view.total_pages, 0);
    assert!(!view.show_pagination);
    assert!(names(&view).is_empty());
}

// -----------------------------------------------------------------------
// ProductListSelector
// -----------------------------------------------------------------------

#[test]
fn selector_matches_uncached_derivation() {
    let catalog = mixed_catalog();
    let filters = category("groceries");
    let mut selector = ProductListSelector::new();
    for sort in SortOption::ALL {
        for search in ["", "beef", "APPLE", "zzz"] {
            let q = query(Some(&catalog), &filters, search, sort, 1);
            assert_eq!(selector.select(&q), derive_product_list(&q));
        }
    }
}

#[test]
fn identical_inputs_reuse_every_stage() {
    let catalog = mixed_catalog();
    let filters = category("groceries");
    let mut selector = ProductListSelector::new();
    let q = query(Some(&catalog), &filters, "beef", SortOption::PriceAsc, 1);

    let first = selector.select(&q);
    let second = selector.select(&q);

    assert_eq!(first, second);
    let (a, b) = (first.products.unwrap(), second.products.unwrap());
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(
        selector.stats(),
        SelectorStats {
            filter_runs: 1,
            search_runs: 1,
            sort_runs: 1,
            page_runs: 1,
        }
    );
}

#[test]
fn changing_sort_does_not_refilter_or_research() {
    let catalog = mixed_catalog();
    let filters = category("groceries");
    let mut selector = ProductListSelector::new();

    selector.select(&query(Some(&catalog), &filters, "", SortOption::Default, 1));
    let view = selector.select(&query(Some(&catalog), &filters, "", SortOption::NameDesc, 1));

    assert_eq!(names(&view), vec!["Beef Steak", "Beef Jerky", "Apple"]);
    let stats = selector.stats();
    assert_eq!(stats.filter_runs, 1);
    assert_eq!(stats.search_runs, 1);
    assert_eq!(stats.sort_runs, 2);
    assert_eq!(stats.page_runs, 2);
}

#[test]
fn changing_page_only_repaginates() {
    let catalog = beauty_catalog(45);
    let filters = FilterState::default();
    let mut selector = ProductListSelector::new();

    selector.select(&query(Some(&catalog), &filters, "", SortOption::PriceAsc, 1));
    let view = selector.select(&query(Some(&catalog), &filters, "", SortOption::PriceAsc, 3));

    assert_eq!(names(&view).len(), 5);
    let stats = selector.stats();
    assert_eq!(stats.filter_runs, 1);
    assert_eq!(stats.search_runs, 1);
    assert_eq!(stats.sort_runs, 1);
    assert_eq!(stats.page_runs, 2);
}

#[test]
fn whitespace_only_query_change_is_a_cache_hit() {
    let catalog = mixed_catalog();
    let filters = FilterState::default();
    let mut selector = ProductListSelector::new();

    selector.select(&query(Some(&catalog), &filters, "beef", SortOption::Default, 1));
    selector.select(&query(Some(&catalog), &filters, "  BEEF ", SortOption::Default, 1));

    assert_eq!(selector.stats().search_runs, 1);
}

#[test]
fn new_catalog_snapshot_invalidates_the_chain() {
    let filters = FilterState::default();
    let mut selector = ProductListSelector::new();

    let first = beauty_catalog(3);
    selector.select(&query(Some(&first), &filters, "", SortOption::Default, 1));
    let second = beauty_catalog(3);
    selector.select(&query(Some(&second), &filters, "", SortOption::Default, 1));

    assert_eq!(selector.stats().filter_runs, 2);
}

#[test]
fn catalog_arriving_after_loading_is_picked_up() {
    let filters = FilterState::default();
    let mut selector = ProductListSelector::new();

    let loading = selector.select(&query(None, &filters, "", SortOption::Default, 1));
    assert!(loading.is_loading());

    let catalog = beauty_catalog(2);
    let loaded = selector.select(&query(Some(&catalog), &filters, "", SortOption::Default, 1));
    assert_eq!(names(&loaded), vec!["Beauty 1", "Beauty 2"]);
}
