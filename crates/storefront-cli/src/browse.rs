//! Catalog browsing command handlers.

use storefront_catalog::{load_categories, load_products};
use storefront_cli::render::{render_categories, render_product_page};
use storefront_cli::state::{Action, FiltersAction, PaginationAction, ResourceAction, SearchAction};
use storefront_cli::Storefront;
use storefront_core::{find_price_range, AppConfig, Category, SortOption};

#[derive(Debug)]
pub struct BrowseArgs {
    pub category: Option<String>,
    pub price_range: Option<String>,
    pub search: String,
    pub sort: SortOption,
    pub page: usize,
}

/// Loads the products snapshot into the storefront. A failed load is recorded
/// on the catalog slice and returned as an error.
pub(crate) fn load_catalog(storefront: &mut Storefront, config: &AppConfig) -> anyhow::Result<()> {
    storefront.dispatch(Action::Catalog(ResourceAction::Loading));
    match load_products(&config.catalog_path) {
        Ok(products) => {
            storefront.dispatch(Action::Catalog(ResourceAction::Loaded(products)));
            Ok(())
        }
        Err(e) => {
            storefront.dispatch(Action::Catalog(ResourceAction::Failed(e.to_string())));
            Err(anyhow::anyhow!("failed to load product catalog: {e}"))
        }
    }
}

/// Loads categories. Browsing still works without them, so failures are
/// logged rather than returned.
fn load_category_list(storefront: &mut Storefront, config: &AppConfig) {
    storefront.dispatch(Action::Categories(ResourceAction::Loading));
    match load_categories(&config.categories_path) {
        Ok(categories) => {
            storefront.dispatch(Action::Categories(ResourceAction::Loaded(categories)));
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to load categories; showing slugs instead");
            storefront.dispatch(Action::Categories(ResourceAction::Failed(e.to_string())));
        }
    }
}

fn loaded_categories(storefront: &Storefront) -> Vec<Category> {
    storefront
        .state()
        .categories
        .items
        .clone()
        .unwrap_or_default()
}

pub(crate) fn run_browse(
    storefront: &mut Storefront,
    config: &AppConfig,
    args: &BrowseArgs,
) -> anyhow::Result<()> {
    load_catalog(storefront, config)?;
    load_category_list(storefront, config);

    if let Some(id) = args.price_range.as_deref() {
        if find_price_range(id).is_none() {
            tracing::warn!(price_range = id, "unknown price range; not filtering by price");
        }
    }

    // Filter, search and sort first: each of them sends the cursor back to page 1.
    storefront.dispatch(Action::Filters(FiltersAction::SetCategory(
        args.category.clone(),
    )));
    storefront.dispatch(Action::Filters(FiltersAction::SetPriceRange(
        args.price_range.clone(),
    )));
    storefront.dispatch(Action::Search(SearchAction::SetQuery(args.search.clone())));
    storefront.dispatch(Action::SetSort(args.sort));
    storefront.dispatch(Action::Pagination(PaginationAction::SetCurrentPage(
        args.page,
    )));

    let view = storefront.product_list();
    let categories = loaded_categories(storefront);
    print!("{}", render_product_page(&view, &categories));
    Ok(())
}

pub(crate) fn run_categories(storefront: &mut Storefront, config: &AppConfig) -> anyhow::Result<()> {
    storefront.dispatch(Action::Categories(ResourceAction::Loading));
    let categories = load_categories(&config.categories_path)
        .map_err(|e| anyhow::anyhow!("failed to load categories: {e}"))?;
    storefront.dispatch(Action::Categories(ResourceAction::Loaded(categories)));
    print!("{}", render_categories(&loaded_categories(storefront)));
    Ok(())
}
