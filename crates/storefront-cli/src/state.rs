//! Storefront state slices, the actions that change them, and one pure
//! reducer per slice.

use storefront_cart::{CartAction, CartLedger};
use storefront_catalog::Catalog;
use storefront_core::{Category, FilterState, PaginationState, Product, SortOption};

/// An externally fetched list: `items` stays `None` until the first
/// successful load, so "still loading" is distinguishable from "loaded, empty".
#[derive(Debug, Clone)]
pub struct ResourceSlice<T> {
    pub items: Option<T>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ResourceSlice<T> {
    fn default() -> Self {
        Self {
            items: None,
            is_loading: false,
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResourceAction<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> ResourceAction<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ResourceAction<U> {
        match self {
            ResourceAction::Loading => ResourceAction::Loading,
            ResourceAction::Loaded(items) => ResourceAction::Loaded(f(items)),
            ResourceAction::Failed(message) => ResourceAction::Failed(message),
        }
    }
}

/// A failed load keeps whatever was loaded before.
pub fn reduce_resource<T>(slice: &mut ResourceSlice<T>, action: ResourceAction<T>) {
    match action {
        ResourceAction::Loading => {
            slice.is_loading = true;
            slice.error = None;
        }
        ResourceAction::Loaded(items) => {
            slice.items = Some(items);
            slice.is_loading = false;
            slice.error = None;
        }
        ResourceAction::Failed(message) => {
            slice.error = Some(message);
            slice.is_loading = false;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FiltersAction {
    SetCategory(Option<String>),
    SetPriceRange(Option<String>),
    Reset,
}

pub fn reduce_filters(filters: &mut FilterState, action: FiltersAction) {
    match action {
        FiltersAction::SetCategory(slug) => filters.category_slug = slug,
        FiltersAction::SetPriceRange(id) => filters.price_range_id = id,
        FiltersAction::Reset => *filters = FilterState::default(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    SetQuery(String),
    Clear,
}

pub fn reduce_search(query: &mut String, action: SearchAction) {
    match action {
        SearchAction::SetQuery(value) => *query = value,
        SearchAction::Clear => query.clear(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationAction {
    SetCurrentPage(usize),
    /// Back to page 1, keeping the configured page size.
    Reset,
}

pub fn reduce_pagination(pagination: &mut PaginationState, action: PaginationAction) {
    match action {
        PaginationAction::SetCurrentPage(page) => pagination.current_page = page,
        PaginationAction::Reset => pagination.current_page = 1,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Catalog(ResourceAction<Vec<Product>>),
    Categories(ResourceAction<Vec<Category>>),
    Filters(FiltersAction),
    Search(SearchAction),
    SetSort(SortOption),
    Pagination(PaginationAction),
    Cart(CartAction),
}

#[derive(Debug, Clone, Default)]
pub struct StorefrontState {
    pub catalog: ResourceSlice<Catalog>,
    pub categories: ResourceSlice<Vec<Category>>,
    pub filters: FilterState,
    pub search_query: String,
    pub sort: SortOption,
    pub pagination: PaginationState,
    pub cart: CartLedger,
}

impl StorefrontState {
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            pagination: PaginationState::with_page_size(page_size),
            ..Self::default()
        }
    }
}
