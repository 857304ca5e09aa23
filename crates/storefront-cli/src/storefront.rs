//! The single owner of storefront state.
//!
//! Actions are routed to the per-slice reducers. Two cross-slice rules live
//! here rather than in the pipeline: the page cursor goes back to 1 whenever
//! the category, price range, search query or sort order changes, and every
//! cart change is written to the cart store.

use storefront_cart::{CartAction, CartLedger, CartStore};
use storefront_catalog::{Catalog, ListQuery, ProductListSelector, ProductListView};
use storefront_core::{FilterState, Product, SortOption};

use crate::state::{
    reduce_filters, reduce_pagination, reduce_resource, reduce_search, Action, PaginationAction,
    StorefrontState,
};

pub struct Storefront {
    state: StorefrontState,
    selector: ProductListSelector,
    cart_store: Box<dyn CartStore>,
}

/// The inputs whose change sends the page cursor back to 1.
#[derive(PartialEq)]
struct ListingInputs {
    filters: FilterState,
    search_query: String,
    sort: SortOption,
}

impl ListingInputs {
    fn of(state: &StorefrontState) -> Self {
        Self {
            filters: state.filters.clone(),
            search_query: state.search_query.clone(),
            sort: state.sort,
        }
    }
}

impl Storefront {
    pub fn new(page_size: usize, cart_store: Box<dyn CartStore>) -> Self {
        Self {
            state: StorefrontState::with_page_size(page_size),
            selector: ProductListSelector::new(),
            cart_store,
        }
    }

    #[must_use]
    pub fn state(&self) -> &StorefrontState {
        &self.state
    }

    #[must_use]
    pub fn cart(&self) -> &CartLedger {
        &self.state.cart
    }

    /// Loads the persisted cart into the ledger. An empty store leaves the
    /// ledger alone; an unreadable one is logged and skipped.
    pub fn hydrate_cart(&mut self) {
        match self.cart_store.load() {
            Ok(items) if items.is_empty() => {}
            Ok(items) => {
                tracing::debug!(count = items.len(), "hydrating cart from store");
                self.state.cart.apply(CartAction::ReplaceAll(items));
            }
            Err(e) => tracing::warn!(error = %e, "failed to load stored cart"),
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        let before = ListingInputs::of(&self.state);

        match action {
            Action::Catalog(action) => {
                reduce_resource(&mut self.state.catalog, action.map(Catalog::from));
            }
            Action::Categories(action) => reduce_resource(&mut self.state.categories, action),
            Action::Filters(action) => reduce_filters(&mut self.state.filters, action),
            Action::Search(action) => reduce_search(&mut self.state.search_query, action),
            Action::SetSort(sort) => self.state.sort = sort,
            Action::Pagination(action) => reduce_pagination(&mut self.state.pagination, action),
            Action::Cart(action) => {
                if self.state.cart.apply(action) {
                    self.persist_cart();
                }
            }
        }

        if ListingInputs::of(&self.state) != before {
            reduce_pagination(&mut self.state.pagination, PaginationAction::Reset);
        }
    }

    /// The current page of products plus pagination metadata.
    pub fn product_list(&mut self) -> ProductListView {
        let query = ListQuery {
            catalog: self.state.catalog.items.as_ref(),
            filters: &self.state.filters,
            search_query: &self.state.search_query,
            sort: self.state.sort,
            pagination: self.state.pagination,
        };
        self.selector.select(&query)
    }

    #[must_use]
    pub fn find_product(&self, product_id: &str) -> Option<&Product> {
        self.state
            .catalog
            .items
            .as_ref()?
            .iter()
            .find(|p| p.id == product_id)
    }

    fn persist_cart(&self) {
        if let Err(e) = self.cart_store.save(self.state.cart.items()) {
            tracing::warn!(error = %e, "failed to persist cart");
        }
    }
}

#[cfg(test)]
#[path = "storefront_test.rs"]
mod tests;
