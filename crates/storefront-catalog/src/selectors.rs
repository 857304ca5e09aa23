//! The composed read model: category/price filter → search → sort → page.
//!
//! Search and the category/price filters both apply to the full catalog and
//! are intersected; the filter stage runs first, then search narrows its
//! output. [`derive_product_list`] is the plain, uncached chain;
//! [`ProductListSelector`] computes the same result but caches every stage on
//! its own inputs, so changing the sort order does not refilter and turning
//! the page does not resort.

use storefront_core::{FilterState, PaginationState, SortOption};

use crate::filters::filter_products;
use crate::memo::{Memo, SnapshotKey};
use crate::pagination::{paginate, should_show_pagination, total_pages};
use crate::search::{normalize_query, search_products};
use crate::sort::sort_products;
use crate::Catalog;

/// Everything the product list depends on. All fields are plain values owned
/// by the caller.
#[derive(Debug, Clone, Copy)]
pub struct ListQuery<'a> {
    /// `None` while the catalog is still loading.
    pub catalog: Option<&'a Catalog>,
    pub filters: &'a FilterState,
    pub search_query: &'a str,
    pub sort: SortOption,
    pub pagination: PaginationState,
}

/// The slice of products to render plus pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListView {
    /// Products on the current page; `None` while the catalog is loading.
    pub products: Option<Catalog>,
    /// Matching products across all pages.
    pub total_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub show_pagination: bool,
}

impl ProductListView {
    fn assemble(page: Option<Catalog>, total_count: usize, pagination: PaginationState) -> Self {
        Self {
            products: page,
            total_count,
            total_pages: total_pages(total_count, pagination.page_size),
            current_page: pagination.current_page,
            show_pagination: should_show_pagination(total_count, pagination.page_size),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.products.is_none()
    }
}

fn page_of(sorted: Option<&Catalog>, pagination: PaginationState) -> Option<Catalog> {
    paginate(
        sorted.map(|s| &s[..]),
        pagination.current_page,
        pagination.page_size,
    )
    .map(Catalog::from)
}

/// Runs the whole chain without caching.
#[must_use]
pub fn derive_product_list(query: &ListQuery<'_>) -> ProductListView {
    let filtered = filter_products(query.catalog, query.filters);
    let searched = search_products(filtered.as_ref(), query.search_query);
    let sorted = sort_products(searched.as_ref(), query.sort);
    let total_count = sorted.as_ref().map_or(0, |s| s.len());
    let page = page_of(sorted.as_ref(), query.pagination);
    ProductListView::assemble(page, total_count, query.pagination)
}

/// How many times each stage has actually been recomputed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectorStats {
    pub filter_runs: u64,
    pub search_runs: u64,
    pub sort_runs: u64,
    pub page_runs: u64,
}

/// Memoized version of [`derive_product_list`].
///
/// Each stage keeps its last inputs and output. Upstream outputs are keyed by
/// pointer identity, so a stage whose inputs did not change hands the very
/// same allocation downstream and the rest of the chain stays cached.
#[derive(Debug, Default)]
pub struct ProductListSelector {
    filtered: Memo<(SnapshotKey, FilterState), Option<Catalog>>,
    searched: Memo<(SnapshotKey, Option<String>), Option<Catalog>>,
    sorted: Memo<(SnapshotKey, SortOption), Option<Catalog>>,
    paged: Memo<(SnapshotKey, usize, usize), Option<Catalog>>,
}

impl ProductListSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, query: &ListQuery<'_>) -> ProductListView {
        let filtered = self.filtered.get_or_compute(
            (SnapshotKey(query.catalog.cloned()), query.filters.clone()),
            |(catalog, filters)| {
                tracing::debug!(?filters, "recomputing filtered products");
                filter_products(catalog.0.as_ref(), filters)
            },
        );

        // Keyed on the normalized query: "beef" and " BEEF " match the same set.
        let searched = self.searched.get_or_compute(
            (SnapshotKey(filtered), normalize_query(query.search_query)),
            |(filtered, needle)| {
                tracing::debug!(?needle, "recomputing searched products");
                search_products(filtered.0.as_ref(), needle.as_deref().unwrap_or(""))
            },
        );

        let sorted = self.sorted.get_or_compute(
            (SnapshotKey(searched), query.sort),
            |(searched, sort)| {
                tracing::debug!(sort = %sort, "recomputing sorted products");
                sort_products(searched.0.as_ref(), *sort)
            },
        );

        let total_count = sorted.as_ref().map_or(0, |s| s.len());
        let page = self.paged.get_or_compute(
            (
                SnapshotKey(sorted),
                query.pagination.current_page,
                query.pagination.page_size,
            ),
            |(sorted, current_page, page_size)| {
                tracing::debug!(current_page, page_size, "recomputing product page");
                page_of(
                    sorted.0.as_ref(),
                    PaginationState {
                        current_page: *current_page,
                        page_size: *page_size,
                    },
                )
            },
        );

        ProductListView::assemble(page, total_count, query.pagination)
    }

    #[must_use]
    pub fn stats(&self) -> SelectorStats {
        SelectorStats {
            filter_runs: self.filtered.computations(),
            search_runs: self.searched.computations(),
            sort_runs: self.sorted.computations(),
            page_runs: self.paged.computations(),
        }
    }
}

#[cfg(test)]
#[path = "selectors_test.rs"]
mod tests;
