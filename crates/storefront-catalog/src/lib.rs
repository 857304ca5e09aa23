//! Product catalog loading and the product-list derivation pipeline.
//!
//! The pipeline is a chain of total, pure stages:
//! category/price filter → search → sort → paginate. Each stage accepts
//! `Option<&Catalog>` where `None` means "catalog not loaded yet" and is
//! propagated unchanged, so callers can tell loading apart from loaded-empty.

use std::sync::Arc;

use storefront_core::Product;

pub mod error;
pub mod filters;
pub mod loader;
pub mod memo;
pub mod normalize;
pub mod pagination;
pub mod search;
pub mod selectors;
pub mod sort;
pub mod types;

/// An immutable, shareable product list. Stages that do not change the list
/// hand back the same allocation, so pointer identity doubles as a cheap
/// "unchanged" signal for memoization.
pub type Catalog = Arc<[Product]>;

pub use error::CatalogError;
pub use filters::{filter_products, matches_category, matches_filters, matches_price_range};
pub use loader::{category_name, load_categories, load_products, parse_categories, parse_products};
pub use memo::Memo;
pub use normalize::{normalize_category, normalize_product};
pub use pagination::{paginate, should_show_pagination, total_pages};
pub use search::{normalize_query, search_products};
pub use selectors::{
    derive_product_list, ListQuery, ProductListSelector, ProductListView, SelectorStats,
};
pub use sort::{compare_names, sort_products};
