//! Category and price-bracket predicates.
//!
//! Both predicates are fail-open: an unset selector, or a price bracket id
//! that is not in [`storefront_core::PRICE_RANGES`], lets every product
//! through.

use storefront_core::{find_price_range, FilterState, Product};

use crate::Catalog;

/// `true` when no category is selected, or the product's category slug equals
/// the selected slug exactly. Slugs are compared case-sensitively and are not
/// trimmed. An empty slug counts as "no selection".
#[must_use]
pub fn matches_category(product: &Product, category_slug: Option<&str>) -> bool {
    match category_slug {
        None | Some("") => true,
        Some(slug) => product.category == slug,
    }
}

/// `true` when no bracket is selected, the bracket id is unknown, or the
/// product's price falls inside the bracket.
#[must_use]
pub fn matches_price_range(product: &Product, price_range_id: Option<&str>) -> bool {
    let Some(id) = price_range_id.filter(|id| !id.is_empty()) else {
        return true;
    };
    find_price_range(id).is_none_or(|range| range.contains(product.price))
}

#[must_use]
pub fn matches_filters(product: &Product, filters: &FilterState) -> bool {
    matches_category(product, filters.category_slug.as_deref())
        && matches_price_range(product, filters.price_range_id.as_deref())
}

/// Keeps the products that pass both the category and price predicates,
/// preserving order.
///
/// Returns `None` when `products` is `None`. With no active filter (`None` or
/// an empty selection on both axes) the input list is handed back as-is.
#[must_use]
pub fn filter_products(products: Option<&Catalog>, filters: &FilterState) -> Option<Catalog> {
    let products = products?;
    if filters.is_empty() {
        return Some(Catalog::clone(products));
    }
    Some(
        products
            .iter()
            .filter(|p| matches_filters(p, filters))
            .cloned()
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn make_product(id: &str, category: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            price,
            image: String::new(),
            description: String::new(),
            category: category.to_string(),
        }
    }

    fn filters(category: Option<&str>, price: Option<&str>) -> FilterState {
        FilterState {
            category_slug: category.map(str::to_string),
            price_range_id: price.map(str::to_string),
        }
    }

    #[test]
    fn category_none_always_passes() {
        let product = make_product("1", "beauty", 25.0);
        assert!(matches_category(&product, None));
    }

    #[test]
    fn category_matches_exact_slug_only() {
        let product = make_product("1", "beauty", 25.0);
        assert!(matches_category(&product, Some("beauty")));
        assert!(!matches_category(&product, Some("furniture")));
        assert!(!matches_category(&product, Some("Beauty")));
        assert!(!matches_category(&product, Some(" beauty")));
    }

    #[test]
    fn price_brackets_are_closed_open() {
        let in_low = |price| matches_price_range(&make_product("1", "x", price), Some("10-50"));
        assert!(!in_low(9.99));
        assert!(in_low(10.0));
        assert!(in_low(49.99));
        assert!(!in_low(50.0));
    }

    #[test]
    fn top_bracket_has_no_upper_bound() {
        let product = make_product("1", "x", 2_499.99);
        assert!(matches_price_range(&product, Some("100+")));
        assert!(!matches_price_range(&make_product("2", "x", 99.0), Some("100+")));
    }

    #[test]
    fn unknown_price_range_fails_open() {
        let product = make_product("1", "x", 5.0);
        assert!(matches_price_range(&product, Some("0-5")));
        assert!(matches_price_range(&product, None));
    }

    #[test]
    fn filter_products_intersects_both_axes() {
        let catalog: Catalog = Arc::from(vec![
            make_product("1", "beauty", 25.0),
            make_product("2", "furniture", 75.0),
            make_product("3", "beauty", 75.0),
        ]);

        let result = filter_products(Some(&catalog), &filters(Some("beauty"), Some("50-100"))).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "3");
    }

    #[test]
    fn filter_products_without_filters_returns_same_list() {
        let catalog: Catalog = Arc::from(vec![make_product("1", "beauty", 25.0)]);
        let result = filter_products(Some(&catalog), &FilterState::default()).unwrap();
        assert!(Arc::ptr_eq(&result, &catalog));
    }

    #[test]
    fn filter_products_with_empty_selections_returns_same_list() {
        let catalog: Catalog = Arc::from(vec![make_product("1", "beauty", 25.0)]);
        let result = filter_products(Some(&catalog), &filters(Some(""), Some(""))).unwrap();
        assert!(Arc::ptr_eq(&result, &catalog));
    }

    #[test]
    fn filter_products_no_match_is_empty_not_none() {
        let catalog: Catalog = Arc::from(vec![make_product("1", "beauty", 25.0)]);
        let result = filter_products(Some(&catalog), &filters(Some("groceries"), Some("100+")));
        assert_eq!(result.map(|r| r.len()), Some(0));
    }

    #[test]
    fn filter_products_propagates_unloaded_catalog() {
        assert!(filter_products(None, &filters(Some("beauty"), None)).is_none());
    }
}
