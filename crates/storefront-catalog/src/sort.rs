use std::cmp::Ordering;

use storefront_core::{Product, SortDirection, SortField, SortOption};

use crate::Catalog;

/// Case-insensitive name comparison with a lower-case-first tie-break.
///
/// Approximates a locale collation for the product names the catalog serves:
/// `"apple" < "Apple" < "banana"`. Characters outside ASCII compare by their
/// lower-cased code points.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a.cmp(folded_b).then_with(|| b.cmp(a))
}

fn compare_by(field: SortField, a: &Product, b: &Product) -> Ordering {
    match field {
        // Normalized prices are finite; -0.0 and 0.0 tie.
        SortField::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
        SortField::Name => compare_names(&a.name, &b.name),
    }
}

/// Orders products by the field and direction bound to `option`.
///
/// [`SortOption::Default`] hands back the input list untouched. Every other
/// option produces a new list; the input is never reordered in place. The sort
/// is stable, and descending order reverses the comparator rather than the
/// output, so ties keep their original relative order in both directions.
#[must_use]
pub fn sort_products(products: Option<&Catalog>, option: SortOption) -> Option<Catalog> {
    let products = products?;
    let Some((field, direction)) = option.sort_key() else {
        return Some(Catalog::clone(products));
    };

    let mut sorted = products.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_by(field, a, b);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    Some(sorted.into())
}
