use crate::Catalog;

/// Trims and lower-cases a raw query. Returns `None` when nothing is left,
/// meaning "no search filtering".
#[must_use]
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Keeps products whose lower-cased name contains the normalized query.
///
/// `None` input is returned as `None`. An empty or whitespace-only query hands
/// back the input list unchanged. Order is preserved; there is no ranking.
#[must_use]
pub fn search_products(products: Option<&Catalog>, query: &str) -> Option<Catalog> {
    let products = products?;
    let Some(needle) = normalize_query(query) else {
        return Some(Catalog::clone(products));
    };
    Some(
        products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect(),
    )
}
