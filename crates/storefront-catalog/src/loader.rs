//! Reading catalog snapshots from disk.

use std::collections::HashSet;
use std::path::Path;

use storefront_core::{Category, Product};

use crate::error::CatalogError;
use crate::normalize::{normalize_category, normalize_product};
use crate::types::{DummyJsonCategory, ProductsFile};

/// Load and normalize a products snapshot.
///
/// # Errors
///
/// Returns [`CatalogError`] if the file cannot be read or parsed, a product
/// fails normalization, or two products share an id.
pub fn load_products(path: &Path) -> Result<Vec<Product>, CatalogError> {
    let content = read_file(path)?;
    let products = parse_products(&content, &path.display().to_string())?;
    tracing::info!(path = %path.display(), count = products.len(), "loaded product catalog");
    Ok(products)
}

/// Parse a products snapshot from a JSON string. `context` names the source
/// in error messages.
///
/// # Errors
///
/// Same as [`load_products`], minus I/O.
pub fn parse_products(json: &str, context: &str) -> Result<Vec<Product>, CatalogError> {
    let file: ProductsFile =
        serde_json::from_str(json).map_err(|source| CatalogError::Deserialize {
            context: context.to_owned(),
            source,
        })?;

    let products = file
        .into_products()
        .into_iter()
        .map(normalize_product)
        .collect::<Result<Vec<_>, _>>()?;

    let mut seen = HashSet::new();
    for product in &products {
        if !seen.insert(product.id.as_str()) {
            return Err(CatalogError::DuplicateProductId(product.id.clone()));
        }
    }

    Ok(products)
}

/// Load a categories snapshot.
///
/// # Errors
///
/// Returns [`CatalogError`] if the file cannot be read or parsed.
pub fn load_categories(path: &Path) -> Result<Vec<Category>, CatalogError> {
    let content = read_file(path)?;
    let categories = parse_categories(&content, &path.display().to_string())?;
    tracing::info!(path = %path.display(), count = categories.len(), "loaded categories");
    Ok(categories)
}

/// # Errors
///
/// Returns [`CatalogError::Deserialize`] if `json` is not an array of categories.
pub fn parse_categories(json: &str, context: &str) -> Result<Vec<Category>, CatalogError> {
    let raw: Vec<DummyJsonCategory> =
        serde_json::from_str(json).map_err(|source| CatalogError::Deserialize {
            context: context.to_owned(),
            source,
        })?;
    Ok(raw.into_iter().map(normalize_category).collect())
}

/// Display name for a category slug, if the slug is known.
#[must_use]
pub fn category_name<'a>(categories: &'a [Category], slug: &str) -> Option<&'a str> {
    categories
        .iter()
        .find(|c| c.slug == slug)
        .map(|c| c.name.as_str())
}

fn read_file(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const ENVELOPE: &str = r#"{
        "products": [
            {"id": 1, "title": "Essence Mascara Lash Princess", "description": "Mascara.",
             "category": "beauty", "price": 9.99, "thumbnail": "https://cdn.example.com/1.png",
             "images": ["https://cdn.example.com/1a.png"]},
            {"id": 2, "title": "Eyeshadow Palette with Mirror", "description": "Palette.",
             "category": "beauty", "price": 19.99}
        ],
        "total": 194, "skip": 0, "limit": 30
    }"#;

    #[test]
    fn parses_envelope() {
        let products = parse_products(ENVELOPE, "test").unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, "1");
        assert_eq!(products[1].image, "");
    }

    #[test]
    fn parses_bare_array() {
        let json = r#"[{"id": 5, "title": "Red Nail Polish", "category": "beauty", "price": 8.99}]"#;
        let products = parse_products(json, "test").unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Red Nail Polish");
        assert_eq!(products[0].description, "");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"[
            {"id": 5, "title": "A", "category": "beauty", "price": 1.0},
            {"id": 5, "title": "B", "category": "beauty", "price": 2.0}
        ]"#;
        let err = parse_products(json, "test").unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateProductId(ref id) if id == "5"));
    }

    #[test]
    fn malformed_json_reports_context() {
        let err = parse_products("{not json", "products.json").unwrap_err();
        assert!(
            matches!(err, CatalogError::Deserialize { ref context, .. } if context == "products.json")
        );
    }

    #[test]
    fn parses_categories() {
        let json = r#"[
            {"slug": "beauty", "name": "Beauty", "url": "https://dummyjson.com/products/category/beauty"},
            {"slug": "fragrances", "name": "Fragrances"}
        ]"#;
        let categories = parse_categories(json, "test").unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(category_name(&categories, "fragrances"), Some("Fragrances"));
        assert_eq!(category_name(&categories, "groceries"), None);
    }

    #[test]
    fn load_products_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ENVELOPE.as_bytes()).unwrap();
        let products = load_products(file.path()).unwrap();
        assert_eq!(products.len(), 2);
    }

    #[test]
    fn load_products_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_products(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
