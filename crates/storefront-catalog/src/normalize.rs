//! Normalization from DummyJSON wire types to [`storefront_core::Product`]
//! and [`storefront_core::Category`].

use storefront_core::{Category, Product};

use crate::error::CatalogError;
use crate::types::{DummyJsonCategory, DummyJsonProduct};

/// Normalizes a raw [`DummyJsonProduct`] into a [`Product`].
///
/// The image is the thumbnail when present, otherwise the first full-size
/// image, otherwise an empty string.
///
/// # Errors
///
/// Returns [`CatalogError::Normalization`] if the price is negative or not a
/// finite number.
pub fn normalize_product(product: DummyJsonProduct) -> Result<Product, CatalogError> {
    let id = product.id.to_string();

    if !product.price.is_finite() || product.price < 0.0 {
        return Err(CatalogError::Normalization {
            source_product_id: id,
            reason: format!("invalid price {}", product.price),
        });
    }

    // Treat an empty thumbnail string as absent.
    let image = product
        .thumbnail
        .filter(|s| !s.is_empty())
        .or_else(|| product.images.into_iter().next())
        .unwrap_or_default();

    Ok(Product {
        id,
        name: product.title,
        price: product.price,
        image,
        description: product.description,
        category: product.category,
    })
}

#[must_use]
pub fn normalize_category(category: DummyJsonCategory) -> Category {
    Category {
        slug: category.slug,
        name: category.name,
    }
}
