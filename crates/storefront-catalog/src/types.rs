//! DummyJSON response types for the public catalog endpoints.
//!
//! ### `GET /products`
//! An envelope `{ products, total, skip, limit }`; only `products` is read.
//! Saved snapshots are sometimes just the bare `products` array, so
//! [`ProductsFile`] accepts both.
//!
//! ### Images
//! `thumbnail` is usually present; `images` is a list of full-size URLs and
//! may be missing entirely on trimmed-down payloads.
//!
//! ### `GET /products/categories`
//! A bare array of `{ slug, name, url }` objects; `url` is not read.

use serde::Deserialize;

/// Top-level response from `GET /products`.
#[derive(Debug, Deserialize)]
pub struct DummyJsonProductsResponse {
    pub products: Vec<DummyJsonProduct>,
}

/// A single product as DummyJSON returns it.
#[derive(Debug, Deserialize)]
pub struct DummyJsonProduct {
    /// Numeric product ID (e.g., `1`).
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub price: f64,
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct DummyJsonCategory {
    pub slug: String,
    pub name: String,
}

/// A products snapshot on disk: either the full envelope or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProductsFile {
    Envelope(DummyJsonProductsResponse),
    Bare(Vec<DummyJsonProduct>),
}

impl ProductsFile {
    #[must_use]
    pub fn into_products(self) -> Vec<DummyJsonProduct> {
        match self {
            ProductsFile::Envelope(response) => response.products,
            ProductsFile::Bare(products) => products,
        }
    }
}
