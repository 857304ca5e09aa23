use serde::{Deserialize, Serialize};

/// A catalog product, normalized from the upstream catalog API.
///
/// Products are immutable snapshots: the derivation pipeline only ever reads
/// them and produces new lists, never edits a product in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Upstream numeric ID rendered as a decimal string, e.g. `"42"`.
    pub id: String,
    pub name: String,
    /// Unit price in the store currency. Always finite and `>= 0`.
    pub price: f64,
    /// Thumbnail URL, or an empty string when the upstream has no image.
    pub image: String,
    pub description: String,
    /// Category slug, e.g. `"beauty"` or `"home-decoration"`.
    pub category: String,
}

/// Reference data for the category filter's option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub slug: String,
    pub name: String,
}
