use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("normalization error for product {source_product_id}: {reason}")]
    Normalization {
        source_product_id: String,
        reason: String,
    },

    #[error("duplicate product id {0} in catalog")]
    DuplicateProductId(String),
}
