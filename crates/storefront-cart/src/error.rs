use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartStoreError {
    #[error("cart file I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),
}
