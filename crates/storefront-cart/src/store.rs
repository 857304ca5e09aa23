//! Cart persistence.
//!
//! The ledger knows nothing about storage. The state owner hydrates it once at
//! startup from [`CartStore::load`] and calls [`CartStore::save`] after every
//! change.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use storefront_core::CartLineItem;

use crate::error::CartStoreError;
use crate::ledger::retain_valid_lines;

pub trait CartStore {
    /// Returns the previously saved line items, or an empty list when nothing
    /// usable was stored.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError`] only when the backing storage exists but
    /// cannot be read.
    fn load(&self) -> Result<Vec<CartLineItem>, CartStoreError>;

    /// Replaces the stored line items with `items`.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError`] if the items cannot be written.
    fn save(&self, items: &[CartLineItem]) -> Result<(), CartStoreError>;
}

/// Stores the cart as a JSON array of camelCase line items.
#[derive(Debug, Clone)]
pub struct JsonFileCartStore {
    path: PathBuf,
}

impl JsonFileCartStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> CartStoreError {
        CartStoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl CartStore for JsonFileCartStore {
    fn load(&self) -> Result<Vec<CartLineItem>, CartStoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(parse_stored_cart(&raw))
    }

    fn save(&self, items: &[CartLineItem]) -> Result<(), CartStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let json = serde_json::to_string_pretty(items)?;
        std::fs::write(&self.path, json).map_err(|e| self.io_error(e))
    }
}

/// Parses stored cart JSON, keeping only well-formed line items.
///
/// Invalid JSON or a non-array root yields an empty cart. Entries that do not
/// have the line-item shape, have a zero quantity, or repeat an earlier
/// product id are dropped.
#[must_use]
pub fn parse_stored_cart(raw: &str) -> Vec<CartLineItem> {
    let entries = match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Array(entries)) => entries,
        Ok(_) => {
            tracing::warn!("stored cart is not a JSON array; starting with an empty cart");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(error = %e, "stored cart is not valid JSON; starting with an empty cart");
            return Vec::new();
        }
    };

    let total = entries.len();
    let items = retain_valid_lines(
        entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value::<CartLineItem>(entry).ok())
            .collect(),
    );

    if items.len() < total {
        tracing::warn!(
            kept = items.len(),
            dropped = total - items.len(),
            "discarded malformed stored cart entries"
        );
    }
    items
}

/// In-process store. Clones share the same contents, so a caller can keep a
/// handle to inspect what was saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryCartStore {
    items: Arc<Mutex<Vec<CartLineItem>>>,
    saves: Arc<Mutex<usize>>,
}

impl MemoryCartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_items(items: Vec<CartLineItem>) -> Self {
        let store = Self::default();
        *store.items.lock().unwrap_or_else(PoisonError::into_inner) = items;
        store
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<CartLineItem> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of times [`CartStore::save`] has been called.
    #[must_use]
    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CartStore for MemoryCartStore {
    fn load(&self) -> Result<Vec<CartLineItem>, CartStoreError> {
        Ok(self.snapshot())
    }

    fn save(&self, items: &[CartLineItem]) -> Result<(), CartStoreError> {
        *self.items.lock().unwrap_or_else(PoisonError::into_inner) = items.to_vec();
        *self.saves.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        Ok(())
    }
}
