use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Category and price-bracket selections. `None` or an empty string means
/// "no filtering" on that axis; both axes are independent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub category_slug: Option<String>,
    pub price_range_id: Option<String>,
}

impl FilterState {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        is_unset(self.category_slug.as_deref()) && is_unset(self.price_range_id.as_deref())
    }
}

fn is_unset(selection: Option<&str>) -> bool {
    selection.is_none_or(str::is_empty)
}

/// 1-based page cursor plus page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    pub current_page: usize,
    pub page_size: usize,
}

impl PaginationState {
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size,
        }
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}
