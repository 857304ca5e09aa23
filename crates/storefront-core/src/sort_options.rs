use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Price,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// One of the five orderings the product list can be shown in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Leaves catalog order untouched.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::Default,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::NameAsc,
        SortOption::NameDesc,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            SortOption::Default => "default",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortOption::Default => "Default",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::NameAsc => "Name: A to Z",
            SortOption::NameDesc => "Name: Z to A",
        }
    }

    /// The `(field, direction)` pair this option sorts by, or `None` for
    /// [`SortOption::Default`].
    #[must_use]
    pub fn sort_key(self) -> Option<(SortField, SortDirection)> {
        match self {
            SortOption::Default => None,
            SortOption::PriceAsc => Some((SortField::Price, SortDirection::Asc)),
            SortOption::PriceDesc => Some((SortField::Price, SortDirection::Desc)),
            SortOption::NameAsc => Some((SortField::Name, SortDirection::Asc)),
            SortOption::NameDesc => Some((SortField::Name, SortDirection::Desc)),
        }
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort option: {0}")]
pub struct ParseSortOptionError(pub String);

impl FromStr for SortOption {
    type Err = ParseSortOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.id() == s)
            .ok_or_else(|| ParseSortOptionError(s.to_string()))
    }
}
