pub mod app_config;
pub mod cart;
pub mod config;
pub mod price_ranges;
pub mod products;
pub mod sort_options;
pub mod ui_state;

pub use app_config::{AppConfig, Environment};
pub use cart::CartLineItem;
pub use config::{load_app_config, load_app_config_from_env};
pub use price_ranges::{find_price_range, PriceRange, PRICE_RANGES};
pub use products::{Category, Product};
pub use sort_options::{ParseSortOptionError, SortDirection, SortField, SortOption};
pub use ui_state::{FilterState, PaginationState, DEFAULT_PAGE_SIZE};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
