//! The shopping cart: an ordered ledger of line items keyed by product id,
//! plus the persistence collaborators that hydrate and save it.

pub mod error;
pub mod ledger;
pub mod store;

pub use error::CartStoreError;
pub use ledger::{CartAction, CartLedger};
pub use store::{parse_stored_cart, CartStore, JsonFileCartStore, MemoryCartStore};
