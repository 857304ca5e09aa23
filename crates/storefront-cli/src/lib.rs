//! Storefront state ownership and text rendering used by the CLI commands.

pub mod render;
pub mod state;
pub mod storefront;

pub use storefront::Storefront;
