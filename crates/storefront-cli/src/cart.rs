//! Cart command handlers for the CLI.
//!
//! The storefront has already hydrated the cart from the configured cart file
//! by the time these run; every change is written back through it.

use clap::Subcommand;
use storefront_cart::CartAction;
use storefront_cli::render::render_cart;
use storefront_cli::state::Action;
use storefront_cli::Storefront;
use storefront_core::AppConfig;

use crate::browse::load_catalog;

/// Sub-commands available under `cart`.
#[derive(Debug, Subcommand)]
pub enum CartCommands {
    /// Show cart contents and subtotal
    Show,
    /// Add a catalog product to the cart
    Add {
        /// Product id from the catalog
        product_id: String,
        /// Units to add; merged into an existing line for the same product
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
    /// Set the quantity of a line; zero or less removes it
    Set {
        product_id: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a product from the cart
    Remove { product_id: String },
    /// Empty the cart
    Clear,
}

pub(crate) fn run_cart_command(
    storefront: &mut Storefront,
    config: &AppConfig,
    command: CartCommands,
) -> anyhow::Result<()> {
    let action = match command {
        CartCommands::Show => None,
        CartCommands::Add {
            product_id,
            quantity,
        } => {
            load_catalog(storefront, config)?;
            let product = storefront
                .find_product(&product_id)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("product '{product_id}' not found in catalog"))?;
            Some(CartAction::Add { product, quantity })
        }
        CartCommands::Set {
            product_id,
            quantity,
        } => Some(CartAction::SetQuantity {
            product_id,
            quantity,
        }),
        CartCommands::Remove { product_id } => Some(CartAction::Remove { product_id }),
        CartCommands::Clear => Some(CartAction::Clear),
    };

    if let Some(action) = action {
        storefront.dispatch(Action::Cart(action));
    }
    print!("{}", render_cart(storefront.cart()));
    Ok(())
}
