mod browse;
mod cart;

use clap::{Parser, Subcommand};
use storefront_cart::JsonFileCartStore;
use storefront_cli::{render, Storefront};
use storefront_core::SortOption;
use tracing_subscriber::EnvFilter;

use crate::cart::CartCommands;

#[derive(Debug, Parser)]
#[command(name = "storefront-cli")]
#[command(about = "Browse the product catalog and manage the shopping cart")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List one page of products, optionally filtered, searched and sorted
    Browse {
        /// Only show products in this category (by slug)
        #[arg(long)]
        category: Option<String>,

        /// Only show products in this price range (e.g., 10-50, 100+)
        #[arg(long)]
        price_range: Option<String>,

        /// Case-insensitive substring to look for in product names
        #[arg(long, default_value = "")]
        search: String,

        /// Sort order: default, price-asc, price-desc, name-asc, name-desc
        #[arg(long, default_value = "default")]
        sort: SortOption,

        /// Page to show, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// List catalog categories
    Categories,
    /// List the accepted price ranges and sort orders
    Options,
    /// Inspect or change the shopping cart
    Cart {
        #[command(subcommand)]
        command: CartCommands,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = storefront_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("storefront-cli ready; run with --help to see commands");
        return Ok(());
    };

    tracing::debug!(env = %config.env, page_size = config.page_size, "starting storefront");
    let mut storefront = Storefront::new(
        config.page_size,
        Box::new(JsonFileCartStore::new(&config.cart_path)),
    );
    storefront.hydrate_cart();

    match command {
        Commands::Browse {
            category,
            price_range,
            search,
            sort,
            page,
        } => browse::run_browse(
            &mut storefront,
            &config,
            &browse::BrowseArgs {
                category,
                price_range,
                search,
                sort,
                page,
            },
        ),
        Commands::Categories => browse::run_categories(&mut storefront, &config),
        Commands::Options => {
            print!("{}", render::render_options());
            Ok(())
        }
        Commands::Cart { command } => cart::run_cart_command(&mut storefront, &config, command),
    }
}
