//! Paradise Nursery CLI - terminal storefront.
//!
//! Each invocation is one session: the cart is restored from the durable
//! slot at startup, mutated by the chosen command, and persisted again.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog, grouped by category
//! pn-cli products
//!
//! # Work with the cart
//! pn-cli cart show
//! pn-cli cart add p1
//! pn-cli cart set p1 3
//! pn-cli cart remove p1
//! pn-cli cart clear
//!
//! # Checkout (stub)
//! pn-cli checkout
//! ```
//!
//! The cart snapshot lives under the directory named by `PARADISE_DATA_DIR`
//! (default: `data`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use paradise_nursery_storefront::catalog::Catalog;
use paradise_nursery_storefront::config::StorefrontConfig;
use paradise_nursery_storefront::storage::FileSlotStore;
use paradise_nursery_storefront::store::CartStore;

mod commands;

#[derive(Parser)]
#[command(name = "pn-cli")]
#[command(author, version, about = "Paradise Nursery storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Products,
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Proceed to checkout (stub)
    Checkout,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and totals
    Show,
    /// Add one unit of a product to the cart
    Add {
        /// Product id from the catalog (e.g. p1)
        product_id: String,
    },
    /// Set the quantity of a cart line (0 or less removes it)
    Set {
        /// Product id of the cart line
        product_id: String,
        /// New quantity
        quantity: i64,
    },
    /// Remove a cart line
    Remove {
        /// Product id of the cart line
        product_id: String,
    },
    /// Empty the cart
    Clear,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env();
    let catalog = Catalog::builtin();
    let storage = FileSlotStore::new(config.data_dir);
    let mut store = CartStore::open(Box::new(storage));

    match cli.command {
        Commands::Products => commands::products::list(&catalog),
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&store),
            CartAction::Add { product_id } => {
                commands::cart::add(&catalog, &mut store, &product_id)?;
            }
            CartAction::Set {
                product_id,
                quantity,
            } => commands::cart::set(&mut store, &product_id, quantity),
            CartAction::Remove { product_id } => commands::cart::remove(&mut store, &product_id),
            CartAction::Clear => commands::cart::clear(&mut store),
        },
        Commands::Checkout => commands::cart::checkout(&store),
    }
    Ok(())
}
