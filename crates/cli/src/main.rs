//! SneakFit CLI - Inspect and manage locally persisted storefront state.
//!
//! # Usage
//!
//! ```bash
//! # Add a pair to a user's cart
//! sneakfit --user u-7 cart add sku-91422 --size 42 --name "Air Zoom" --price 189.99
//!
//! # Show the guest cart
//! sneakfit cart show
//!
//! # Move a line to another size (merges if the destination exists)
//! sneakfit --user u-7 cart set-size sku-91422 --from 42 --to 43
//!
//! # Wishlist operations
//! sneakfit --user u-7 wishlist add sku-80021 --name "Dunk Low"
//! sneakfit --user u-7 wishlist show
//! ```
//!
//! # Commands
//!
//! - `cart` - add/remove/set-quantity/set-size/show/clear a persisted cart
//! - `wishlist` - add/remove/contains/show/clear a persisted wishlist
//!
//! State lives in the directory named by `SNEAKFIT_DATA_DIR` (default
//! `.sneakfit`), one record file per identity-scoped key.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use sneakfit_core::Identity;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "sneakfit")]
#[command(author, version, about = "SneakFit CLI tools")]
struct Cli {
    /// Identity reference to operate on (omit for the guest cart/wishlist)
    #[arg(short, long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage a persisted cart
    Cart {
        #[command(subcommand)]
        action: commands::cart::CartAction,
    },
    /// Manage a persisted wishlist
    Wishlist {
        #[command(subcommand)]
        action: commands::wishlist::WishlistAction,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let identity = cli
        .user
        .map_or(Identity::Guest, Identity::user);

    match cli.command {
        Commands::Cart { action } => commands::cart::run(&identity, action)?,
        Commands::Wishlist { action } => commands::wishlist::run(&identity, action)?,
    }
    Ok(())
}
