//! Wishlist management commands.
//!
//! # Usage
//!
//! ```bash
//! sneakfit --user u-7 wishlist add sku-80021 --name "Dunk Low" --brand Nike
//! sneakfit --user u-7 wishlist contains sku-80021
//! sneakfit --user u-7 wishlist show
//! sneakfit --user u-7 wishlist remove sku-80021
//! sneakfit --user u-7 wishlist clear
//! ```

use std::sync::Arc;

use clap::Subcommand;
use thiserror::Error;

use sneakfit_core::{Identity, IdentitySnapshot, ItemDetails, ProductId, WishlistEntry};
use sneakfit_storefront::{FileStore, StoreError, WishlistManager};

use crate::config::{CliConfig, ConfigError};

/// Errors that can occur while running a wishlist command.
#[derive(Debug, Error)]
pub enum WishlistCommandError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The record directory could not be opened.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Wishlist subcommands.
#[derive(Subcommand)]
pub enum WishlistAction {
    /// Save an item (saving an already-present product is a no-op)
    Add {
        /// Catalog product ID
        product_id: String,

        /// Product display name
        #[arg(short, long)]
        name: String,

        /// Brand name
        #[arg(long)]
        brand: Option<String>,

        /// Colorway
        #[arg(long)]
        color: Option<String>,

        /// Image URL
        #[arg(long)]
        image: Option<String>,

        /// Condition label
        #[arg(long)]
        condition: Option<String>,
    },
    /// Remove an item
    Remove {
        /// Catalog product ID
        product_id: String,
    },
    /// Check whether a product is on the wishlist
    Contains {
        /// Catalog product ID
        product_id: String,
    },
    /// Show the wishlist
    Show,
    /// Empty the wishlist
    Clear,
}

/// Run a wishlist command for the given identity.
///
/// # Errors
///
/// Returns `WishlistCommandError` if configuration or the store directory
/// is invalid.
pub fn run(identity: &Identity, action: WishlistAction) -> Result<(), WishlistCommandError> {
    let config = CliConfig::from_env()?;
    let store = Arc::new(FileStore::new(config.data_dir)?);

    let mut wishlist = WishlistManager::new(store);
    wishlist.init(&IdentitySnapshot::Ready(identity.clone()));

    match action {
        WishlistAction::Add {
            product_id,
            name,
            brand,
            color,
            image,
            condition,
        } => {
            wishlist.add_entry(WishlistEntry::new(
                ProductId::new(product_id),
                ItemDetails {
                    name,
                    brand,
                    color,
                    image,
                    description: None,
                    condition,
                },
            ));
            tracing::info!("Wishlist now holds {} item(s)", wishlist.entries().len());
        }
        WishlistAction::Remove { product_id } => {
            wishlist.remove_entry(&ProductId::new(product_id));
            tracing::info!("Wishlist now holds {} item(s)", wishlist.entries().len());
        }
        WishlistAction::Contains { product_id } => {
            let product_id = ProductId::new(product_id);
            if wishlist.contains(&product_id) {
                tracing::info!("{product_id} is on the wishlist");
            } else {
                tracing::info!("{product_id} is not on the wishlist");
            }
        }
        WishlistAction::Show => {
            if wishlist.is_empty() {
                tracing::info!("Wishlist is empty");
            } else {
                for entry in wishlist.entries() {
                    match &entry.details.brand {
                        Some(brand) => {
                            tracing::info!("{} | {} | {}", entry.product_id, entry.details.name, brand);
                        }
                        None => {
                            tracing::info!("{} | {}", entry.product_id, entry.details.name);
                        }
                    }
                }
            }
        }
        WishlistAction::Clear => {
            wishlist.clear();
            tracing::info!("Wishlist cleared");
        }
    }

    Ok(())
}
