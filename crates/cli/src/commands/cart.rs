//! Cart management commands.
//!
//! # Usage
//!
//! ```bash
//! # Add (or merge) a line
//! sneakfit --user u-7 cart add sku-91422 --size 42 --name "Air Zoom" \
//!     --price 189.99 --quantity 1 --brand Nike
//!
//! # Inspect, update, and clear
//! sneakfit --user u-7 cart show
//! sneakfit --user u-7 cart set-quantity sku-91422 --size 42 --quantity 2
//! sneakfit --user u-7 cart set-size sku-91422 --from 42 --to 43
//! sneakfit --user u-7 cart remove sku-91422 --size 43
//! sneakfit --user u-7 cart clear
//! ```

use std::sync::Arc;

use clap::Subcommand;
use rust_decimal::Decimal;
use thiserror::Error;

use sneakfit_core::{
    CartLine, Identity, IdentitySnapshot, ItemDetails, Price, PriceError, ProductId, Quantity,
    QuantityError, Size,
};
use sneakfit_storefront::{CartManager, FileStore, StoreError};

use crate::config::{CliConfig, ConfigError};

/// Errors that can occur while running a cart command.
#[derive(Debug, Error)]
pub enum CartCommandError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The record directory could not be opened.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Quantity argument below the minimum of 1.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(#[from] QuantityError),

    /// Negative price argument.
    #[error("Invalid price: {0}")]
    InvalidPrice(#[from] PriceError),
}

/// Cart subcommands.
#[derive(Subcommand)]
pub enum CartAction {
    /// Add an item, merging into an existing line at the same product+size
    Add {
        /// Catalog product ID
        product_id: String,

        /// Size label (e.g. "42", "10.5 US")
        #[arg(short, long)]
        size: String,

        /// Product display name
        #[arg(short, long)]
        name: String,

        /// Number of units
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,

        /// Unit price in dollars (snapshotted onto the line)
        #[arg(short, long, default_value = "0")]
        price: Decimal,

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
    /// Remove a line
    Remove {
        /// Catalog product ID
        product_id: String,

        /// Size label of the line to remove
        #[arg(short, long)]
        size: String,
    },
    /// Set a line's quantity
    SetQuantity {
        /// Catalog product ID
        product_id: String,

        /// Size label of the line to update
        #[arg(short, long)]
        size: String,

        /// New number of units (at least 1)
        #[arg(short, long)]
        quantity: u32,
    },
    /// Move a line to another size, merging if the destination exists
    SetSize {
        /// Catalog product ID
        product_id: String,

        /// Current size label
        #[arg(long)]
        from: String,

        /// New size label
        #[arg(long)]
        to: String,
    },
    /// Show the cart
    Show,
    /// Empty the cart
    Clear,
}

/// Run a cart command for the given identity.
///
/// # Errors
///
/// Returns `CartCommandError` if configuration, the store directory, or a
/// command argument is invalid.
pub fn run(identity: &Identity, action: CartAction) -> Result<(), CartCommandError> {
    let config = CliConfig::from_env()?;
    let store = Arc::new(FileStore::new(config.data_dir)?);

    let mut cart = CartManager::new(store);
    cart.init(&IdentitySnapshot::Ready(identity.clone()));

    match action {
        CartAction::Add {
            product_id,
            size,
            name,
            quantity,
            price,
            brand,
            color,
            image,
            condition,
        } => {
            let line = CartLine::new(
                ProductId::new(product_id),
                Size::new(size),
                Quantity::new(quantity)?,
                Price::new(price)?,
                ItemDetails {
                    name,
                    brand,
                    color,
                    image,
                    description: None,
                    condition,
                },
            );
            cart.add_line(line);
            tracing::info!(
                "Cart now holds {} unit(s) across {} line(s), total {}",
                cart.item_count(),
                cart.lines().len(),
                cart.total_price()
            );
        }
        CartAction::Remove { product_id, size } => {
            cart.remove_line(&ProductId::new(product_id), &Size::new(size));
            tracing::info!(
                "Cart now holds {} line(s), total {}",
                cart.lines().len(),
                cart.total_price()
            );
        }
        CartAction::SetQuantity {
            product_id,
            size,
            quantity,
        } => {
            // Validate here so misuse is reported instead of silently
            // dropped by the manager.
            let quantity = Quantity::new(quantity)?;
            cart.set_quantity(&ProductId::new(product_id), &Size::new(size), quantity.get());
            tracing::info!("Cart total is now {}", cart.total_price());
        }
        CartAction::SetSize {
            product_id,
            from,
            to,
        } => {
            cart.change_size(&ProductId::new(product_id), &Size::new(from), Size::new(to));
            tracing::info!("Cart now holds {} line(s)", cart.lines().len());
        }
        CartAction::Show => {
            if cart.is_empty() {
                tracing::info!("Cart is empty");
            } else {
                for line in cart.lines() {
                    tracing::info!(
                        "{} | size {} | qty {} | {} each | {} | {}",
                        line.product_id,
                        line.size,
                        line.quantity,
                        line.unit_price,
                        line.line_total(),
                        line.details.name
                    );
                }
                tracing::info!(
                    "{} unit(s), total {}",
                    cart.item_count(),
                    cart.total_price()
                );
            }
        }
        CartAction::Clear => {
            cart.clear();
            tracing::info!("Cart cleared");
        }
    }

    Ok(())
}
