//! Integration tests for SneakFit client state.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sneakfit-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_lifecycle` - persistence round-trips, identity isolation, and
//!   malformed-record recovery for the cart manager
//! - `wishlist_lifecycle` - the same lifecycle guarantees for the wishlist
//!
//! This crate only exports the fixture builders the test files share.

#![cfg_attr(not(test), forbid(unsafe_code))]
// Fixture builders construct from known-good literals.
#![allow(clippy::unwrap_used)]

use sneakfit_core::{CartLine, ItemDetails, Price, ProductId, Quantity, Size, WishlistEntry};

/// Build a cart line fixture with a unit price given in cents.
#[must_use]
pub fn cart_line(product: &str, size: &str, quantity: u32, cents: i64) -> CartLine {
    CartLine::new(
        ProductId::new(product),
        Size::new(size),
        Quantity::new(quantity).unwrap(),
        Price::from_cents(cents).unwrap(),
        ItemDetails {
            name: format!("Sneaker {product}"),
            brand: Some("Nike".to_owned()),
            color: Some("White/Black".to_owned()),
            image: Some(format!("https://img.sneakfit.dev/{product}.jpg")),
            description: None,
            condition: Some("new".to_owned()),
        },
    )
}

/// Build a wishlist entry fixture.
#[must_use]
pub fn wishlist_entry(product: &str) -> WishlistEntry {
    WishlistEntry::new(
        ProductId::new(product),
        ItemDetails::named(format!("Sneaker {product}")),
    )
}
