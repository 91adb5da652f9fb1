//! Core types for SneakFit.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod identity;
pub mod item;
pub mod price;
pub mod quantity;
pub mod size;

pub use id::*;
pub use identity::{Identity, IdentitySnapshot};
pub use item::{CartLine, ItemDetails, WishlistEntry};
pub use price::{Price, PriceError};
pub use quantity::{Quantity, QuantityError};
pub use size::Size;
