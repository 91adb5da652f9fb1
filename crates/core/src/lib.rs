//! SneakFit Core - Shared types library.
//!
//! This crate provides common types used across all SneakFit components:
//! - `storefront` - Client-state library (cart and wishlist persistence)
//! - `cli` - Command-line tools for inspecting and managing persisted state
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, sizes, quantities,
//!   prices, and the cart/wishlist records built from them

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
