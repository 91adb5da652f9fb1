//! SneakFit storefront client state.
//!
//! The per-user, locally persisted cart and wishlist: a keyed local store
//! as the durability layer, and the state managers that synchronize their
//! in-memory collections to it.
//!
//! # Architecture
//!
//! - [`store`] - the [`store::KeyedStore`] contract plus the in-memory and
//!   file-backed backends
//! - [`state`] - the [`state::CartManager`] and [`state::WishlistManager`],
//!   and the repository seam they persist through
//!
//! The host application owns one manager per active session, re-runs
//! [`state::CartManager::init`] on every identity change, and reads
//! snapshots/derived values between mutations. All operations are
//! synchronous and infallible for the caller; persistence failures are
//! logged and absorbed.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use sneakfit_core::{CartLine, IdentitySnapshot, ItemDetails, Price, ProductId, Quantity, Size};
//! use sneakfit_storefront::{CartManager, MemoryStore};
//!
//! let store = Arc::new(MemoryStore::new());
//! let mut cart = CartManager::new(store);
//! cart.init(&IdentitySnapshot::user("u-7"));
//!
//! cart.add_line(CartLine::new(
//!     ProductId::new("sku-91422"),
//!     Size::new("42"),
//!     Quantity::ONE,
//!     Price::from_cents(18999).expect("non-negative"),
//!     ItemDetails::named("Air Zoom"),
//! ));
//!
//! assert_eq!(cart.lines().len(), 1);
//! assert_eq!(cart.total_price().to_string(), "$189.99");
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod state;
pub mod store;

pub use error::{Result, StoreError};
pub use state::{CartManager, WishlistManager, storage_key};
pub use store::{FileStore, KeyedStore, MemoryStore};
