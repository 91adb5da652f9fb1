//! Cart and wishlist state managers.
//!
//! Each manager owns an in-memory collection synchronized to the keyed
//! store under an identity-scoped key, with write-through on every
//! mutation. Consumers get read-only snapshots plus mutation methods; they
//! never touch the backing store directly.

pub mod cart;
pub mod repository;
pub mod wishlist;

pub use cart::CartManager;
pub use repository::CollectionRepository;
pub use wishlist::WishlistManager;

use sneakfit_core::Identity;

/// Storage key prefixes for the persisted collections.
pub mod key_prefixes {
    /// Prefix for persisted carts (`cart` / `cart_<id>`).
    pub const CART: &str = "cart";

    /// Prefix for persisted wishlists (`wishlist` / `wishlist_<id>`).
    pub const WISHLIST: &str = "wishlist";
}

/// Resolve the storage key for a collection prefix under an identity.
///
/// Guest state shares the bare prefix; user state is namespaced by the
/// identity reference: `cart` / `cart_<id>`, `wishlist` / `wishlist_<id>`.
#[must_use]
pub fn storage_key(prefix: &str, identity: &Identity) -> String {
    match identity {
        Identity::Guest => prefix.to_owned(),
        Identity::User(id) => format!("{prefix}_{id}"),
    }
}
