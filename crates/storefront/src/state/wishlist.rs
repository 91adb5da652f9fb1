//! Wishlist state manager.
//!
//! Same lifecycle, key resolution, and write-through as the cart manager,
//! over the saved-for-later collection keyed by product alone.

use std::sync::Arc;

use tracing::instrument;

use sneakfit_core::{IdentitySnapshot, ProductId, WishlistEntry};

use crate::store::KeyedStore;

use super::repository::CollectionRepository;
use super::{key_prefixes, storage_key};

/// State manager for the current identity's wishlist.
pub struct WishlistManager {
    repository: CollectionRepository<WishlistEntry>,
    key: String,
    entries: Vec<WishlistEntry>,
    initialized: bool,
}

impl WishlistManager {
    /// Create a manager over a shared keyed store.
    ///
    /// The manager starts uninitialized; call [`WishlistManager::init`]
    /// with the current identity snapshot before use.
    #[must_use]
    pub fn new(store: Arc<dyn KeyedStore>) -> Self {
        Self {
            repository: CollectionRepository::new(store),
            key: key_prefixes::WISHLIST.to_owned(),
            entries: Vec::new(),
            initialized: false,
        }
    }

    /// Re-run the load lifecycle for an identity change.
    ///
    /// A `Loading` snapshot is ignored. For a resolved identity, in-memory
    /// state is replaced by the stored collection under the new key, or the
    /// empty collection when nothing readable is stored there.
    #[instrument(skip(self, snapshot))]
    pub fn init(&mut self, snapshot: &IdentitySnapshot) {
        let IdentitySnapshot::Ready(identity) = snapshot else {
            tracing::debug!("identity still resolving, deferring wishlist load");
            return;
        };

        self.initialized = false;
        self.key = storage_key(key_prefixes::WISHLIST, identity);
        self.entries = self.repository.load(&self.key);
        self.initialized = true;
    }

    /// Drop in-memory state and disable write-back, without writing.
    pub fn dispose(&mut self) {
        self.initialized = false;
        self.entries.clear();
    }

    /// Whether the load lifecycle has completed for the current identity.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Save an entry; a product already on the wishlist is a no-op.
    pub fn add_entry(&mut self, entry: WishlistEntry) {
        if self.contains(&entry.product_id) {
            return;
        }
        self.entries.push(entry);
        self.persist();
    }

    /// Remove the entry for `product_id`; absent match is a no-op.
    pub fn remove_entry(&mut self, product_id: &ProductId) {
        let Some(index) = self
            .entries
            .iter()
            .position(|e| &e.product_id == product_id)
        else {
            return;
        };
        self.entries.remove(index);
        self.persist();
    }

    /// Whether `product_id` is on the wishlist.
    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.entries.iter().any(|e| &e.product_id == product_id)
    }

    /// Replace the wishlist with the empty collection.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    /// Read-only snapshot of the entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    /// Whether the wishlist has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the full collection through to the current key.
    fn persist(&self) {
        if !self.initialized {
            return;
        }
        self.repository.save(&self.key, &self.entries);
    }
}
