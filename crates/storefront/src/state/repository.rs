//! Persistence seam between the state managers and the keyed store.
//!
//! The managers load and save whole collections; how a collection becomes
//! a stored record (JSON today) and where it lands (memory, file) is this
//! module's concern, so backends swap without touching manager logic.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::store::KeyedStore;

/// Loads and saves a serialized collection under a store key.
///
/// Failures never escape: a missing, unreadable, or malformed record loads
/// as the empty collection (logged, not surfaced - the record is simply
/// overwritten by the next successful save), and a failed save is logged
/// and absorbed so manager operations stay infallible.
pub struct CollectionRepository<T> {
    store: Arc<dyn KeyedStore>,
    _record: PhantomData<fn() -> T>,
}

impl<T> CollectionRepository<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Create a repository over a shared keyed store.
    #[must_use]
    pub fn new(store: Arc<dyn KeyedStore>) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// Load the collection stored under `key`.
    ///
    /// Missing records and any read or deserialization failure load as the
    /// empty collection.
    pub fn load(&self, key: &str) -> Vec<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read stored collection, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding malformed stored collection");
                Vec::new()
            }
        }
    }

    /// Replace the record under `key` with the full collection.
    pub fn save(&self, key: &str, items: &[T]) {
        let raw = match serde_json::to_string(items) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to serialize collection, record not updated");
                return;
            }
        };

        if let Err(e) = self.store.set(key, &raw) {
            tracing::warn!(key, error = %e, "failed to persist collection, keeping in-memory state");
        }
    }
}
