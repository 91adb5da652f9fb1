//! Keyed local store: the durability layer under the state managers.
//!
//! A keyed store is a string-keyed, string-valued record store with
//! single-key atomic overwrite and no transactions. Records persist for as
//! long as the backend's profile does (process lifetime for
//! [`MemoryStore`], the root directory for [`FileStore`]); nothing is
//! synchronized across profiles or shared with any server.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;

/// The capability the state managers persist through.
pub trait KeyedStore: Send + Sync {
    /// Read the record stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend cannot read the record.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the record stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend cannot write the record.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
