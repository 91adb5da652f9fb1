//! Current-user identity as exposed by the identity provider.
//!
//! The identity provider itself is an external collaborator; this module
//! models only what the client-state subsystem consumes from it: an opaque
//! identity reference (or its absence) plus a loading flag.

use serde::{Deserialize, Serialize};

use super::id::IdentityRef;

/// The resolved identity of the current session.
///
/// Every transition between variants (login, logout, user switch)
/// invalidates the storage keys resolved under the previous identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Identity {
    /// No authenticated user; state is kept under shared guest keys.
    Guest,
    /// An authenticated user, identified by an opaque reference.
    User(IdentityRef),
}

impl Identity {
    /// Identity for a user reference.
    #[must_use]
    pub fn user(id: impl Into<IdentityRef>) -> Self {
        Self::User(id.into())
    }
}

/// What an identity source exposes: either still resolving, or a resolved
/// [`Identity`].
///
/// State managers must not run their load lifecycle while the snapshot is
/// `Loading` - acting on a stale guest identity mid-login would resolve the
/// wrong storage key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentitySnapshot {
    /// The identity source has not finished resolving.
    Loading,
    /// The identity source has resolved the current identity.
    Ready(Identity),
}

impl IdentitySnapshot {
    /// Snapshot for a resolved guest session.
    #[must_use]
    pub const fn guest() -> Self {
        Self::Ready(Identity::Guest)
    }

    /// Snapshot for a resolved user session.
    #[must_use]
    pub fn user(id: impl Into<IdentityRef>) -> Self {
        Self::Ready(Identity::user(id))
    }
}
