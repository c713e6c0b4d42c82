//! The signed-in session.
//!
//! A [`Session`] is an explicit object created at process start and handed
//! (by clone) to every use case that needs to know who is signed in. Clones
//! share the same state. Only the session use case establishes or clears it.

use photofeed_domain::{Identity, IdentityId};
use std::sync::{Arc, PoisonError, RwLock};

/// Shared handle to the current session
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Arc<RwLock<Option<Identity>>>,
}

impl Session {
    /// A fresh, unauthenticated session
    pub fn new() -> Self {
        Self::default()
    }

    /// The signed-in identity, if any
    pub fn current_identity(&self) -> Option<Identity> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Id of the signed-in identity, if any
    pub fn viewer_id(&self) -> Option<IdentityId> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|identity| identity.id.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub(crate) fn establish(&self, identity: Identity) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(identity);
    }

    pub(crate) fn clear(&self) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
