//! Session manager.
//!
//! The panel has at most one logged-in user, stored under the
//! `usuarioActual` key of the same store that holds the collections.

use almacen_core::CurrentUser;
use almacen_core::keys::CURRENT_USER;

use crate::middleware::AuthRejection;
use crate::store::{JsonStore, StoreError};

/// Reads and writes the current session user.
#[derive(Debug, Clone)]
pub struct SessionManager {
    store: JsonStore,
}

impl SessionManager {
    /// Create a session manager over `store`.
    #[must_use]
    pub const fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// The logged-in user, if any. A corrupt session record counts as none.
    #[must_use]
    pub fn current_user(&self) -> Option<CurrentUser> {
        self.store.get_optional(CURRENT_USER)
    }

    /// Start a session for `user`, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be persisted.
    pub fn set_current_user(&self, user: &CurrentUser) -> Result<(), StoreError> {
        self.store.set(CURRENT_USER, user)?;
        tracing::info!(username = %user.username, role = %user.role, "Session started");
        Ok(())
    }

    /// End the session. Logging out without a session is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the change cannot be persisted.
    pub fn logout(&self) -> Result<(), StoreError> {
        self.store.remove(CURRENT_USER)?;
        tracing::info!("Session cleared");
        Ok(())
    }

    /// The logged-in user, or a rejection that redirects to the login page.
    ///
    /// # Errors
    ///
    /// Returns [`AuthRejection::RedirectToLogin`] when there is no session.
    pub fn require_auth(&self) -> Result<CurrentUser, AuthRejection> {
        self.current_user().ok_or_else(|| {
            tracing::debug!("No session, redirecting to login");
            AuthRejection::RedirectToLogin
        })
    }
}
