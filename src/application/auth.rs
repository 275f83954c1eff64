/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Session state of an authenticated client
//!
//! This module holds the in-memory credentials of one client:
//! - Access and refresh tokens
//! - The authenticated user
//! - A guard that clears everything when dropped, used by logout

use crate::presentation::user::User;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Tokens and user of the current session
///
/// The client is authenticated exactly when `access_token` is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionCredentials {
    /// Bearer token sent with every request
    pub access_token: Option<String>,
    /// Token exchanged for a new pair when the access token expires
    pub refresh_token: Option<String>,
    /// User returned at login
    pub current_user: Option<User>,
}

impl SessionCredentials {
    /// Checks if an access token is held
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Checks if a refresh can be attempted
    #[must_use]
    pub fn can_refresh(&self) -> bool {
        self.refresh_token.is_some()
    }
}

/// Owner of the session credentials of one client
///
/// Locks are only held for the duration of a field copy, never across an
/// `.await`.
#[derive(Debug, Default)]
pub struct SessionStore {
    credentials: RwLock<SessionCredentials>,
}

impl SessionStore {
    /// Creates an empty (unauthenticated) store
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionCredentials> {
        self.credentials
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionCredentials> {
        self.credentials
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the whole session
    #[must_use]
    pub fn snapshot(&self) -> SessionCredentials {
        self.read().clone()
    }

    /// Current access token
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.read().access_token.clone()
    }

    /// Current refresh token
    #[must_use]
    pub fn refresh_token(&self) -> Option<String> {
        self.read().refresh_token.clone()
    }

    /// User of the session
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.read().current_user.clone()
    }

    /// Checks if an access token is held
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated()
    }

    /// Stores the result of a successful login
    pub fn establish(&self, access_token: String, refresh_token: String, user: User) {
        *self.write() = SessionCredentials {
            access_token: Some(access_token),
            refresh_token: Some(refresh_token),
            current_user: Some(user),
        };
    }

    /// Replaces the token pair after a refresh, keeping the user
    pub fn rotate(&self, access_token: String, refresh_token: String) {
        let mut credentials = self.write();
        credentials.access_token = Some(access_token);
        credentials.refresh_token = Some(refresh_token);
    }

    /// Forgets tokens and user
    pub fn clear(&self) {
        *self.write() = SessionCredentials::default();
        debug!("Session credentials cleared");
    }

    /// Returns a guard that clears the session when it goes out of scope
    ///
    /// The clearing also happens when the owning future is dropped half way.
    #[must_use = "the session is cleared when the guard is dropped"]
    pub fn clear_on_drop(&self) -> ClearOnDrop<'_> {
        ClearOnDrop { store: self }
    }
}

/// Clears a [`SessionStore`] on drop
pub struct ClearOnDrop<'a> {
    store: &'a SessionStore,
}

impl Drop for ClearOnDrop<'_> {
    fn drop(&mut self) {
        self.store.clear();
    }
}
