//! Session store — the single owner of authentication state.

use std::sync::RwLock;

use sentinel_core::models::AuthUser;
use tracing::{debug, warn};

use crate::credentials::{CredentialStore, AUTH_TOKEN_KEY, AUTH_USER_KEY};
use crate::error::StoreError;

/// Invariant: either both token and user are present (authenticated)
/// or both are absent (unauthenticated). No partial population.
#[derive(Debug, Default)]
struct AuthState {
    token: Option<String>,
    user: Option<AuthUser>,
}

/// Holds the authenticated session and persists it across restarts.
///
/// Durable-storage writes and deletes are this component's only side
/// effects; it never performs network calls. All mutation flows
/// through [`login`](Self::login), [`logout`](Self::logout),
/// [`restore`](Self::restore) and [`invalidate`](Self::invalidate).
#[derive(Debug)]
pub struct SessionStore<S: CredentialStore> {
    storage: S,
    state: RwLock<AuthState>,
}

impl<S: CredentialStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            state: RwLock::new(AuthState::default()),
        }
    }

    /// Mark the session authenticated and persist both entries.
    ///
    /// No client-side validation of token shape or expiry is
    /// performed; the token is opaque to this client.
    pub fn login(&self, token: String, user: AuthUser) -> Result<(), StoreError> {
        let serialized = serde_json::to_string(&user)?;
        self.storage.set(AUTH_TOKEN_KEY, &token)?;
        self.storage.set(AUTH_USER_KEY, &serialized)?;

        let mut state = self.state.write().expect("session lock poisoned");
        state.token = Some(token);
        state.user = Some(user);
        debug!("session authenticated");
        Ok(())
    }

    /// Unconditionally clear the session and both persisted entries.
    pub fn logout(&self) {
        self.clear_persisted();
        let mut state = self.state.write().expect("session lock poisoned");
        state.token = None;
        state.user = None;
        debug!("session cleared");
    }

    /// One-shot startup restore from durable storage.
    ///
    /// Restores authenticated state only when both entries are present
    /// and the user entry parses. Anything else (missing entry,
    /// unreadable storage, malformed user record) clears both entries
    /// and leaves the session unauthenticated; malformed persisted
    /// state is treated as absence, never as a fatal error.
    pub fn restore(&self) {
        let token = self.storage.get(AUTH_TOKEN_KEY).ok().flatten();
        let raw_user = self.storage.get(AUTH_USER_KEY).ok().flatten();

        let restored = match (token, raw_user) {
            (Some(token), Some(raw)) => match serde_json::from_str::<AuthUser>(&raw) {
                Ok(user) => Some((token, user)),
                Err(e) => {
                    warn!(error = %e, "stored user record is malformed, resetting session");
                    None
                }
            },
            _ => None,
        };

        match restored {
            Some((token, user)) => {
                let mut state = self.state.write().expect("session lock poisoned");
                state.token = Some(token);
                state.user = Some(user);
                debug!("session restored from storage");
            }
            None => {
                self.clear_persisted();
                let mut state = self.state.write().expect("session lock poisoned");
                state.token = None;
                state.user = None;
            }
        }
    }

    /// Drop the session after the backend rejected its token (401):
    /// both persisted entries are cleared immediately and the in-memory
    /// state follows, keeping the all-or-nothing invariant.
    pub fn invalidate(&self) {
        warn!("bearer token rejected by backend, clearing session");
        self.logout();
    }

    pub fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .expect("session lock poisoned")
            .token
            .is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.state
            .read()
            .expect("session lock poisoned")
            .token
            .clone()
    }

    pub fn auth_user(&self) -> Option<AuthUser> {
        self.state
            .read()
            .expect("session lock poisoned")
            .user
            .clone()
    }

    fn clear_persisted(&self) {
        for key in [AUTH_TOKEN_KEY, AUTH_USER_KEY] {
            if let Err(e) = self.storage.remove(key) {
                warn!(key, error = %e, "failed to clear persisted credential entry");
            }
        }
    }
}
