//! Session store: restore / login / logout over an injected key-value store.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use syncstudy_core::{AuthToken, PrincipalId};
use syncstudy_storage::KeyValueStore;

use crate::roles::RoleSet;
use crate::session::{Identity, Session};

// Persisted keys, kept compatible with the deployed client.
const KEY_TOKEN: &str = "token";
const KEY_USER_ID: &str = "userId";
const KEY_USERNAME: &str = "username";

/// Process-wide session store.
///
/// One instance is constructed by the application root and injected into
/// every component that reads or mutates the session. Single writer
/// (`restore`/`login`/`logout`), many readers. Each mutation swaps the whole
/// session value under the lock, so no reader ever observes a partially
/// updated session.
///
/// Storage faults are non-fatal everywhere: the session keeps working
/// in memory and simply stops surviving restarts.
pub struct SessionStore {
    state: RwLock<Session>,
    storage: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    /// Create a store in the initial logged-out state. Call [`restore`]
    /// before the first navigation is evaluated.
    ///
    /// [`restore`]: SessionStore::restore
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            state: RwLock::new(Session::LoggedOut),
            storage,
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, Session> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, Session> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    fn stored(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value.filter(|v| !v.trim().is_empty()),
            Err(e) => {
                tracing::warn!(key, error = %e, "durable storage read failed; treating key as absent");
                None
            }
        }
    }

    fn store(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set(key, value) {
            tracing::warn!(key, error = %e, "durable storage write failed; session will not survive a restart");
        }
    }

    fn discard(&self, key: &str) {
        if let Err(e) = self.storage.remove(key) {
            tracing::warn!(key, error = %e, "durable storage delete failed");
        }
    }

    /// Restore a previously persisted session, once at boot.
    ///
    /// Empty storage is the normal logged-out start, not an error. Roles are
    /// not persisted, so a restored session starts with the empty role set
    /// until the next login.
    pub fn restore(&self) {
        let token = self.stored(KEY_TOKEN).and_then(|v| AuthToken::new(v).ok());
        let principal_id = self
            .stored(KEY_USER_ID)
            .and_then(|v| PrincipalId::new(v).ok());

        let (Some(token), Some(principal_id)) = (token, principal_id) else {
            tracing::debug!("no persisted session; starting logged out");
            return;
        };

        let identity = Identity {
            token,
            principal_id,
            display_name: self.stored(KEY_USERNAME),
            roles: RoleSet::empty(),
        };

        tracing::info!(
            principal = %identity.principal_id,
            "restored persisted session; roles reset until next login"
        );
        *self.write_state() = Session::LoggedIn(identity);
    }

    /// Transition to the logged-in state and persist the session tuple.
    ///
    /// The token and principal id are validated at construction, so this
    /// cannot fail; a storage-write failure degrades to an in-memory-only
    /// session.
    pub fn login(
        &self,
        token: AuthToken,
        display_name: Option<String>,
        principal_id: PrincipalId,
        roles: RoleSet,
    ) {
        self.store(KEY_TOKEN, token.as_str());
        self.store(KEY_USER_ID, principal_id.as_str());
        match &display_name {
            Some(name) => self.store(KEY_USERNAME, name),
            None => self.discard(KEY_USERNAME),
        }

        tracing::info!(principal = %principal_id, "logged in");
        *self.write_state() = Session::LoggedIn(Identity {
            token,
            principal_id,
            display_name,
            roles,
        });
    }

    /// Reset to the initial state and delete the persisted keys.
    /// Idempotent: logging out while logged out is a no-op.
    pub fn logout(&self) {
        self.discard(KEY_TOKEN);
        self.discard(KEY_USER_ID);
        self.discard(KEY_USERNAME);

        let mut state = self.write_state();
        if state.is_authenticated() {
            tracing::info!("logged out");
        }
        *state = Session::LoggedOut;
    }

    /// Snapshot of the current session.
    pub fn current(&self) -> Session {
        self.read_state().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read_state().is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.read_state().is_admin()
    }

    pub fn is_super_admin(&self) -> bool {
        self.read_state().is_super_admin()
    }

    /// `Authorization` header value for the authorized HTTP client.
    pub fn bearer_header(&self) -> Option<String> {
        self.read_state().bearer_header()
    }
}
