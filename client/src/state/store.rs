//! Session store over the browser's two storage scopes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation guard, history locks, and pages read session flags only
//! through [`SessionStore`]. One instance is created by the app root and
//! provided via context. Mutations are visible to the next read immediately;
//! nothing is broadcast, so every view re-reads on entry.
//!
//! Each [`SessionKey`] has a fixed [`StorageScope`]: durable keys map to
//! `localStorage`, the one-shot loading permit maps to `sessionStorage`.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use super::session::{AuthToken, Profile, SessionEvent, SessionState, TransitionError};

/// Storage lifetime of a session key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageScope {
    /// Survives reloads until explicitly cleared (`localStorage`).
    Durable,
    /// Tab-scoped, single-use permission flags (`sessionStorage`).
    OneShot,
}

/// Keys held by the session store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionKey {
    SelectedProfile,
    AuthToken,
    PortfolioAccess,
    FromLoadingScreen,
}

impl SessionKey {
    pub const ALL: [SessionKey; 4] =
        [Self::SelectedProfile, Self::AuthToken, Self::PortfolioAccess, Self::FromLoadingScreen];

    /// Keys cleared on unload and on loading-screen entry.
    pub const DURABLE: [SessionKey; 3] = [Self::SelectedProfile, Self::AuthToken, Self::PortfolioAccess];

    /// Storage key name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SelectedProfile => "selectedProfile",
            Self::AuthToken => "authToken",
            Self::PortfolioAccess => "portfolioAccess",
            Self::FromLoadingScreen => "fromLoadingScreen",
        }
    }

    pub fn scope(self) -> StorageScope {
        match self {
            Self::FromLoadingScreen => StorageScope::OneShot,
            Self::SelectedProfile | Self::AuthToken | Self::PortfolioAccess => StorageScope::Durable,
        }
    }
}

/// Raw key/value storage split by scope.
///
/// Implementations are best-effort: write failures are dropped, because the
/// browser may refuse storage access (private mode, quota) and nothing above
/// this layer can recover from that.
pub trait StorageBackend {
    fn read(&self, scope: StorageScope, key: &str) -> Option<String>;
    fn write(&self, scope: StorageScope, key: &str, value: &str);
    fn remove(&self, scope: StorageScope, key: &str);
}

/// In-memory backend used by SSR and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<(StorageScope, String), String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries across both scopes.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, scope: StorageScope, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.get(&(scope, key.to_owned())).cloned()
    }

    fn write(&self, scope: StorageScope, key: &str, value: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert((scope, key.to_owned()), value.to_owned());
    }

    fn remove(&self, scope: StorageScope, key: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(&(scope, key.to_owned()));
    }
}

/// Typed access to the session keys.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<B> {
    backend: B,
}

impl<B: StorageBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Read a key. Empty strings read as unset.
    pub fn get(&self, key: SessionKey) -> Option<String> {
        self.backend
            .read(key.scope(), key.as_str())
            .filter(|value| !value.is_empty())
    }

    pub fn is_set(&self, key: SessionKey) -> bool {
        self.get(key).is_some()
    }

    /// True when the key holds the literal flag value `"true"`.
    pub fn flag(&self, key: SessionKey) -> bool {
        self.get(key).as_deref() == Some("true")
    }

    pub fn set(&self, key: SessionKey, value: &str) {
        self.backend.write(key.scope(), key.as_str(), value);
    }

    pub fn set_flag(&self, key: SessionKey) {
        self.set(key, "true");
    }

    /// Remove a key. Clearing an absent key is a no-op.
    pub fn clear(&self, key: SessionKey) {
        self.backend.remove(key.scope(), key.as_str());
    }

    pub fn clear_all(&self, keys: &[SessionKey]) {
        for key in keys {
            self.clear(*key);
        }
    }

    /// Clear every session key in both scopes.
    pub fn reset(&self) {
        self.clear_all(&SessionKey::ALL);
    }

    /// Stored profile, when it parses as a known profile.
    pub fn selected_profile(&self) -> Option<Profile> {
        self.get(SessionKey::SelectedProfile)
            .as_deref()
            .and_then(Profile::parse)
    }

    pub fn auth_token(&self) -> Option<AuthToken> {
        self.get(SessionKey::AuthToken).and_then(AuthToken::new)
    }

    pub fn from_loading_screen(&self) -> bool {
        self.flag(SessionKey::FromLoadingScreen)
    }

    /// Derive the session state from storage.
    ///
    /// A stored token only counts while the developer profile is selected.
    pub fn state(&self) -> SessionState {
        match self.selected_profile() {
            None => SessionState::Unauthenticated,
            Some(Profile::Developer) => match self.auth_token() {
                Some(token) => SessionState::DeveloperAuthenticated { token },
                None => SessionState::ProfileChosen(Profile::Developer),
            },
            Some(profile) => SessionState::ProfileChosen(profile),
        }
    }

    /// Apply a session event and persist the resulting keys.
    ///
    /// # Errors
    ///
    /// Returns the [`TransitionError`] from [`SessionState::transition`];
    /// storage is left untouched in that case.
    pub fn apply(&self, event: SessionEvent) -> Result<SessionState, TransitionError> {
        let next = self.state().transition(&event)?;
        match &event {
            SessionEvent::EnterFromLoading => {
                self.clear_all(&SessionKey::DURABLE);
                self.set_flag(SessionKey::FromLoadingScreen);
            }
            SessionEvent::ChooseProfile(profile) => {
                self.set(SessionKey::SelectedProfile, profile.as_str());
                self.clear(SessionKey::AuthToken);
                self.clear(SessionKey::FromLoadingScreen);
            }
            SessionEvent::Login(token) => self.set(SessionKey::AuthToken, token.as_str()),
            SessionEvent::Logout => self.clear(SessionKey::AuthToken),
            SessionEvent::Unload => self.reset(),
        }
        log::debug!("session event {event:?} -> {next:?}");
        Ok(next)
    }
}
