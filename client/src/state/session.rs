//! Explicit session state machine for the current tab.
//!
//! DESIGN
//! ======
//! The raw storage keys are only ever written through [`SessionEvent`]s, so
//! illegal combinations (a token without a developer profile) cannot be
//! produced by the app itself. `SessionStore::state` re-derives the state from
//! storage on every read because storage emits no change notifications.
//!
//! None of this is access control. Every value lives in client-writable
//! storage and only shapes the navigation flow; real authorization belongs to
//! the backend, per request.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;

/// Viewer profile chosen on the profile-selection screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Profile {
    Recruiter,
    Developer,
}

impl Profile {
    /// Storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Recruiter => "recruiter",
            Self::Developer => "developer",
        }
    }

    /// Parse a stored profile value. Unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "recruiter" => Some(Self::Recruiter),
            "developer" => Some(Self::Developer),
            _ => None,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque bearer credential for the developer area.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wrap a raw token. Empty strings are rejected.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(Self(raw)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

/// Session state of the current tab.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    ProfileChosen(Profile),
    /// Only a developer profile can hold a token, so the profile is implied.
    DeveloperAuthenticated { token: AuthToken },
}

impl SessionState {
    /// Profile currently chosen, if any.
    pub fn profile(&self) -> Option<Profile> {
        match self {
            Self::Unauthenticated => None,
            Self::ProfileChosen(profile) => Some(*profile),
            Self::DeveloperAuthenticated { .. } => Some(Profile::Developer),
        }
    }

    pub fn token(&self) -> Option<&AuthToken> {
        match self {
            Self::DeveloperAuthenticated { token } => Some(token),
            _ => None,
        }
    }

    /// Compute the state that follows `event`.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::NotDeveloper`] when `Login` is applied
    /// without a developer profile.
    pub fn transition(&self, event: &SessionEvent) -> Result<Self, TransitionError> {
        match event {
            SessionEvent::EnterFromLoading | SessionEvent::Unload => Ok(Self::Unauthenticated),
            SessionEvent::ChooseProfile(profile) => Ok(Self::ProfileChosen(*profile)),
            SessionEvent::Login(token) => match self.profile() {
                Some(Profile::Developer) => Ok(Self::DeveloperAuthenticated { token: token.clone() }),
                other => Err(TransitionError::NotDeveloper { current: other }),
            },
            SessionEvent::Logout => match self {
                Self::DeveloperAuthenticated { .. } => Ok(Self::ProfileChosen(Profile::Developer)),
                other => Ok(other.clone()),
            },
        }
    }
}

/// Named transitions of the session state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// Loading screen finished; grants one-shot entry to profile selection.
    EnterFromLoading,
    ChooseProfile(Profile),
    Login(AuthToken),
    Logout,
    /// Page unload, reload, or a forced exit back to the loading screen.
    Unload,
}

/// Rejected session transition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("login requires the developer profile (current: {current:?})")]
    NotDeveloper { current: Option<Profile> },
}
