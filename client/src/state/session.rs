//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the header (sign-in vs logout), the welcome banner and the listing
//! form gate. Only the session services write it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{Role, User};

/// An authenticated session. The user is never held without its token.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Which auth form the header toggle currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::Register,
            Self::Register => Self::SignIn,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::Register => "Register",
        }
    }
}

/// Session state shared through context as `RwSignal<SessionState>`.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub current: Option<Session>,
    pub mode: AuthMode,
    /// True while a stored token is being checked against `/api/user`.
    pub restoring: bool,
    /// True while a login/register request is in flight.
    pub submitting: bool,
}

impl SessionState {
    pub fn sign_in(&mut self, session: Session) {
        self.current = Some(session);
        self.restoring = false;
    }

    pub fn sign_out(&mut self) {
        self.current = None;
        self.restoring = false;
        self.mode = AuthMode::SignIn;
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    pub fn user(&self) -> Option<&User> {
        self.current.as_ref().map(|s| &s.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Only verified agents may publish listings.
    pub fn can_create_listings(&self) -> bool {
        self.user().is_some_and(|u| u.role == Role::Agent && u.verified)
    }

    /// Agents that still await verification get a notice instead of the form.
    pub fn awaiting_verification(&self) -> bool {
        self.user().is_some_and(|u| u.role == Role::Agent && !u.verified)
    }
}
