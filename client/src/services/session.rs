//! Login, registration, bootstrap and logout flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session services are the only writers of the persisted token. A
//! failed bootstrap check is the only automatic logout path.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::PortalApi;
use crate::net::error::ApiError;
use crate::net::types::{Credentials, Listing, LoginResponse, Registration, Role};
use crate::state::listings::ListingFilters;
use crate::state::session::Session;
use crate::state::toast::Toast;
use crate::util::storage::TokenStore;

pub const LOGIN_OK: &str = "Login successful";
pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTER_OK: &str = "Registration successful. Please log in.";
pub const REGISTER_FAILED: &str = "Registration failed";
pub const CREDENTIALS_REQUIRED: &str = "Email and password are required";
pub const SESSION_EXPIRED: &str = "Session expired. Please log in again.";
pub const LOGGED_OUT: &str = "Logged out";

/// Result of a login or registration attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthOutcome {
    /// Token persisted; `listings` is the refresh issued right after login.
    SignedIn { session: Session, listings: Result<Vec<Listing>, ApiError> },
    /// Account created; the user still has to sign in.
    Registered,
    /// Nothing was persisted; the message is user-facing.
    Failed(String),
}

impl AuthOutcome {
    pub fn toast(&self) -> Toast {
        match self {
            Self::SignedIn { .. } => Toast::success(LOGIN_OK),
            Self::Registered => Toast::success(REGISTER_OK),
            Self::Failed(message) => Toast::error(message.clone()),
        }
    }

    pub fn succeeded(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }
}

/// Result of checking a persisted token at startup.
#[derive(Clone, Debug, PartialEq)]
pub enum RestoreOutcome {
    NoToken,
    Restored { session: Session, listings: Result<Vec<Listing>, ApiError> },
    /// The backend rejected the token; storage has been cleared.
    Expired,
}

impl RestoreOutcome {
    pub fn toast(&self) -> Option<Toast> {
        match self {
            Self::Expired => Some(Toast::error(SESSION_EXPIRED)),
            Self::NoToken | Self::Restored { .. } => None,
        }
    }
}

fn credentials(email: &str, password: &str) -> Option<Credentials> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return None;
    }
    Some(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Exchange credentials for a token, persist it, and load listings.
pub async fn login(
    api: &dyn PortalApi,
    tokens: &dyn TokenStore,
    email: &str,
    password: &str,
    filters: &ListingFilters,
) -> AuthOutcome {
    let Some(credentials) = credentials(email, password) else {
        return AuthOutcome::Failed(CREDENTIALS_REQUIRED.to_owned());
    };
    match api.login(&credentials).await {
        Ok(LoginResponse { token, user }) => {
            tokens.save(&token);
            leptos::logging::log!("signed in as {} ({})", user.email, user.role.as_str());
            let listings = api.listings(&token, filters).await;
            AuthOutcome::SignedIn { session: Session { token, user }, listings }
        }
        Err(e) => {
            leptos::logging::warn!("login failed: {e}");
            AuthOutcome::Failed(e.user_message(LOGIN_FAILED))
        }
    }
}

/// Create an account. Registration never signs the user in.
pub async fn register(api: &dyn PortalApi, email: &str, password: &str, role: Role) -> AuthOutcome {
    let Some(Credentials { email, password }) = credentials(email, password) else {
        return AuthOutcome::Failed(CREDENTIALS_REQUIRED.to_owned());
    };
    match api.register(&Registration { email, password, role }).await {
        Ok(()) => AuthOutcome::Registered,
        Err(e) => {
            leptos::logging::warn!("registration failed: {e}");
            AuthOutcome::Failed(e.user_message(REGISTER_FAILED))
        }
    }
}

/// Revalidate a persisted token. Any failure clears the stored token.
pub async fn restore(api: &dyn PortalApi, tokens: &dyn TokenStore, filters: &ListingFilters) -> RestoreOutcome {
    let Some(token) = tokens.load() else {
        return RestoreOutcome::NoToken;
    };
    match api.current_user(&token).await {
        Ok(user) => {
            let listings = api.listings(&token, filters).await;
            RestoreOutcome::Restored { session: Session { token, user }, listings }
        }
        Err(e) => {
            leptos::logging::warn!("stored session rejected: {e}");
            tokens.clear();
            RestoreOutcome::Expired
        }
    }
}

/// Forget the persisted token. Callers clear in-memory state.
pub fn logout(tokens: &dyn TokenStore) -> Toast {
    tokens.clear();
    leptos::logging::log!("logged out");
    Toast::success(LOGGED_OUT)
}
