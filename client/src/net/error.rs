//! Error taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is non-fatal: callers turn an `ApiError` into a toast via
//! `user_message`, preferring the server's own message when it sent one.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::de::DeserializeOwned;

use super::types::ApiErrorBody;

/// Failure of a single backend request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, offline, ...).
    #[error("request failed: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    /// A success response body did not match the expected schema.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message to show the user: the server's message if present, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }

    /// True when the backend rejected the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}

/// Extract `message` from a JSON error body, ignoring anything unparsable.
pub fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

/// Check the status of a response whose body the caller does not need.
///
/// # Errors
///
/// Returns `ApiError::Status` when `ok` is false.
pub fn check_status(status: u16, ok: bool, body: &str) -> Result<(), ApiError> {
    if ok {
        return Ok(());
    }
    Err(ApiError::Status { status, message: parse_error_message(body) })
}

/// Decode a JSON response body, mapping non-success statuses to `ApiError::Status`.
///
/// # Errors
///
/// Returns `ApiError::Status` for non-OK responses and `ApiError::Decode`
/// when the body does not deserialize into `T`.
pub fn decode_response<T: DeserializeOwned>(status: u16, ok: bool, body: &str) -> Result<T, ApiError> {
    check_status(status, ok, body)?;
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
