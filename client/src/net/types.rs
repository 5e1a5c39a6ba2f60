//! Wire DTOs for the property backend's REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON exactly (snake_case for users and
//! listings, camelCase for communications) so serde stays the only mapping
//! layer between HTTP bodies and UI state.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role assigned at registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    Agent,
}

impl Role {
    /// Wire/display label (`"customer"` or `"agent"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Agent => "agent",
        }
    }

    /// Parse a `<select>` value; anything unrecognized maps to `Customer`.
    pub fn from_input(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("agent") { Self::Agent } else { Self::Customer }
    }
}

/// A registered user as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub role: Role,
    /// Agents may only publish listings once an operator verifies them.
    #[serde(default)]
    pub verified: bool,
}

/// A published property listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub location: String,
    #[serde(default)]
    pub description: String,
    pub agent_id: i64,
    /// Server-formatted creation timestamp, kept verbatim for display.
    #[serde(default)]
    pub created_at: String,
}

/// Body of `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Successful `POST /api/login` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// `GET /api/user` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CurrentUserResponse {
    pub user: User,
}

/// Listing fields submitted to `POST /api/listings`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewListing {
    pub title: String,
    pub price: f64,
    pub location: String,
    pub description: String,
}

/// Channel used to reach a listing's agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactChannel {
    Call,
    Whatsapp,
    Email,
}

/// Body of `POST /api/communications`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[serde(rename = "type")]
    pub channel: ContactChannel,
    pub listing_id: i64,
    pub user_email: String,
}

/// Virtual contact handle issued by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationResponse {
    #[serde(default)]
    pub virtual_number: Option<String>,
    #[serde(default)]
    pub virtual_email: Option<String>,
    #[serde(default)]
    pub communication_id: Option<i64>,
}

/// Body of `POST /api/communications/email`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailInquiry {
    pub listing_id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Error body returned by the backend on 4xx/5xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
