//! REST façade over the property backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: `HttpApi` returns `ApiError::Unavailable`;
//! tests substitute their own `PortalApi` implementation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Services in `crate::services` only see the `PortalApi` trait, so session,
//! listing and contact flows can be exercised without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::error::{check_status, decode_response};
#[cfg(feature = "hydrate")]
use super::types::CurrentUserResponse;
use super::types::{
    CommunicationResponse, ContactRequest, Credentials, EmailInquiry, Listing, LoginResponse, NewListing, Registration,
    User,
};
use crate::state::listings::ListingFilters;

pub const LOGIN_PATH: &str = "/api/login";
pub const REGISTER_PATH: &str = "/api/register";
pub const CURRENT_USER_PATH: &str = "/api/user";
pub const LISTINGS_PATH: &str = "/api/listings";
pub const COMMUNICATIONS_PATH: &str = "/api/communications";
pub const EMAIL_PATH: &str = "/api/communications/email";

/// Backend operations consumed by the UI.
///
/// Futures are `?Send` because browser fetch futures are bound to the JS
/// event loop thread.
#[async_trait::async_trait(?Send)]
pub trait PortalApi {
    /// `POST /api/login`.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// `POST /api/register`.
    async fn register(&self, registration: &Registration) -> Result<(), ApiError>;

    /// `GET /api/user` with the bearer token.
    async fn current_user(&self, token: &str) -> Result<User, ApiError>;

    /// `GET /api/listings` with optional `price_max` / `location` query params.
    async fn listings(&self, token: &str, filters: &ListingFilters) -> Result<Vec<Listing>, ApiError>;

    /// `POST /api/listings`.
    async fn create_listing(&self, token: &str, listing: &NewListing) -> Result<(), ApiError>;

    /// `POST /api/communications`, returning a virtual contact handle.
    async fn request_contact(&self, token: &str, request: &ContactRequest) -> Result<CommunicationResponse, ApiError>;

    /// `POST /api/communications/email`.
    async fn log_email(&self, token: &str, inquiry: &EmailInquiry) -> Result<(), ApiError>;
}

/// Join the configured base URL and an API path without doubling slashes.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// `Authorization` header value for a session token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Query parameters for a listings fetch. Blank filters are omitted entirely.
pub fn listing_query(filters: &ListingFilters) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    let price_max = filters.price_max.trim();
    if !price_max.is_empty() {
        params.push(("price_max", price_max.to_owned()));
    }
    let location = filters.location.trim();
    if !location.is_empty() {
        params.push(("location", location.to_owned()));
    }
    params
}

/// `PortalApi` backed by browser `fetch`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }
}

#[cfg(feature = "hydrate")]
async fn read_response(resp: gloo_net::http::Response) -> Result<(u16, bool, String), ApiError> {
    let status = resp.status();
    let ok = resp.ok();
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    Ok((status, ok, body))
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize>(
    url: &str,
    token: Option<&str>,
    body: &B,
) -> Result<(u16, bool, String), ApiError> {
    let mut builder = gloo_net::http::Request::post(url);
    if let Some(token) = token {
        builder = builder.header("Authorization", &bearer(token));
    }
    let resp = builder
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(resp).await
}

#[cfg(feature = "hydrate")]
async fn get_authed(url: &str, token: &str, query: Vec<(&'static str, String)>) -> Result<(u16, bool, String), ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .header("Authorization", &bearer(token))
        .query(query.iter().map(|(k, v)| (*k, v.as_str())))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(resp).await
}

#[async_trait::async_trait(?Send)]
impl PortalApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let (status, ok, body) = post_json(&self.url(LOGIN_PATH), None, credentials).await?;
            decode_response(status, ok, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(LOGIN_PATH), credentials);
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let (status, ok, body) = post_json(&self.url(REGISTER_PATH), None, registration).await?;
            check_status(status, ok, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(REGISTER_PATH), registration);
            Err(ApiError::Unavailable)
        }
    }

    async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let (status, ok, body) = get_authed(&self.url(CURRENT_USER_PATH), token, Vec::new()).await?;
            decode_response::<CurrentUserResponse>(status, ok, &body).map(|r| r.user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(CURRENT_USER_PATH), token);
            Err(ApiError::Unavailable)
        }
    }

    async fn listings(&self, token: &str, filters: &ListingFilters) -> Result<Vec<Listing>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let (status, ok, body) = get_authed(&self.url(LISTINGS_PATH), token, listing_query(filters)).await?;
            decode_response(status, ok, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(LISTINGS_PATH), token, listing_query(filters));
            Err(ApiError::Unavailable)
        }
    }

    async fn create_listing(&self, token: &str, listing: &NewListing) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let (status, ok, body) = post_json(&self.url(LISTINGS_PATH), Some(token), listing).await?;
            check_status(status, ok, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(LISTINGS_PATH), token, listing);
            Err(ApiError::Unavailable)
        }
    }

    async fn request_contact(&self, token: &str, request: &ContactRequest) -> Result<CommunicationResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let (status, ok, body) = post_json(&self.url(COMMUNICATIONS_PATH), Some(token), request).await?;
            decode_response(status, ok, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(COMMUNICATIONS_PATH), token, request);
            Err(ApiError::Unavailable)
        }
    }

    async fn log_email(&self, token: &str, inquiry: &EmailInquiry) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let (status, ok, body) = post_json(&self.url(EMAIL_PATH), Some(token), inquiry).await?;
            check_status(status, ok, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(EMAIL_PATH), token, inquiry);
            Err(ApiError::Unavailable)
        }
    }
}
