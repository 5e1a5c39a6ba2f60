//! Backend base URL resolution.
//!
//! The host renders the configured API base URL into the page head as
//! `<meta name="portal-api-url">`. The browser reads it back once at startup
//! so a single build can target any backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend address used when nothing is configured (local development).
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// `name` attribute of the meta tag carrying the API base URL.
pub const API_URL_META: &str = "portal-api-url";

/// Normalize a configured base URL, falling back to `DEFAULT_API_URL`.
pub fn resolve_api_base_url(configured: Option<&str>) -> String {
    configured
        .map(|raw| raw.trim().trim_end_matches('/'))
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .to_owned()
}

/// API base URL for the running page.
pub fn api_base_url() -> String {
    #[cfg(feature = "hydrate")]
    {
        let configured = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector(&format!("meta[name=\"{API_URL_META}\"]")).ok().flatten())
            .and_then(|el| el.get_attribute("content"));
        resolve_api_base_url(configured.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        resolve_api_base_url(None)
    }
}
