use super::*;

#[test]
fn resolve_defaults_when_unset() {
    assert_eq!(resolve_api_base_url(None), DEFAULT_API_URL);
}

#[test]
fn resolve_defaults_when_blank() {
    assert_eq!(resolve_api_base_url(Some("   ")), DEFAULT_API_URL);
    assert_eq!(resolve_api_base_url(Some("/")), DEFAULT_API_URL);
}

#[test]
fn resolve_trims_trailing_slashes_and_whitespace() {
    assert_eq!(resolve_api_base_url(Some(" https://api.example.com// ")), "https://api.example.com");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn api_base_url_outside_browser_is_default() {
    assert_eq!(api_base_url(), DEFAULT_API_URL);
}
