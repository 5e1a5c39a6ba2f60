use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_url, "http://localhost:3000");
}

#[test]
fn reads_port_and_api_url() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("PORT", "8080"), ("PORTAL_API_URL", "https://api.example.test/")]))
        .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_url, "https://api.example.test");
    assert_eq!(cfg.bind_addr().port(), 8080);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("PORT", "  "), ("PORTAL_API_URL", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_url, "http://localhost:3000");
}

#[test]
fn rejects_unparsable_port() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".to_owned()));
    assert!(HostConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
}
