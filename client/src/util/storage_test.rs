use super::*;

#[test]
fn memory_store_round_trips_and_clears() {
    let store = MemoryTokenStore::default();
    assert_eq!(store.load(), None);
    store.save("abc");
    assert_eq!(store.load().as_deref(), Some("abc"));
    store.save("def");
    assert_eq!(store.load().as_deref(), Some("def"));
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn memory_store_with_token_is_preloaded() {
    assert_eq!(MemoryTokenStore::with_token("t").load().as_deref(), Some("t"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_inert_outside_browser() {
    let store = BrowserTokenStore;
    store.save("ignored");
    assert_eq!(store.load(), None);
    store.clear();
}
