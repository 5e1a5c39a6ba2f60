use super::*;

#[test]
fn default_has_no_visible_toast() {
    let state = ToastState::default();
    assert!(state.current.is_none());
    assert_eq!(state.generation, 0);
}

#[test]
fn show_replaces_previous_toast() {
    let mut state = ToastState::default();
    state.show(Toast::success("Login successful"));
    state.show(Toast::error("Failed to fetch listings"));
    assert_eq!(state.current, Some(Toast::error("Failed to fetch listings")));
}

#[test]
fn dismiss_clears_matching_generation() {
    let mut state = ToastState::default();
    let generation = state.show(Toast::success("Logged out"));
    assert!(state.dismiss(generation));
    assert!(state.current.is_none());
}

#[test]
fn stale_timer_does_not_hide_replacement() {
    let mut state = ToastState::default();
    let first = state.show(Toast::success("Email logged"));
    let second = state.show(Toast::error("Authentication required"));
    assert!(!state.dismiss(first));
    assert_eq!(state.current, Some(Toast::error("Authentication required")));
    assert!(state.dismiss(second));
    assert!(state.current.is_none());
}

#[test]
fn dismiss_twice_is_noop() {
    let mut state = ToastState::default();
    let generation = state.show(Toast::success("Call initiated"));
    assert!(state.dismiss(generation));
    assert!(!state.dismiss(generation));
}

#[test]
fn toast_duration_is_three_seconds() {
    assert_eq!(TOAST_DURATION.as_secs(), 3);
}

#[test]
fn constructors_set_kind() {
    assert!(Toast::error("x").is_error());
    assert!(!Toast::success("x").is_error());
}
