use super::*;

#[test]
fn toast_modifier_matches_kind() {
    assert_eq!(toast_modifier(ToastKind::Success), "toast--success");
    assert_eq!(toast_modifier(ToastKind::Error), "toast--error");
}

#[test]
fn toast_modifier_follows_constructor() {
    assert_eq!(toast_modifier(Toast::error("Login failed").kind), "toast--error");
    assert_eq!(toast_modifier(Toast::success("Logged out").kind), "toast--success");
}
