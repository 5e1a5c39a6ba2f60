use super::*;

fn user(role: Role, verified: bool) -> User {
    User { id: 1, email: "someone@example.com".to_owned(), role, verified }
}

fn session(role: Role, verified: bool) -> Session {
    Session { token: "tok".to_owned(), user: user(role, verified) }
}

#[test]
fn default_state_is_signed_out_in_sign_in_mode() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert_eq!(state.token(), None);
    assert_eq!(state.mode, AuthMode::SignIn);
    assert!(!state.restoring);
}

#[test]
fn sign_in_sets_token_and_user_together() {
    let mut state = SessionState { restoring: true, ..SessionState::default() };
    state.sign_in(session(Role::Customer, false));
    assert_eq!(state.token(), Some("tok"));
    assert_eq!(state.user().map(|u| u.email.as_str()), Some("someone@example.com"));
    assert!(!state.restoring);
}

#[test]
fn sign_out_clears_session_and_resets_mode() {
    let mut state = SessionState { mode: AuthMode::Register, ..SessionState::default() };
    state.sign_in(session(Role::Agent, true));
    state.sign_out();
    assert!(state.current.is_none());
    assert_eq!(state.user(), None);
    assert_eq!(state.mode, AuthMode::SignIn);
}

#[test]
fn only_verified_agents_can_create_listings() {
    let mut state = SessionState::default();
    assert!(!state.can_create_listings());

    state.sign_in(session(Role::Customer, true));
    assert!(!state.can_create_listings());

    state.sign_in(session(Role::Agent, false));
    assert!(!state.can_create_listings());
    assert!(state.awaiting_verification());

    state.sign_in(session(Role::Agent, true));
    assert!(state.can_create_listings());
    assert!(!state.awaiting_verification());
}

#[test]
fn auth_mode_toggles_and_titles() {
    assert_eq!(AuthMode::SignIn.toggled(), AuthMode::Register);
    assert_eq!(AuthMode::Register.toggled(), AuthMode::SignIn);
    assert_eq!(AuthMode::SignIn.title(), "Sign In");
    assert_eq!(AuthMode::Register.title(), "Register");
}
