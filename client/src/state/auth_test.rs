use super::*;
use records::UserRole;

fn user() -> SessionUser {
    SessionUser {
        id: 1,
        email: "fiscal@prf.gov.br".to_owned(),
        username: "fiscal".to_owned(),
        role: UserRole::UserPrf,
    }
}

#[test]
fn probing_starts_loading_without_session() {
    let state = AuthState::probing();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert_eq!(state.phase, AuthPhase::Unauthenticated);
}

#[test]
fn probe_with_user_authenticates() {
    let mut state = AuthState::probing();
    state.finish_probe(Some(user()));
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.phase, AuthPhase::Authenticated);
}

#[test]
fn probe_without_user_settles_unauthenticated() {
    let mut state = AuthState::probing();
    state.finish_probe(None);
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn sign_in_lifecycle() {
    let mut state = AuthState::probing();
    state.finish_probe(None);

    state.begin_sign_in();
    assert_eq!(state.phase, AuthPhase::Authenticating);
    assert!(!state.is_authenticated());

    state.finish_sign_in(user());
    assert!(state.is_authenticated());
    assert_eq!(state.user.as_ref().unwrap().username, "fiscal");
}

#[test]
fn failed_sign_in_returns_to_unauthenticated() {
    let mut state = AuthState::probing();
    state.finish_probe(None);
    state.begin_sign_in();
    state.fail_sign_in();
    assert_eq!(state.phase, AuthPhase::Unauthenticated);
    assert!(state.user.is_none());
}

#[test]
fn sign_out_lifecycle_clears_session() {
    let mut state = AuthState::probing();
    state.finish_probe(Some(user()));

    state.begin_sign_out();
    assert_eq!(state.phase, AuthPhase::SigningOut);

    state.finish_sign_out();
    assert_eq!(state.phase, AuthPhase::Unauthenticated);
    assert!(state.user.is_none());
}
