use super::*;

fn employee() -> User {
    User {
        email: "dev@priacc.com".to_owned(),
        employee_id: "PRI-042".to_owned(),
        full_name: "Dev Example".to_owned(),
        role: Role::Employee,
        ..User::default()
    }
}

fn admin() -> User {
    User {
        email: "admin@priacc.com".to_owned(),
        employee_id: "PRI-001".to_owned(),
        full_name: "Admin".to_owned(),
        role: Role::HrAdmin,
        ..User::default()
    }
}

// =============================================================
// Defaults and the loading phase
// =============================================================

#[test]
fn default_is_loading_with_no_session() {
    let state = SessionState::default();
    assert!(state.session().is_none());
    assert_eq!(state.auth_view(), AuthView::Loading);
}

// =============================================================
// restore: both-or-neither
// =============================================================

#[test]
fn restore_with_both_halves_authenticates() {
    let mut state = SessionState::default();
    state.restore(Some("tok1".to_owned()), Some(employee()));
    assert_eq!(state.token(), Some("tok1"));
    assert_eq!(state.auth_view(), AuthView::Employee);
}

#[test]
fn restore_with_token_only_fails_open() {
    let mut state = SessionState::default();
    state.restore(Some("tok1".to_owned()), None);
    assert!(state.session().is_none());
    assert_eq!(state.auth_view(), AuthView::Unauthenticated);
}

#[test]
fn restore_with_user_only_fails_open() {
    let mut state = SessionState::default();
    state.restore(None, Some(employee()));
    assert_eq!(state.auth_view(), AuthView::Unauthenticated);
}

#[test]
fn restore_with_nothing_is_logged_out() {
    let mut state = SessionState::default();
    state.restore(None, None);
    assert_eq!(state.auth_view(), AuthView::Unauthenticated);
}

// =============================================================
// No partial session is representable
// =============================================================

#[test]
fn token_and_user_always_set_together() {
    let mut state = SessionState::default();
    state.restore(None, None);
    assert_eq!(state.token().is_some(), state.user().is_some());

    state.login(admin(), "tok2".to_owned());
    assert_eq!(state.token().is_some(), state.user().is_some());

    state.logout();
    assert_eq!(state.token().is_some(), state.user().is_some());
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_sets_role_view() {
    let mut state = SessionState::default();
    state.login(admin(), "tok1".to_owned());
    assert_eq!(state.auth_view(), AuthView::HrAdmin);
}

#[test]
fn logout_clears_session() {
    let mut state = SessionState::default();
    state.login(employee(), "tok1".to_owned());
    state.logout();
    assert!(state.session().is_none());
    assert_eq!(state.auth_view(), AuthView::Unauthenticated);
}

#[test]
fn logout_twice_leaves_same_empty_session() {
    let mut state = SessionState::default();
    state.login(employee(), "tok1".to_owned());
    state.logout();
    let after_first = state.session().cloned();
    state.logout();
    assert_eq!(state.session().cloned(), after_first);
    assert!(after_first.is_none());
}

// =============================================================
// Epoch fencing for in-flight requests
// =============================================================

#[test]
fn login_and_logout_bump_epoch() {
    let mut state = SessionState::default();
    let e0 = state.epoch();
    state.login(employee(), "tok1".to_owned());
    let e1 = state.epoch();
    assert!(e1 > e0);
    state.logout();
    assert!(state.epoch() > e1);
}

#[test]
fn restore_does_not_bump_epoch() {
    let mut state = SessionState::default();
    let e0 = state.epoch();
    state.restore(Some("tok1".to_owned()), Some(employee()));
    assert_eq!(state.epoch(), e0);
}

#[test]
fn result_issued_before_logout_is_stale() {
    let mut state = SessionState::default();
    state.login(employee(), "tok1".to_owned());
    let issued = state.epoch();
    assert!(state.is_current(issued));

    state.logout();
    assert!(!state.is_current(issued));
}
