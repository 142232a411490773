use super::*;
use crate::net::types::User;

fn make_user(role: Option<&str>) -> User {
    User {
        id: Some("u1".to_owned()),
        role: role.map(str::to_owned),
        first_name: None,
        last_name: None,
        phone_number: None,
        date_of_joining: None,
    }
}

#[test]
fn should_redirect_unauth_when_logged_out() {
    let state = SessionState::default();
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_marker_says_logged_in_without_profile() {
    let state = SessionState::from_marker(true);
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_redirect_even_if_stale_profile_lingers() {
    let state = SessionState { is_logged_in: false, user: Some(make_user(Some("ADMIN"))), transition_seq: 3 };
    assert!(should_redirect_unauth(&state));
    assert!(!is_admin_view(&state));
}

#[test]
fn admin_view_requires_login_and_admin_role() {
    let mut state = SessionState::from_marker(true);
    assert!(!is_admin_view(&state));
    state.user = Some(make_user(Some("STUDENT")));
    assert!(!is_admin_view(&state));
    state.user = Some(make_user(Some("ADMIN")));
    assert!(is_admin_view(&state));
}
