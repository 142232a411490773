use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_classify_admin_is_exact_match() {
    assert_eq!(Role::classify(Some("ADMIN")), Role::Admin);
    assert_eq!(Role::classify(Some("admin")), Role::Member);
    assert_eq!(Role::classify(Some("STUDENT")), Role::Member);
    assert_eq!(Role::classify(Some("")), Role::Member);
    assert_eq!(Role::classify(None), Role::Member);
}

// =============================================================
// visible_actions
// =============================================================

#[test]
fn admin_sees_dashboard_not_catalog() {
    let actions = visible_actions(true, Some("ADMIN"));
    assert!(actions.contains(&NavAction::LmsDashboard));
    assert!(!actions.contains(&NavAction::Subjects));
    assert!(actions.contains(&NavAction::Logout));
    assert!(!actions.contains(&NavAction::Login));
}

#[test]
fn student_sees_catalog_not_dashboard() {
    let actions = visible_actions(true, Some("STUDENT"));
    assert!(actions.contains(&NavAction::Subjects));
    assert!(!actions.contains(&NavAction::LmsDashboard));
    assert!(actions.contains(&NavAction::Logout));
}

#[test]
fn missing_or_unknown_role_defaults_to_member_branch() {
    assert_eq!(visible_actions(true, None), visible_actions(true, Some("STUDENT")));
    assert_eq!(visible_actions(true, Some("SUPERUSER")), visible_actions(true, Some("STUDENT")));
}

#[test]
fn logged_out_sees_only_public_actions_for_any_role() {
    for role in [None, Some("ADMIN"), Some("STUDENT"), Some("")] {
        let actions = visible_actions(false, role);
        assert_eq!(actions, &[NavAction::Home, NavAction::Features, NavAction::Login, NavAction::Signup]);
    }
}

// =============================================================
// NavAction
// =============================================================

#[test]
fn link_actions_have_routes() {
    assert_eq!(NavAction::Home.href(), Some("/"));
    assert_eq!(NavAction::LmsDashboard.href(), Some("/lmsdashboard"));
    assert_eq!(NavAction::Subjects.href(), Some("/subject"));
    assert_eq!(NavAction::Login.href(), Some("/login"));
    assert_eq!(NavAction::Signup.href(), Some("/signup"));
}

#[test]
fn button_actions_have_no_route() {
    assert_eq!(NavAction::Logout.href(), None);
    assert_eq!(NavAction::Features.href(), None);
    assert_eq!(NavAction::Logout.label(), "Logout");
}
