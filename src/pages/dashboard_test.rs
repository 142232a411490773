use super::*;
use crate::net::types::User;

fn session(is_logged_in: bool, role: Option<&str>) -> SessionState {
    SessionState {
        is_logged_in,
        user: role.map(|r| User {
            id: None,
            role: Some(r.to_owned()),
            first_name: None,
            last_name: None,
            phone_number: None,
            date_of_joining: None,
        }),
        transition_seq: 0,
    }
}

#[test]
fn management_card_routes_are_unique_and_absolute() {
    let mut routes: Vec<_> = MANAGEMENT_CARDS.iter().map(|c| c.route).collect();
    assert!(routes.iter().all(|r| r.starts_with('/')));
    routes.sort_unstable();
    routes.dedup();
    assert_eq!(routes.len(), MANAGEMENT_CARDS.len());
}

#[test]
fn management_cards_have_labels() {
    for card in MANAGEMENT_CARDS {
        assert!(!card.title.is_empty());
        assert!(!card.manage_label.is_empty());
    }
}

#[test]
fn visible_cards_only_for_admins() {
    assert_eq!(visible_cards(&session(true, Some("ADMIN"))).len(), MANAGEMENT_CARDS.len());
    assert!(visible_cards(&session(true, Some("STUDENT"))).is_empty());
    assert!(visible_cards(&session(true, None)).is_empty());
    assert!(visible_cards(&session(false, Some("ADMIN"))).is_empty());
}
