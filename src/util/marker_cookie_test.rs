use super::*;

#[test]
fn marker_value_finds_cookie_among_others() {
    assert_eq!(marker_value("theme=dark; isLoggedIn=true; lang=en"), Some("true"));
    assert_eq!(marker_value("isLoggedIn=false"), Some("false"));
    assert_eq!(marker_value("theme=dark"), None);
    assert_eq!(marker_value(""), None);
}

#[test]
fn marker_value_does_not_match_prefixed_names() {
    assert_eq!(marker_value("wasLoggedIn=true; isLoggedInAt=1"), None);
}

#[test]
fn marker_is_set_only_for_exact_true() {
    assert!(marker_is_set("isLoggedIn=true"));
    assert!(marker_is_set("  isLoggedIn = true "));
    assert!(!marker_is_set("isLoggedIn=false"));
    assert!(!marker_is_set("isLoggedIn="));
    assert!(!marker_is_set("isLoggedIn=TRUE"));
    assert!(!marker_is_set("jwt=abc"));
}

#[test]
fn clear_marker_cookie_expires_at_root_path() {
    let cookie = clear_marker_cookie();
    assert!(cookie.starts_with("isLoggedIn=;"));
    assert!(cookie.contains("path=/"));
    assert!(cookie.contains("max-age=0"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_marker_reads_absent_outside_browser() {
    let marker = BrowserMarker;
    assert!(!marker.is_set());
    marker.clear();
    assert!(!marker.is_set());
}

#[test]
fn memory_marker_matches_browser_semantics() {
    let marker = MemoryMarker::new(Some("true"));
    assert!(marker.is_set());
    marker.set(Some("false"));
    assert!(!marker.is_set());
    marker.set(Some("true"));
    marker.clear();
    assert!(!marker.is_set());
    assert_eq!(marker.clears(), 1);
}

#[cfg(feature = "ssr")]
fn request_parts(cookies: &[&str]) -> axum::http::request::Parts {
    let mut builder = axum::http::Request::builder().uri("/lmsdashboard");
    for cookie in cookies {
        builder = builder.header(axum::http::header::COOKIE, *cookie);
    }
    builder.body(()).unwrap().into_parts().0
}

#[cfg(feature = "ssr")]
#[test]
fn request_marker_reads_cookie_header() {
    assert!(RequestMarker::from_parts(&request_parts(&["isLoggedIn=true"])).is_set());
    assert!(RequestMarker::from_parts(&request_parts(&["theme=dark", "isLoggedIn=true"])).is_set());
    assert!(!RequestMarker::from_parts(&request_parts(&["isLoggedIn=false"])).is_set());
    assert!(!RequestMarker::from_parts(&request_parts(&[])).is_set());
}

#[cfg(feature = "ssr")]
#[test]
fn request_marker_seeds_authenticated_session_from_context() {
    use crate::state::session::{SessionStatus, SessionStore};
    use leptos::prelude::{Owner, provide_context};

    Owner::new().with(|| {
        provide_context(request_parts(&["isLoggedIn=true"]));
        let store = SessionStore::initialize(&RequestMarker::from_context());
        assert_eq!(store.snapshot_untracked().status(), SessionStatus::Authenticated);
    });
    Owner::new().with(|| {
        let store = SessionStore::initialize(&RequestMarker::from_context());
        assert_eq!(store.snapshot_untracked().status(), SessionStatus::Anonymous);
    });
}
