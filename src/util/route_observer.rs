//! Re-sync the session with the marker cookie on every navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser back/forward, other tabs, and cookie expiry all change the marker
//! without going through an in-app action. Re-reading it per navigation keeps
//! the in-memory session converged without polling.

#[cfg(test)]
#[path = "route_observer_test.rs"]
mod route_observer_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::session::SessionStore;
use crate::util::marker_cookie::MarkerCookie;

/// Apply the marker to the store if they disagree. Returns `true` on drift.
pub fn reconcile(store: SessionStore, marker: &impl MarkerCookie) -> bool {
    let marker_set = marker.is_set();
    if marker_set == store.snapshot_untracked().is_logged_in {
        return false;
    }
    if marker_set {
        store.set_authenticated(None);
    } else {
        store.set_anonymous();
    }
    leptos::logging::log!("session drift corrected: marker_set={marker_set}");
    true
}

/// Run `reconcile` whenever the router location changes.
///
/// Must be called inside `<Router>`.
pub fn install_route_observer<M>(store: SessionStore, marker: M)
where
    M: MarkerCookie + 'static,
{
    let location = use_location();
    observe_navigation(store, marker, move || {
        location.pathname.track();
        location.search.track();
        location.hash.track();
    });
}

/// Re-run `reconcile` each time something read by `track_location` changes.
fn observe_navigation<M, T>(store: SessionStore, marker: M, track_location: T)
where
    M: MarkerCookie + 'static,
    T: Fn() + 'static,
{
    Effect::new(move || {
        track_location();
        reconcile(store, &marker);
    });
}
