//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated redirect behavior. This
//! only shapes the UI; the backend answers 401 for anything the marker gets
//! wrong.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::nav::Role;
use crate::state::session::{SessionState, SessionStore};

/// Whether a protected route should send this session to `/login`.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.is_logged_in
}

/// Whether admin-only chrome should be shown. Never a security decision.
pub fn is_admin_view(state: &SessionState) -> bool {
    state.is_logged_in && Role::classify(state.role()) == Role::Admin
}

/// Redirect to `/login` whenever the session is anonymous.
pub fn install_unauth_redirect<F>(session: SessionStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.snapshot()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
