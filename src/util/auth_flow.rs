//! Session-writing flows around the auth network calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! These are the only paths that write the session besides the route
//! observer. Each takes the network call as a future so ordering against the
//! store is explicit: login and profile writes happen only after a
//! successful response; logout writes happen after the call settles, no
//! matter how.
//!
//! ERROR HANDLING
//! ==============
//! Login/registration/profile failures are returned for inline display and
//! leave the store untouched. Logout failures are logged and swallowed.

#[cfg(test)]
#[path = "auth_flow_test.rs"]
mod auth_flow_test;

use std::future::Future;

use crate::net::error::ApiError;
use crate::net::types::User;
use crate::state::session::{SessionStore, complete_login};
use crate::util::marker_cookie::MarkerCookie;

/// Await a login request, then acknowledge it on success.
///
/// # Errors
///
/// Returns the request's error unchanged; the store is not touched.
pub async fn submit_login<F>(store: SessionStore, request: F) -> Result<(), ApiError>
where
    F: Future<Output = Result<Option<User>, ApiError>>,
{
    let profile = request.await?;
    complete_login(store, profile);
    Ok(())
}

/// Await a registration request, then acknowledge it on success.
///
/// # Errors
///
/// Returns the request's error unchanged; the store is not touched.
pub async fn submit_registration<F>(store: SessionStore, request: F) -> Result<(), ApiError>
where
    F: Future<Output = Result<Option<User>, ApiError>>,
{
    submit_login(store, request).await
}

/// Await a profile update and replace the session profile with the result.
///
/// # Errors
///
/// Returns the request's error unchanged; the store is not touched.
pub async fn save_profile<F>(store: SessionStore, request: F) -> Result<User, ApiError>
where
    F: Future<Output = Result<User, ApiError>>,
{
    let user = request.await?;
    store.set_authenticated(Some(user.clone()));
    Ok(user)
}

/// Invalidate server-side, then sign out locally regardless of the outcome.
pub async fn logout<M, F>(store: SessionStore, marker: &M, invalidate: F)
where
    M: MarkerCookie + ?Sized,
    F: Future<Output = Result<(), ApiError>>,
{
    if let Err(e) = invalidate.await {
        leptos::logging::warn!("logout request failed ({:?}): {e}; signing out locally", e.kind);
    }
    marker.clear();
    store.set_anonymous();
}
