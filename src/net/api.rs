//! REST API helpers for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sent with
//! `credentials: include` so the backend's session cookies ride along.
//! Server-side (SSR): stubs returning `ApiErrorKind::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is normalized into `ApiError` here. Callers never see raw
//! transport errors or branch on payload shapes.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{LoginRequest, ProfileUpdate, RegisterRequest, User};
use crate::config::ApiConfig;

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_PATH: &str = "/api/auth/login";
#[cfg(any(test, feature = "hydrate"))]
const REGISTER_PATH: &str = "/api/auth/register";
#[cfg(any(test, feature = "hydrate"))]
const LOGOUT_PATH: &str = "/api/auth/logout";
#[cfg(any(test, feature = "hydrate"))]
const PROFILE_PATH: &str = "/api/auth/profile";

#[cfg(any(test, feature = "hydrate"))]
fn transport_failed_message(action: &str, detail: &str) -> String {
    format!("{action} request failed: {detail}")
}

/// Submit credentials to `POST /api/auth/login`.
///
/// On success the backend has set both the credential cookie and the
/// `isLoggedIn` marker. The returned profile is `Some` only when the
/// response body is a user object.
///
/// # Errors
///
/// Returns a normalized `ApiError` if the request fails or is rejected.
pub async fn login(config: &ApiConfig, request: &LoginRequest) -> Result<Option<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.url(LOGIN_PATH);
        let body = send_json(gloo_net::http::Request::post(&url), request, "login").await?;
        Ok(super::types::parse_auth_response(&body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(ApiError::unavailable())
    }
}

/// Create an account via `POST /api/auth/register`. Same marker contract as login.
///
/// # Errors
///
/// Returns a normalized `ApiError` if the request fails or is rejected.
pub async fn register(config: &ApiConfig, request: &RegisterRequest) -> Result<Option<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.url(REGISTER_PATH);
        let body = send_json(gloo_net::http::Request::post(&url), request, "register").await?;
        Ok(super::types::parse_auth_response(&body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(ApiError::unavailable())
    }
}

/// Invalidate the server-side credential via `POST /api/auth/logout`.
///
/// Bounded by `config.logout_timeout_ms`; a call that does not settle in
/// time resolves to an `ApiErrorKind::Timeout` error.
///
/// # Errors
///
/// Returns a normalized `ApiError` on failure, rejection, or timeout.
pub async fn logout(config: &ApiConfig) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};

        let url = config.url(LOGOUT_PATH);
        let request = Box::pin(async move {
            let resp = gloo_net::http::Request::post(&url)
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
                .map_err(|e| ApiError::network(transport_failed_message("logout", &e.to_string())))?;
            if !resp.ok() {
                let text = resp.text().await.unwrap_or_default();
                return Err(ApiError::from_status(resp.status(), &text, "logout"));
            }
            Ok(())
        });
        let timer = Box::pin(gloo_timers::future::TimeoutFuture::new(config.logout_timeout_ms));
        match select(request, timer).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(ApiError::timeout("logout")),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::unavailable())
    }
}

/// Save profile details via `PUT /api/auth/profile` and return the updated user.
///
/// # Errors
///
/// Returns a normalized `ApiError` if the request fails, is rejected, or the
/// response is not a user object.
pub async fn update_profile(config: &ApiConfig, update: &ProfileUpdate) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use super::error::ApiErrorKind;

        let url = config.url(PROFILE_PATH);
        let body = send_json(gloo_net::http::Request::put(&url), update, "profile update").await?;
        serde_json::from_str::<User>(&body).map_err(|e| ApiError::new(ApiErrorKind::Decode, e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, update);
        Err(ApiError::unavailable())
    }
}

/// Send a JSON body with credentials and return the response text on 2xx.
#[cfg(feature = "hydrate")]
async fn send_json<B: serde::Serialize>(
    builder: gloo_net::http::RequestBuilder,
    body: &B,
    action: &str,
) -> Result<String, ApiError> {
    let resp = builder
        .credentials(web_sys::RequestCredentials::Include)
        .json(body)
        .map_err(|e| ApiError::network(transport_failed_message(action, &e.to_string())))?
        .send()
        .await
        .map_err(|e| ApiError::network(transport_failed_message(action, &e.to_string())))?;
    let text = resp.text().await.unwrap_or_default();
    if !resp.ok() {
        return Err(ApiError::from_status(resp.status(), &text, action));
    }
    Ok(text)
}
