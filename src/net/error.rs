//! Normalized network-layer error.
//!
//! Backend error payloads arrive as JSON objects with a `message`, bare JSON
//! strings, plain text, or nothing at all. They are folded into one
//! `ApiError` here so forms only ever display `error.message`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Broad failure class, kept for logging and for tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The request never produced a response.
    Network,
    /// The server answered with a non-2xx status.
    Status(u16),
    /// The request did not settle within its time budget.
    Timeout,
    /// A 2xx body could not be decoded.
    Decode,
    /// Called outside the browser (SSR or native tests).
    Unavailable,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, message)
    }

    pub fn timeout(action: &str) -> Self {
        Self::new(ApiErrorKind::Timeout, format!("{action} request timed out"))
    }

    pub fn unavailable() -> Self {
        Self::new(ApiErrorKind::Unavailable, "not available on server")
    }

    /// Build an error from a non-2xx response body.
    pub fn from_status(status: u16, body: &str, action: &str) -> Self {
        Self::new(ApiErrorKind::Status(status), error_message_from_body(body, action))
    }
}

/// Message shown when the server gave nothing usable.
pub fn fallback_message(action: &str) -> String {
    format!("An unexpected error occurred during {action}.")
}

/// Extract a user-facing message from an error response body.
pub fn error_message_from_body(body: &str, action: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return fallback_message(action);
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => map
            .get("message")
            .or_else(|| map.get("error"))
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map_or_else(|| fallback_message(action), str::to_owned),
        Ok(serde_json::Value::String(text)) if !text.trim().is_empty() => text.trim().to_owned(),
        Ok(_) => fallback_message(action),
        Err(_) => trimmed.to_owned(),
    }
}
