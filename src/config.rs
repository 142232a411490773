//! API configuration baked in at build time.
//!
//! The WASM bundle has no process environment, so values come from
//! `option_env!` when the crate is compiled. Parsing lives in small helpers
//! so defaults and fallbacks can be tested without touching the build env.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Empty base URL means same-origin requests (reverse proxy in production).
pub const DEFAULT_API_BASE_URL: &str = "";
pub const DEFAULT_LOGOUT_TIMEOUT_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix joined onto every `/api/...` path, without a trailing slash.
    pub base_url: String,
    /// Upper bound on the logout invalidation call before local sign-out proceeds.
    pub logout_timeout_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_owned(),
            logout_timeout_ms: DEFAULT_LOGOUT_TIMEOUT_MS,
        }
    }
}

impl ApiConfig {
    /// Build config from compile-time environment.
    ///
    /// Optional:
    /// - `LMS_API_BASE_URL`: default same-origin
    /// - `LMS_LOGOUT_TIMEOUT_MS`: default 5000
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("LMS_API_BASE_URL"), option_env!("LMS_LOGOUT_TIMEOUT_MS"))
    }

    fn from_raw(base_url: Option<&str>, logout_timeout_ms: Option<&str>) -> Self {
        Self {
            base_url: parse_base_url(base_url),
            logout_timeout_ms: parse_timeout_ms(logout_timeout_ms, DEFAULT_LOGOUT_TIMEOUT_MS),
        }
    }

    /// Join an absolute API path (`/api/...`) onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn parse_base_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_owned()
}

fn parse_timeout_ms(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}
