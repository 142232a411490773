use super::*;

#[test]
fn default_config_is_same_origin() {
    let config = ApiConfig::default();
    assert_eq!(config.base_url, "");
    assert_eq!(config.logout_timeout_ms, DEFAULT_LOGOUT_TIMEOUT_MS);
    assert_eq!(config.url("/api/auth/login"), "/api/auth/login");
}

#[test]
fn from_raw_trims_trailing_slash() {
    let config = ApiConfig::from_raw(Some("http://localhost:8081/"), None);
    assert_eq!(config.base_url, "http://localhost:8081");
    assert_eq!(config.url("/api/auth/logout"), "http://localhost:8081/api/auth/logout");
}

#[test]
fn from_raw_parses_timeout() {
    let config = ApiConfig::from_raw(None, Some(" 1500 "));
    assert_eq!(config.logout_timeout_ms, 1500);
}

#[test]
fn from_raw_falls_back_on_invalid_or_zero_timeout() {
    assert_eq!(ApiConfig::from_raw(None, Some("soon")).logout_timeout_ms, DEFAULT_LOGOUT_TIMEOUT_MS);
    assert_eq!(ApiConfig::from_raw(None, Some("0")).logout_timeout_ms, DEFAULT_LOGOUT_TIMEOUT_MS);
}
