use super::*;

#[test]
fn message_field_wins_for_json_objects() {
    assert_eq!(error_message_from_body(r#"{"message": "Bad credentials"}"#, "login"), "Bad credentials");
}

#[test]
fn error_field_is_used_when_message_missing() {
    assert_eq!(error_message_from_body(r#"{"error": "Unauthorized", "status": 401}"#, "login"), "Unauthorized");
}

#[test]
fn json_string_body_is_unwrapped() {
    assert_eq!(error_message_from_body(r#""Username already taken""#, "register"), "Username already taken");
}

#[test]
fn plain_text_body_is_used_verbatim() {
    assert_eq!(error_message_from_body("  User not found \n", "login"), "User not found");
}

#[test]
fn empty_or_shapeless_bodies_fall_back() {
    let expected = "An unexpected error occurred during register.";
    assert_eq!(error_message_from_body("", "register"), expected);
    assert_eq!(error_message_from_body("null", "register"), expected);
    assert_eq!(error_message_from_body("[1, 2]", "register"), expected);
    assert_eq!(error_message_from_body(r#"{"status": 500}"#, "register"), expected);
    assert_eq!(error_message_from_body(r#"{"message": "  "}"#, "register"), expected);
}

#[test]
fn from_status_keeps_status_kind() {
    let err = ApiError::from_status(409, r#"{"message": "exists"}"#, "register");
    assert_eq!(err.kind, ApiErrorKind::Status(409));
    assert_eq!(err.to_string(), "exists");
}

#[test]
fn timeout_names_the_action() {
    let err = ApiError::timeout("logout");
    assert_eq!(err.kind, ApiErrorKind::Timeout);
    assert_eq!(err.message, "logout request timed out");
}
