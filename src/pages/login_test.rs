use super::*;

fn form(username: &str, email: &str, password: &str, terms_accepted: bool) -> AuthForm {
    AuthForm {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        terms_accepted,
    }
}

#[test]
fn auth_mode_toggles_and_labels() {
    assert_eq!(AuthMode::default(), AuthMode::Login);
    assert_eq!(AuthMode::Login.toggled(), AuthMode::Register);
    assert_eq!(AuthMode::Register.toggled(), AuthMode::Login);
    assert_eq!(AuthMode::Register.button_label(), "Register");
    assert_eq!(AuthMode::Login.toggle_prompt(), "Don't have an account? Register");
}

#[test]
fn login_requires_username() {
    assert_eq!(validate_auth_form(AuthMode::Login, &form("   ", "", "secret1", false)), Err("Username is required"));
}

#[test]
fn login_ignores_email_and_terms() {
    assert_eq!(
        validate_auth_form(AuthMode::Login, &form(" ada ", "not-an-email", "secret1", false)),
        Ok(AuthSubmission::Login(LoginRequest { username: "ada".to_owned(), password: "secret1".to_owned() }))
    );
}

#[test]
fn password_must_be_six_characters() {
    assert_eq!(
        validate_auth_form(AuthMode::Login, &form("ada", "", "12345", true)),
        Err("Password must be at least 6 characters")
    );
    assert!(validate_auth_form(AuthMode::Login, &form("ada", "", "123456", true)).is_ok());
}

#[test]
fn register_requires_plausible_email() {
    for email in ["", "ada", "@example.com", "ada@", "ada @example.com"] {
        assert_eq!(
            validate_auth_form(AuthMode::Register, &form("ada", email, "secret1", true)),
            Err("Invalid email"),
            "email {email:?}"
        );
    }
}

#[test]
fn register_requires_terms() {
    assert_eq!(
        validate_auth_form(AuthMode::Register, &form("ada", "ada@example.com", "secret1", false)),
        Err("You must accept the terms and conditions")
    );
}

#[test]
fn register_builds_trimmed_request() {
    assert_eq!(
        validate_auth_form(AuthMode::Register, &form("ada", " ada@example.com ", "secret1", true)),
        Ok(AuthSubmission::Register(RegisterRequest {
            username: "ada".to_owned(),
            email: "ada@example.com".to_owned(),
            password: "secret1".to_owned(),
        }))
    );
}
