//! Login / registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! One form toggles between login and register. Input is validated locally
//! first; the session is only touched after the backend accepts the call,
//! via `auth_flow::submit_login` / `submit_registration`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ApiConfig;
use crate::net::types::{LoginRequest, RegisterRequest};
use crate::state::session::SessionStore;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    /// Lowercase verb used in headings and error fallbacks.
    pub fn action(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }

    pub fn toggle_prompt(self) -> &'static str {
        match self {
            Self::Login => "Don't have an account? Register",
            Self::Register => "Already have an account? Login",
        }
    }
}

/// Raw form values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub terms_accepted: bool,
}

/// A validated request ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthSubmission {
    Login(LoginRequest),
    Register(RegisterRequest),
}

/// Validate the form for `mode`, returning the first problem found.
pub fn validate_auth_form(mode: AuthMode, form: &AuthForm) -> Result<AuthSubmission, &'static str> {
    let username = form.username.trim();
    if username.is_empty() {
        return Err("Username is required");
    }
    let email = form.email.trim();
    if mode == AuthMode::Register && !is_plausible_email(email) {
        return Err("Invalid email");
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    match mode {
        AuthMode::Login => Ok(AuthSubmission::Login(LoginRequest {
            username: username.to_owned(),
            password: form.password.clone(),
        })),
        AuthMode::Register => {
            if !form.terms_accepted {
                return Err("You must accept the terms and conditions");
            }
            Ok(AuthSubmission::Register(RegisterRequest {
                username: username.to_owned(),
                email: email.to_owned(),
                password: form.password.clone(),
            }))
        }
    }
}

/// Loose shape check: `local@domain`, both parts non-empty, no whitespace.
fn is_plausible_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    value
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <AuthenticationForm initial_mode=AuthMode::Login/> }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    view! { <AuthenticationForm initial_mode=AuthMode::Register/> }
}

/// Shared login/register form.
#[component]
pub fn AuthenticationForm(initial_mode: AuthMode) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let config = expect_context::<ApiConfig>();
    let navigate = use_navigate();

    let mode = RwSignal::new(initial_mode);
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let terms = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = AuthForm {
            username: username.get(),
            email: email.get(),
            password: password.get(),
            terms_accepted: terms.get(),
        };
        let submission = match validate_auth_form(mode.get(), &form) {
            Ok(submission) => submission,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                use crate::net::api;
                use crate::util::auth_flow::{submit_login, submit_registration};

                let result = match submission {
                    AuthSubmission::Login(req) => submit_login(session, api::login(&config, &req)).await,
                    AuthSubmission::Register(req) => {
                        submit_registration(session, api::register(&config, &req)).await
                    }
                };
                busy.set(false);
                match result {
                    Ok(()) => navigate("/lmsdashboard", NavigateOptions::default()),
                    Err(e) => {
                        leptos::logging::warn!("{} failed: {e}", mode.get_untracked().action());
                        error.set(Some(e.message));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (submission, session, &config, &navigate);
        }
    };

    let is_register = move || mode.get() == AuthMode::Register;

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1 class="auth-card__title">{move || format!("Welcome, {} to continue", mode.get().action())}</h1>
                <Show when=move || error.get().is_some()>
                    <div class="auth-alert" role="alert">
                        <strong>"Error"</strong>
                        <span>{move || error.get().unwrap_or_default()}</span>
                        <button type="button" class="auth-alert__close" on:click=move |_| error.set(None)>
                            "×"
                        </button>
                    </div>
                </Show>
                <label class="auth-field">
                    "Username"
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Your username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <Show when=is_register>
                    <label class="auth-field">
                        "Email"
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="hello@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                </Show>
                <label class="auth-field">
                    "Password"
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Your password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=is_register>
                    <label class="auth-field auth-field--checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || terms.get()
                            on:change=move |ev| terms.set(event_target_checked(&ev))
                        />
                        "I accept the terms and conditions"
                    </label>
                </Show>
                <div class="auth-card__footer">
                    <button
                        type="button"
                        class="auth-card__toggle"
                        on:click=move |_| {
                            mode.update(|m| *m = m.toggled());
                            error.set(None);
                        }
                    >
                        {move || mode.get().toggle_prompt()}
                    </button>
                    <button class="btn" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Please wait..." } else { mode.get().button_label() }}
                    </button>
                </div>
            </form>
        </div>
    }
}
