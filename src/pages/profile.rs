//! Profile completion page.
//!
//! Prefilled from the session profile. A successful save replaces the
//! session user with the backend's copy and continues to the catalog.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ApiConfig;
use crate::net::types::ProfileUpdate;
use crate::state::session::SessionStore;
use crate::util::auth::install_unauth_redirect;

/// Validate and normalize profile input.
pub fn validate_profile(input: &ProfileUpdate) -> Result<ProfileUpdate, &'static str> {
    let first_name = input.first_name.trim();
    if first_name.is_empty() {
        return Err("First name is required");
    }
    let last_name = input.last_name.trim();
    if last_name.is_empty() {
        return Err("Last name is required");
    }
    let date_of_joining = input.date_of_joining.trim();
    if date_of_joining.is_empty() {
        return Err("Date of joining is required");
    }
    Ok(ProfileUpdate {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        phone_number: input.phone_number.trim().to_owned(),
        date_of_joining: date_of_joining.to_owned(),
    })
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let config = expect_context::<ApiConfig>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());

    let initial = ProfileUpdate::from_user(session.snapshot_untracked().user.as_ref());
    let first_name = RwSignal::new(initial.first_name);
    let last_name = RwSignal::new(initial.last_name);
    let phone_number = RwSignal::new(initial.phone_number);
    let date_of_joining = RwSignal::new(initial.date_of_joining);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let update = match validate_profile(&ProfileUpdate {
            first_name: first_name.get(),
            last_name: last_name.get(),
            phone_number: phone_number.get(),
            date_of_joining: date_of_joining.get(),
        }) {
            Ok(update) => update,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Saving...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let request = crate::net::api::update_profile(&config, &update);
                match crate::util::auth_flow::save_profile(session, request).await {
                    Ok(_) => navigate("/subject", NavigateOptions::default()),
                    Err(e) => {
                        leptos::logging::warn!("profile update failed: {e}");
                        info.set(format!("Profile update failed: {e}"));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (update, &config, &navigate);
        }
    };

    let text_field = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <label class="auth-field">
                {label}
                <input
                    class="auth-input"
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1 class="auth-card__title">"Complete Your Profile"</h1>
                <p class="auth-card__subtitle">"Please fill in your details to continue."</p>
                {text_field("First Name", "text", first_name)}
                {text_field("Last Name", "text", last_name)}
                {text_field("Phone Number", "tel", phone_number)}
                {text_field("Date of Joining", "date", date_of_joining)}
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <button class="btn" type="submit" disabled=move || busy.get()>
                    "Save and Continue"
                </button>
            </form>
        </div>
    }
}
