//! Subject catalog landing page for non-admin users.
//!
//! The catalog itself is fetched and rendered by the course screens; this
//! page hosts the protected-route check and the greeting.

#[cfg(test)]
#[path = "subjects_test.rs"]
mod subjects_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;
use crate::util::auth::install_unauth_redirect;

/// Greeting for the catalog header, falling back when no profile is loaded yet.
pub fn greeting(first_name: Option<&str>) -> String {
    match first_name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => format!("Welcome back, {name}"),
        None => "Welcome back".to_owned(),
    }
}

#[component]
pub fn SubjectsPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    install_unauth_redirect(session, use_navigate());

    let title = move || greeting(session.snapshot().user.as_ref().and_then(|u| u.first_name.as_deref()));

    view! {
        <div class="catalog-page">
            <h1 class="catalog-page__title">{title}</h1>
            <p>"Course Catalog"</p>
            <a class="btn" href="/profile">"Update profile"</a>
        </div>
    }
}
