//! Public landing page.

use leptos::prelude::*;

use crate::components::header::FEATURES;
use crate::state::session::SessionStore;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    view! {
        <div class="home-page">
            <h1>"Learning Management System"</h1>
            <ul class="home-page__features">
                {FEATURES.iter().map(|(title, _)| view! { <li>{*title}</li> }).collect_view()}
            </ul>
            <Show
                when=move || session.is_logged_in()
                fallback=|| view! { <a class="btn" href="/login">"Log in to continue"</a> }
            >
                <p>"You are signed in."</p>
            </Show>
        </div>
    }
}
