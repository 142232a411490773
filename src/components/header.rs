//! Top navigation bar with a mobile drawer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both the desktop bar and the drawer render the same `visible_actions`
//! list, recomputed from the session snapshot on every change. Logout runs
//! the full coordinator flow before reloading into `/login`.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::state::nav::{NavAction, visible_actions};
use crate::state::session::SessionStore;

/// Static feature blurbs shown under the "Features" entry.
pub const FEATURES: &[(&str, &str)] = &[
    ("Course Creation", "Build learning and assignment Jotforms with drag-and-drop ease"),
    ("Group Management", "Create groups and assign users efficiently"),
    ("Course Assignment", "Map content to courses and assign to groups"),
    ("User Access", "Secure login and personalized course views"),
    ("Analytics", "View detailed analytics by group and course"),
    ("Submissions", "Track assignment submissions and scores"),
];

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let config = StoredValue::new(expect_context::<ApiConfig>());

    let drawer_open = RwSignal::new(false);
    let features_open = RwSignal::new(false);

    let actions = move || {
        let state = session.snapshot();
        visible_actions(state.is_logged_in, state.role())
    };

    let render_actions = move |in_drawer: bool| {
        actions()
            .iter()
            .map(|action| render_action(*action, in_drawer, session, config, drawer_open, features_open))
            .collect_view()
    };

    view! {
        <header class="site-header">
            <span class="site-header__brand">"LMS"</span>
            <nav class="site-header__links">{move || render_actions(false)}</nav>
            <button
                class="site-header__burger"
                aria-label="Toggle navigation"
                on:click=move |_| drawer_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
        </header>
        <Show when=move || features_open.get()>
            <div class="features-panel">
                {FEATURES
                    .iter()
                    .map(|(title, description)| {
                        view! {
                            <div class="features-panel__item">
                                <strong>{*title}</strong>
                                <p>{*description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Show>
        <Show when=move || drawer_open.get()>
            <aside class="site-drawer">
                <nav class="site-drawer__links">{move || render_actions(true)}</nav>
            </aside>
        </Show>
    }
}

fn render_action(
    action: NavAction,
    in_drawer: bool,
    session: SessionStore,
    config: StoredValue<ApiConfig>,
    drawer_open: RwSignal<bool>,
    features_open: RwSignal<bool>,
) -> AnyView {
    let class = if in_drawer { "site-drawer__link" } else { "site-header__link" };
    match (action, action.href()) {
        (NavAction::Logout, _) => view! {
            <button
                class="btn btn--danger"
                on:click=move |_| {
                    drawer_open.set(false);
                    sign_out(session, config.get_value());
                }
            >
                {action.label()}
            </button>
        }
        .into_any(),
        (_, Some(href)) => view! {
            <a class=class href=href on:click=move |_| drawer_open.set(false)>
                {action.label()}
            </a>
        }
        .into_any(),
        (_, None) => view! {
            <button class=class on:click=move |_| features_open.update(|open| *open = !*open)>
                {action.label()}
            </button>
        }
        .into_any(),
    }
}

/// Run the logout coordinator, then leave for `/login` with a full reload.
fn sign_out(session: SessionStore, config: ApiConfig) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let marker = crate::util::marker_cookie::BrowserMarker;
        crate::util::auth_flow::logout(session, &marker, crate::net::api::logout(&config)).await;
        if let Some(w) = web_sys::window() {
            let _ = w.location().set_href("/login");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, config);
    }
}
