//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::config::ApiConfig;
use crate::pages::{
    dashboard::DashboardPage,
    home::HomePage,
    login::{LoginPage, SignupPage},
    profile::ProfilePage,
    subjects::SubjectsPage,
};
use crate::state::session::SessionStore;
use crate::util::marker_cookie::BrowserMarker;
#[cfg(feature = "ssr")]
use crate::util::marker_cookie::RequestMarker;
use crate::util::route_observer::install_route_observer;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the `SessionStore` for the lifetime of the tab and provides it, with
/// the API config, to every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    #[cfg(feature = "ssr")]
    let session = SessionStore::initialize(&RequestMarker::from_context());
    #[cfg(not(feature = "ssr"))]
    let session = SessionStore::initialize(&BrowserMarker);
    provide_context(session);
    provide_context(ApiConfig::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/lms-client.css"/>
        <Title text="LMS"/>

        <Router>
            <SessionSync/>
            <Header/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("lmsdashboard") view=DashboardPage/>
                    <Route path=StaticSegment("subject") view=SubjectsPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Keeps the session aligned with the marker cookie across navigations.
#[component]
fn SessionSync() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    install_route_observer(session, BrowserMarker);
}
