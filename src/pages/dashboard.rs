//! Management dashboard landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admins land here after login. The page only links out to the management
//! screens; those screens talk to the backend directly and are not part of
//! this client core.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionState, SessionStore};
use crate::util::auth::{install_unauth_redirect, is_admin_view};

/// A dashboard entry linking to one management screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManagementCard {
    pub title: &'static str,
    pub description: &'static str,
    pub route: &'static str,
    pub manage_label: &'static str,
}

pub const MANAGEMENT_CARDS: &[ManagementCard] = &[
    ManagementCard {
        title: "User Management",
        description: "Create, update, or remove users and assign them to learning groups.",
        route: "/usermanagment",
        manage_label: "Manage Users",
    },
    ManagementCard {
        title: "Jotform Management",
        description: "Create, edit, or remove the Jotforms behind learning material and assignments.",
        route: "/jotformmanagment",
        manage_label: "Manage Jotforms",
    },
    ManagementCard {
        title: "Subject Management",
        description: "Group courses into subjects and organize them by learning group.",
        route: "/subjectmanagment",
        manage_label: "Manage Subjects",
    },
    ManagementCard {
        title: "Course Management",
        description: "Map Jotforms to courses and assign courses to subjects.",
        route: "/coursemanagment",
        manage_label: "Manage Courses",
    },
    ManagementCard {
        title: "Result Management",
        description: "Upload and review assignment submissions and scores.",
        route: "/resultmanagment",
        manage_label: "Manage Results",
    },
];

/// Cards this session may see. Non-admins get none.
pub fn visible_cards(state: &SessionState) -> &'static [ManagementCard] {
    if is_admin_view(state) { MANAGEMENT_CARDS } else { &[] }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    install_unauth_redirect(session, use_navigate());

    view! {
        <Show
            when=move || session.is_logged_in()
            fallback=|| view! { <div class="dashboard-page"><p>"Redirecting to login..."</p></div> }
        >
            <div class="dashboard-page">
                <h1 class="dashboard-page__title">"LMS Dashboard"</h1>
                <Show
                    when=move || is_admin_view(&session.snapshot())
                    fallback=|| view! { <p class="dashboard-page__note">"Management actions are available to administrators."</p> }
                >
                    <div class="dashboard-grid">
                        {move || {
                            visible_cards(&session.snapshot())
                                .iter()
                                .map(|card| {
                                    view! {
                                        <div class="dashboard-card">
                                            <h2>{card.title}</h2>
                                            <p>{card.description}</p>
                                            <a class="btn" href=card.route>{card.manage_label}</a>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </div>
        </Show>
    }
}
