//! Navigation visibility derived from the session snapshot.
//!
//! DESIGN
//! ======
//! `visible_actions` is a pure, total function over `(is_logged_in, role)`.
//! It only shapes the header; the backend still decides what a user may do.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

pub const ADMIN_ROLE: &str = "ADMIN";

/// Role as far as navigation cares: admins and everyone else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    Admin,
    #[default]
    Member,
}

impl Role {
    /// Classify a raw role string. Missing or unknown roles are members.
    pub fn classify(raw: Option<&str>) -> Self {
        match raw {
            Some(ADMIN_ROLE) => Self::Admin,
            _ => Self::Member,
        }
    }
}

/// Entries the header can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Home,
    Features,
    /// Management dashboard (admins).
    LmsDashboard,
    /// Subject/course catalog (non-admins).
    Subjects,
    Login,
    Signup,
    Logout,
}

impl NavAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Features => "Features",
            Self::LmsDashboard => "LMS Dashboard",
            Self::Subjects => "Subjects",
            Self::Login => "Log in",
            Self::Signup => "Sign up",
            Self::Logout => "Logout",
        }
    }

    /// Route for link actions. `Logout` and `Features` are buttons.
    pub fn href(self) -> Option<&'static str> {
        match self {
            Self::Home => Some("/"),
            Self::LmsDashboard => Some("/lmsdashboard"),
            Self::Subjects => Some("/subject"),
            Self::Login => Some("/login"),
            Self::Signup => Some("/signup"),
            Self::Features | Self::Logout => None,
        }
    }
}

const PUBLIC_ACTIONS: &[NavAction] = &[NavAction::Home, NavAction::Features, NavAction::Login, NavAction::Signup];
const ADMIN_ACTIONS: &[NavAction] = &[NavAction::Home, NavAction::Features, NavAction::LmsDashboard, NavAction::Logout];
const MEMBER_ACTIONS: &[NavAction] = &[NavAction::Home, NavAction::Features, NavAction::Subjects, NavAction::Logout];

/// Navigation actions visible for the given session view.
pub fn visible_actions(is_logged_in: bool, role: Option<&str>) -> &'static [NavAction] {
    if !is_logged_in {
        return PUBLIC_ACTIONS;
    }
    match Role::classify(role) {
        Role::Admin => ADMIN_ACTIONS,
        Role::Member => MEMBER_ACTIONS,
    }
}
