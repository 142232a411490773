//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one `SessionStore` at mount and provides it via context.
//! Route guards, the header, and the auth forms read it; only the login,
//! logout, profile, and route-observer paths write it.
//!
//! DESIGN
//! ======
//! Two states, `Anonymous` and `Authenticated`, with no terminal state.
//! Transitions are synchronous point mutations on a signal and are
//! idempotent: a write that would not change anything does not notify.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::nav::Role;
use crate::util::marker_cookie::MarkerCookie;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Anonymous,
    Authenticated,
}

/// Snapshot of what the client believes about the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub is_logged_in: bool,
    /// Profile, when a backend response has supplied one.
    pub user: Option<User>,
    /// Bumped once per Anonymous/Authenticated transition.
    pub transition_seq: u64,
}

impl SessionState {
    /// Initial state derived from the marker alone; no profile yet.
    pub fn from_marker(marker_set: bool) -> Self {
        Self { is_logged_in: marker_set, user: None, transition_seq: 0 }
    }

    pub fn status(&self) -> SessionStatus {
        if self.is_logged_in { SessionStatus::Authenticated } else { SessionStatus::Anonymous }
    }

    pub fn role(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.role.as_deref())
    }

    /// Move to `Authenticated`, attaching `user` when given.
    ///
    /// Returns whether anything changed. `None` keeps an existing profile.
    pub fn authenticate(&mut self, user: Option<User>) -> bool {
        let mut changed = false;
        if !self.is_logged_in {
            self.is_logged_in = true;
            self.transition_seq += 1;
            changed = true;
        }
        if let Some(user) = user {
            if self.user.as_ref() != Some(&user) {
                self.user = Some(user);
                changed = true;
            }
        }
        changed
    }

    /// Move to `Anonymous` and drop the profile. Returns whether anything changed.
    pub fn clear(&mut self) -> bool {
        let mut changed = false;
        if self.is_logged_in {
            self.is_logged_in = false;
            self.transition_seq += 1;
            changed = true;
        }
        if self.user.take().is_some() {
            changed = true;
        }
        changed
    }
}

/// Single owner of the session state. `Copy`, so closures can capture it freely.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
}

impl SessionStore {
    /// Read the marker once and build the initial store. Makes no network call.
    pub fn initialize(marker: &impl MarkerCookie) -> Self {
        Self::from_state(SessionState::from_marker(marker.is_set()))
    }

    pub fn from_state(state: SessionState) -> Self {
        Self { state: RwSignal::new(state) }
    }

    /// Read-only handle for consumers that subscribe to changes.
    pub fn signal(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    /// Tracked snapshot; re-runs the calling effect/view on change.
    pub fn snapshot(&self) -> SessionState {
        self.state.get()
    }

    pub fn snapshot_untracked(&self) -> SessionState {
        self.state.get_untracked()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.with(|s| s.is_logged_in)
    }

    pub fn role(&self) -> Role {
        self.state.with(|s| Role::classify(s.role()))
    }

    /// Transition to `Authenticated`. Returns whether the state changed.
    pub fn set_authenticated(&self, user: Option<User>) -> bool {
        let mut changed = false;
        self.state.maybe_update(|s| {
            changed = s.authenticate(user);
            changed
        });
        changed
    }

    /// Transition to `Anonymous`. Returns whether the state changed.
    pub fn set_anonymous(&self) -> bool {
        let mut changed = false;
        self.state.maybe_update(|s| {
            changed = s.clear();
            changed
        });
        changed
    }
}

/// Acknowledge a login or registration the backend has already accepted.
///
/// Performs no I/O and no validation. Callers invoke it only after their own
/// request resolved successfully.
pub fn complete_login(store: SessionStore, profile: Option<User>) {
    store.set_authenticated(profile);
}
