//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and session-writing
//! flows from page and component logic to improve reuse and testability.

pub mod auth;
pub mod auth_flow;
pub mod marker_cookie;
pub mod route_observer;
