//! Networking modules for the REST auth endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` normalizes their failures, and
//! `types` defines the wire schema shared with the backend.

pub mod api;
pub mod error;
pub mod types;
