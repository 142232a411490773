//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (redirects, form submission)
//! and delegates session writes to `util::auth_flow`.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod profile;
pub mod subjects;
