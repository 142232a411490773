//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the Anonymous/Authenticated machine; `nav` derives header
//! visibility from it without holding state of its own.

pub mod nav;
pub mod session;
