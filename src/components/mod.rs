//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome while reading the session from Leptos
//! context.

pub mod header;
