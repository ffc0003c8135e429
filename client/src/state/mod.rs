//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is provided through Leptos context rather than globals so the
//! navigation guard receives it explicitly.

pub mod session;
