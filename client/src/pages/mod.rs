//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is the view a `routes::Page` points at. Access control lives in
//! the navigation guard, so pages assume they may render.

pub mod front;
pub mod main;
pub mod registration;
pub mod time_capsule;
pub mod upload;
pub mod user;
