//! In-memory session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal<SessionState>` as context. The navigation
//! guard reads it on every location change; the front and user pages call
//! `login`/`logout`. Nothing is persisted, so a reload starts logged out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Identity of the current user, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    username: Option<String>,
}

impl SessionState {
    /// Set the identity. No validation; credential checks happen elsewhere.
    pub fn login(&mut self, username: impl Into<String>) {
        self.username = Some(username.into());
    }

    pub fn logout(&mut self) {
        self.username = None;
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }
}
