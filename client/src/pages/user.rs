//! Account page with the current identity and logout.
//!
//! Logout leaves the page first and clears the session when the page is torn
//! down. By then the location is `/`, so the navigation guard never sees the
//! protected page with an empty session.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::ROOT_PATH;
use crate::state::session::SessionState;

/// Register a cleanup on the current owner that logs out once armed.
///
/// Returns the arming function; cleanup without arming leaves the session
/// untouched.
pub(crate) fn logout_on_cleanup(session: RwSignal<SessionState>) -> impl Fn() + Clone + 'static {
    let armed = Arc::new(AtomicBool::new(false));
    on_cleanup({
        let armed = Arc::clone(&armed);
        move || {
            if armed.load(Ordering::Acquire) {
                session.update(SessionState::logout);
            }
        }
    });
    move || armed.store(true, Ordering::Release)
}

#[component]
pub fn UserPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let arm_logout = logout_on_cleanup(session);

    let on_logout = move |_| {
        arm_logout();
        navigate(ROOT_PATH, NavigateOptions::default());
    };

    view! {
        <div class="user-page">
            <h1>"Account"</h1>
            <p>
                "Username: "
                <strong>{move || session.with(|s| s.username().unwrap_or_default().to_owned())}</strong>
            </p>
            <button class="btn" on:click=on_logout>
                "Log out"
            </button>
        </div>
    }
}
