//! Main page shown after sign-in.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn MainPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let greeting = move || {
        session.with(|s| s.username().map_or_else(|| "Welcome".to_owned(), |name| format!("Welcome, {name}")))
    };

    view! {
        <div class="main-page">
            <h1>{greeting}</h1>
            <ul class="main-page__actions">
                <li><a href="/uploadPage">"Upload imagery"</a></li>
                <li><a href="/timeCapsule">"Browse the time capsule"</a></li>
                <li><a href="/userPage">"Account settings"</a></li>
            </ul>
        </div>
    }
}
