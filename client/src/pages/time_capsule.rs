//! Time capsule page listing earlier results.

use leptos::prelude::*;

#[component]
pub fn TimeCapsulePage() -> impl IntoView {
    view! {
        <div class="time-capsule-page">
            <h1>"Time Capsule"</h1>
            <p>"Previously processed results appear here."</p>
            <a href="/mainPage">"Back"</a>
        </div>
    }
}
