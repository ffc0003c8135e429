//! Public registration page.

use leptos::prelude::*;

#[component]
pub fn RegistrationPage() -> impl IntoView {
    view! {
        <div class="registration-page">
            <h1>"Create an account"</h1>
            <p>"Registration is handled by the Intellicrop service."</p>
            <a href="/">"Back to sign in"</a>
        </div>
    }
}
