//! Front page with the local sign-in form.
//!
//! Submitting a name records it in the session store and moves on to the
//! main page. Credentials are not checked here. The `redirect` query
//! parameter left by the navigation guard is not consumed.

#[cfg(test)]
#[path = "front_test.rs"]
mod front_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::{ROOT_PATH, RouteTable};
use crate::state::session::SessionState;

/// Trim the submitted name and require a value.
pub(crate) fn validate_username_input(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("Enter a username first.");
    }
    Ok(name.to_owned())
}

/// Where a successful sign-in goes next.
pub(crate) fn landing_path() -> &'static str {
    RouteTable::builtin().by_name("mainPage").map_or(ROOT_PATH, |r| r.path)
}

#[component]
pub fn FrontPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_username_input(&username.get()) {
            Ok(name) => {
                info.set(String::new());
                session.update(|s| s.login(name));
                navigate(landing_path(), NavigateOptions::default());
            }
            Err(msg) => info.set(msg.to_owned()),
        }
    };

    view! {
        <div class="front-page">
            <div class="login-card">
                <h1>"Intellicrop"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <Show
                    when=move || session.with(SessionState::is_logged_in)
                    fallback=|| view! {
                        <p class="login-card__subtitle">
                            "No account yet? "
                            <a href="/regiPage">"Register"</a>
                        </p>
                    }
                >
                    <p class="login-card__subtitle">
                        "Signed in as "
                        {move || session.with(|s| s.username().unwrap_or_default().to_owned())}
                        " "
                        <a href=landing_path()>"Continue"</a>
                    </p>
                </Show>
            </div>
        </div>
    }
}
