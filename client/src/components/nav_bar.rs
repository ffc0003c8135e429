//! Top navigation bar built from the route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links are derived from `RouteTable` so the bar never drifts from the
//! routes the guard knows about. Protected links stay visible while logged
//! out; following one lands on the guard's redirect.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::routes::RouteTable;
use crate::state::session::SessionState;

/// One rendered navigation link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    /// Route requires a session the user does not currently have.
    pub locked: bool,
}

/// Build links for every route in `routes`, in table order.
pub fn nav_links(routes: RouteTable<'_>, session: &SessionState) -> Vec<NavLink> {
    routes
        .iter()
        .map(|r| NavLink {
            href: r.path,
            label: r.page.title(),
            locked: r.requires_auth && !session.is_logged_in(),
        })
        .collect()
}

fn item_class(locked: bool) -> &'static str {
    if locked { "nav-bar__item nav-bar__item--locked" } else { "nav-bar__item" }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let links = move || session.with(|state| nav_links(RouteTable::builtin(), state));
    let who = move || session.with(|state| state.username().map(str::to_owned));

    view! {
        <nav class="nav-bar">
            <ul class="nav-bar__links">
                <For each=links key=|link: &NavLink| link.href let:link>
                    <li class=item_class(link.locked)>
                        <a href=link.href>{link.label}</a>
                    </li>
                </For>
            </ul>
            <span class="nav-bar__user">
                {move || who().map_or_else(|| "Not signed in".to_owned(), |name| format!("Signed in as {name}"))}
            </span>
        </nav>
    }
}
