//! Root application component with routing and context providers.
//!
//! The Leptos router forwards every location to [`PageOutlet`], which asks
//! the navigation guard first and only then resolves the page through the
//! route table. The table, not the `<Routes>` list, decides what exists.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    front::FrontPage, main::MainPage, registration::RegistrationPage, time_capsule::TimeCapsulePage,
    upload::UploadPage, user::UserPage,
};
use crate::routes::{Page, RouteTable};
use crate::state::session::SessionState;
use crate::util::guard::{NavigationDecision, install_route_guard};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One session per app instance; every SSR render starts logged out.
    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/intellicrop.css"/>
        <Title text="Intellicrop"/>

        <Router>
            <NavBar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=PageOutlet/>
                    <Route path=WildcardSegment("any") view=PageOutlet/>
                </Routes>
            </main>
        </Router>
    }
}

/// What the outlet shows for the current location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outlet {
    /// Guard is redirecting; render nothing.
    Withheld,
    Page(Page),
    NotFound,
}

#[component]
fn PageOutlet() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let routes = RouteTable::builtin();
    let decision = install_route_guard(session, routes, use_navigate());
    let pathname = use_location().pathname;

    let outlet = Memo::new(move |_| decision.with(|d| pathname.with(|path| outlet_for(d, path, routes))));

    move || match outlet.get() {
        Outlet::Withheld => ().into_any(),
        Outlet::NotFound => "Page not found.".into_any(),
        Outlet::Page(page) => render_page(page),
    }
}

/// Protected content is withheld until the guard allows the location.
fn outlet_for(decision: &NavigationDecision, path: &str, routes: RouteTable<'_>) -> Outlet {
    if !decision.is_allow() {
        return Outlet::Withheld;
    }
    routes.resolve(path).map_or(Outlet::NotFound, |r| Outlet::Page(r.page))
}

fn render_page(page: Page) -> AnyView {
    match page {
        Page::Front => view! { <FrontPage/> }.into_any(),
        Page::Main => view! { <MainPage/> }.into_any(),
        Page::Registration => view! { <RegistrationPage/> }.into_any(),
        Page::Upload => view! { <UploadPage/> }.into_any(),
        Page::TimeCapsule => view! { <TimeCapsulePage/> }.into_any(),
        Page::User => view! { <UserPage/> }.into_any(),
    }
}
