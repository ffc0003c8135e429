//! Navigation guard between the route table and the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `decide` is the single decision point run before a page renders: public
//! routes always pass, protected routes pass only with a logged-in session,
//! and everything else is sent to the root route with the requested full
//! path in the `redirect` query parameter. Nothing reads that parameter back
//! yet, so login does not return the user to where they started.
//!
//! `install_route_guard` wires `decide` into the router: it re-evaluates on
//! every path, query or session change and replaces the history entry when
//! the verdict is a redirect. The fragment never reaches the server, so it is
//! only read in the browser, when the redirect href is built.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;
use url::form_urlencoded;

use crate::routes::{ROOT_PATH, RouteTable};
use crate::state::session::SessionState;

/// Query parameter carrying the originally requested full path.
pub const REDIRECT_QUERY_KEY: &str = "redirect";

/// A requested location split into path, query and fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationTarget {
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl NavigationTarget {
    /// Split an href such as `/uploadPage?x=1#top`.
    #[must_use]
    pub fn parse(href: &str) -> Self {
        let (rest, fragment) = href.split_once('#').unwrap_or((href, ""));
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
        Self::from_parts(path, query, fragment)
    }

    /// Build from router location parts. A leading `?` on `query` or `#` on
    /// `fragment` is accepted and dropped.
    #[must_use]
    pub fn from_parts(path: &str, query: &str, fragment: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        Self {
            path: if path.is_empty() { ROOT_PATH.to_owned() } else { path.to_owned() },
            query: (!query.is_empty()).then(|| query.to_owned()),
            fragment: (!fragment.is_empty()).then(|| fragment.to_owned()),
        }
    }

    /// Replace the fragment; an empty `fragment` (or a bare `#`) clears it.
    #[must_use]
    pub fn with_fragment(mut self, fragment: &str) -> Self {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        self.fragment = (!fragment.is_empty()).then(|| fragment.to_owned());
        self
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path plus `?query` and `#fragment` when present.
    #[must_use]
    pub fn full_path(&self) -> String {
        let mut full = self.path.clone();
        if let Some(query) = &self.query {
            full.push('?');
            full.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            full.push('#');
            full.push_str(fragment);
        }
        full
    }
}

/// Where a rejected navigation is sent instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub path: &'static str,
    /// Full path of the rejected request.
    pub redirect: String,
}

impl Redirect {
    /// Render as an href, e.g. `/?redirect=%2FuploadPage`.
    #[must_use]
    pub fn href(&self) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair(REDIRECT_QUERY_KEY, &self.redirect)
            .finish();
        format!("{}?{query}", self.path)
    }
}

/// Verdict of the navigation guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    Allow,
    Redirect(Redirect),
}

impl NavigationDecision {
    #[must_use]
    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Decide whether navigation to `target` may proceed under `session`.
///
/// Paths missing from `routes` are allowed; the router shows its not-found
/// view for them.
#[must_use]
pub fn decide(target: &NavigationTarget, session: &SessionState, routes: RouteTable<'_>) -> NavigationDecision {
    let requires_auth = routes.resolve(target.path()).is_some_and(|r| r.requires_auth);
    if !requires_auth || session.is_logged_in() {
        return NavigationDecision::Allow;
    }
    NavigationDecision::Redirect(Redirect { path: ROOT_PATH, redirect: target.full_path() })
}

/// Run [`decide`] against the current location and session, redirecting
/// whenever the verdict is not `Allow`. Must be called inside a `<Router>`.
///
/// Returns the reactive decision so callers can withhold protected content
/// until it allows.
pub fn install_route_guard<F>(
    session: RwSignal<SessionState>,
    routes: RouteTable<'static>,
    navigate: F,
) -> Memo<NavigationDecision>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    let (pathname, search, hash) = (location.pathname, location.search, location.hash);
    let decision = Memo::new(move |_| {
        let target = NavigationTarget::from_parts(&pathname.get(), &search.get(), "");
        session.with(|state| decide(&target, state, routes))
    });

    // Effects only run in the browser, where reading the fragment is safe.
    Effect::new(move || {
        if let NavigationDecision::Redirect(redirect) = decision.get() {
            let requested = NavigationTarget::parse(&redirect.redirect).with_fragment(&hash.get_untracked());
            let redirect = Redirect { redirect: requested.full_path(), ..redirect };
            let href = redirect.href();
            #[cfg(feature = "hydrate")]
            log::info!("navigation to {} requires login; redirecting to {href}", redirect.redirect);
            navigate(&href, NavigateOptions { replace: true, ..NavigateOptions::default() });
        } else {
            #[cfg(feature = "hydrate")]
            log::debug!("navigation to {} allowed", pathname.get_untracked());
        }
    });

    decision
}
