use super::*;
use crate::routes::{BUILTIN_ROUTES, Page, RouteRecord};

fn logged_in(name: &str) -> SessionState {
    let mut state = SessionState::default();
    state.login(name);
    state
}

fn redirect_to_root(from: &str) -> NavigationDecision {
    NavigationDecision::Redirect(Redirect { path: "/", redirect: from.to_owned() })
}

// =============================================================
// NavigationTarget
// =============================================================

#[test]
fn parse_plain_path() {
    let target = NavigationTarget::parse("/mainPage");
    assert_eq!(target.path(), "/mainPage");
    assert_eq!(target.full_path(), "/mainPage");
}

#[test]
fn parse_splits_query_and_fragment() {
    let target = NavigationTarget::parse("/uploadPage?season=2024#files");
    assert_eq!(target.path(), "/uploadPage");
    assert_eq!(target.full_path(), "/uploadPage?season=2024#files");
}

#[test]
fn parse_fragment_containing_question_mark() {
    let target = NavigationTarget::parse("/userPage#a?b");
    assert_eq!(target.path(), "/userPage");
    assert_eq!(target.full_path(), "/userPage#a?b");
}

#[test]
fn from_parts_accepts_prefixed_query_and_hash() {
    let target = NavigationTarget::from_parts("/timeCapsule", "?year=1990", "#top");
    assert_eq!(target.full_path(), "/timeCapsule?year=1990#top");
}

#[test]
fn from_parts_drops_empty_pieces() {
    let target = NavigationTarget::from_parts("/mainPage", "?", "");
    assert_eq!(target.full_path(), "/mainPage");
}

#[test]
fn empty_path_is_root() {
    assert_eq!(NavigationTarget::parse("").path(), "/");
    assert_eq!(NavigationTarget::parse("?a=1").full_path(), "/?a=1");
}

#[test]
fn with_fragment_appends_browser_fragment() {
    let target = NavigationTarget::from_parts("/timeCapsule", "?year=1990", "").with_fragment("#photos");
    assert_eq!(target.full_path(), "/timeCapsule?year=1990#photos");
}

#[test]
fn with_fragment_empty_clears_fragment() {
    let target = NavigationTarget::parse("/userPage#top").with_fragment("");
    assert_eq!(target.full_path(), "/userPage");
    assert_eq!(NavigationTarget::parse("/userPage#top").with_fragment("#").full_path(), "/userPage");
}

// =============================================================
// Redirect
// =============================================================

#[test]
fn redirect_href_encodes_original_path() {
    let redirect = Redirect { path: "/", redirect: "/uploadPage".to_owned() };
    assert_eq!(redirect.href(), "/?redirect=%2FuploadPage");
}

#[test]
fn redirect_href_encodes_nested_query() {
    let redirect = Redirect { path: "/", redirect: "/mainPage?a=1&b=2".to_owned() };
    assert_eq!(redirect.href(), "/?redirect=%2FmainPage%3Fa%3D1%26b%3D2");
}

// =============================================================
// decide
// =============================================================

#[test]
fn public_routes_always_allowed() {
    let routes = RouteTable::builtin();
    for record in routes.iter().filter(|r| !r.requires_auth) {
        let target = NavigationTarget::parse(record.path);
        assert!(decide(&target, &SessionState::default(), routes).is_allow(), "{}", record.path);
        assert!(decide(&target, &logged_in("alice"), routes).is_allow(), "{}", record.path);
    }
}

#[test]
fn protected_routes_redirect_when_logged_out() {
    let routes = RouteTable::builtin();
    for record in routes.iter().filter(|r| r.requires_auth) {
        let target = NavigationTarget::parse(record.path);
        assert_eq!(decide(&target, &SessionState::default(), routes), redirect_to_root(record.path));
    }
}

#[test]
fn protected_routes_allowed_when_logged_in() {
    let routes = RouteTable::builtin();
    let session = logged_in("alice");
    for record in routes.iter().filter(|r| r.requires_auth) {
        let target = NavigationTarget::parse(record.path);
        assert!(decide(&target, &session, routes).is_allow(), "{}", record.path);
    }
}

#[test]
fn logged_out_upload_redirects_with_original_path() {
    let decision = decide(&NavigationTarget::parse("/uploadPage"), &SessionState::default(), RouteTable::builtin());
    let NavigationDecision::Redirect(redirect) = decision else {
        panic!("expected redirect, got {decision:?}");
    };
    assert_eq!(redirect.path, "/");
    assert_eq!(redirect.redirect, "/uploadPage");
}

#[test]
fn login_then_main_page_allowed() {
    let mut session = SessionState::default();
    session.login("alice");
    let decision = decide(&NavigationTarget::parse("/mainPage"), &session, RouteTable::builtin());
    assert_eq!(decision, NavigationDecision::Allow);
}

#[test]
fn root_allowed_while_logged_out() {
    let decision = decide(&NavigationTarget::parse("/"), &SessionState::default(), RouteTable::builtin());
    assert_eq!(decision, NavigationDecision::Allow);
}

#[test]
fn logout_revokes_access() {
    let mut session = logged_in("alice");
    let target = NavigationTarget::parse("/userPage");
    assert!(decide(&target, &session, RouteTable::builtin()).is_allow());
    session.logout();
    assert_eq!(decide(&target, &session, RouteTable::builtin()), redirect_to_root("/userPage"));
}

#[test]
fn redirect_preserves_query_and_fragment() {
    let target = NavigationTarget::parse("/timeCapsule?year=2001#photos");
    assert_eq!(
        decide(&target, &SessionState::default(), RouteTable::builtin()),
        redirect_to_root("/timeCapsule?year=2001#photos")
    );
}

#[test]
fn verdict_without_fragment_then_fragment_restored_for_href() {
    // The reactive guard decides on path + query and adds the fragment when
    // it builds the redirect in the browser.
    let decision = decide(
        &NavigationTarget::from_parts("/uploadPage", "?batch=7", ""),
        &SessionState::default(),
        RouteTable::builtin(),
    );
    let NavigationDecision::Redirect(redirect) = decision else {
        panic!("expected redirect, got {decision:?}");
    };
    assert_eq!(redirect.redirect, "/uploadPage?batch=7");

    let requested = NavigationTarget::parse(&redirect.redirect).with_fragment("files");
    let redirect = Redirect { redirect: requested.full_path(), ..redirect };
    assert_eq!(redirect.href(), "/?redirect=%2FuploadPage%3Fbatch%3D7%23files");
}

#[test]
fn case_and_trailing_slash_variants_are_still_guarded() {
    let target = NavigationTarget::parse("/MAINPAGE/");
    assert_eq!(
        decide(&target, &SessionState::default(), RouteTable::builtin()),
        redirect_to_root("/MAINPAGE/")
    );
}

#[test]
fn unknown_path_allowed() {
    let target = NavigationTarget::parse("/does-not-exist");
    assert!(decide(&target, &SessionState::default(), RouteTable::builtin()).is_allow());
}

#[test]
fn custom_table_is_respected() {
    let records = [
        RouteRecord::new("/", "root", Page::Front),
        RouteRecord::new("/regiPage", "regi", Page::Registration).protected(),
    ];
    let routes = RouteTable::new(&records).unwrap();
    assert_eq!(
        decide(&NavigationTarget::parse("/regiPage"), &SessionState::default(), routes),
        redirect_to_root("/regiPage")
    );
    // The built-in table leaves the same path public.
    assert!(decide(&NavigationTarget::parse("/regiPage"), &SessionState::default(), RouteTable::new(&BUILTIN_ROUTES).unwrap()).is_allow());
}
