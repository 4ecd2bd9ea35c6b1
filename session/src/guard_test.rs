use super::*;
use crate::session::Credentials;
use crate::types::UserProfile;
use serde_json::json;

fn authenticated() -> SessionState {
    SessionState::Authenticated(Credentials {
        token: "abc".to_owned(),
        user: UserProfile::from_value(json!({"id": 1})).unwrap(),
    })
}

#[test]
fn parse_known_paths() {
    assert_eq!(AppRoute::parse("/"), AppRoute::Home);
    assert_eq!(AppRoute::parse(""), AppRoute::Home);
    assert_eq!(AppRoute::parse("/projects"), AppRoute::Projects);
    assert_eq!(AppRoute::parse("/blog"), AppRoute::Blog);
    assert_eq!(AppRoute::parse("/blog/abc123"), AppRoute::BlogPost("abc123".to_owned()));
    assert_eq!(AppRoute::parse("/contact"), AppRoute::Contact);
    assert_eq!(AppRoute::parse("/login"), AppRoute::Login);
    assert_eq!(AppRoute::parse("/register"), AppRoute::Register);
    assert_eq!(AppRoute::parse("/admin"), AppRoute::Admin);
}

#[test]
fn parse_ignores_trailing_slash_and_query() {
    assert_eq!(AppRoute::parse("/admin/"), AppRoute::Admin);
    assert_eq!(AppRoute::parse("/blog/7?ref=home"), AppRoute::BlogPost("7".to_owned()));
    assert_eq!(AppRoute::parse("/contact#form"), AppRoute::Contact);
}

#[test]
fn parse_unknown_is_not_found() {
    assert_eq!(AppRoute::parse("/nope"), AppRoute::NotFound);
    assert_eq!(AppRoute::parse("/blog/1/edit"), AppRoute::NotFound);
    assert_eq!(AppRoute::parse("/admin/users"), AppRoute::NotFound);
}

#[test]
fn path_round_trips_through_parse() {
    let routes = [
        AppRoute::Home,
        AppRoute::Projects,
        AppRoute::Blog,
        AppRoute::BlogPost("b1".to_owned()),
        AppRoute::Contact,
        AppRoute::Login,
        AppRoute::Register,
        AppRoute::Admin,
    ];
    for route in routes {
        assert_eq!(AppRoute::parse(&route.path()), route);
    }
}

#[test]
fn only_admin_requires_auth() {
    assert!(AppRoute::Admin.requires_auth());
    assert!(!AppRoute::Home.requires_auth());
    assert!(!AppRoute::BlogPost("x".to_owned()).requires_auth());
    assert!(!AppRoute::Login.requires_auth());
    assert!(!AppRoute::NotFound.requires_auth());
}

#[test]
fn anonymous_admin_redirects_to_login() {
    assert_eq!(guard(&SessionState::Anonymous, &AppRoute::Admin), GuardDecision::Redirect("/login"));
}

#[test]
fn loading_admin_is_pending() {
    assert_eq!(guard(&SessionState::Uninitialized, &AppRoute::Admin), GuardDecision::Pending);
}

#[test]
fn authenticated_admin_renders() {
    assert_eq!(guard(&authenticated(), &AppRoute::Admin), GuardDecision::Render);
}

#[test]
fn public_routes_render_in_every_state() {
    for state in [SessionState::Uninitialized, SessionState::Anonymous, authenticated()] {
        for route in [AppRoute::Home, AppRoute::Blog, AppRoute::Contact, AppRoute::NotFound] {
            assert_eq!(guard(&state, &route), GuardDecision::Render);
        }
    }
}
