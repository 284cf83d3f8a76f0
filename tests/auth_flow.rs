//! Authentication flow integration tests
//!
//! End-to-end coverage of the session lifecycle over the real router and
//! middleware stack: sign-up, log-in, identity resolution on subsequent
//! requests, log-out, and the stale-token path.

mod common;

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;

use authgate::auth::UserStore;
use common::{body_string, form_post, get, send, session_cookie, test_app};

/// Log a user in and return the session cookie
async fn log_in_as(app: &axum::Router, username: &str, password: &str) -> String {
    let body = format!("username={username}&password={password}");
    let response = send(app, form_post("/log-in", &body, None)).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    session_cookie(&response).expect("successful log-in should establish a session")
}

#[tokio::test]
async fn sign_up_redirects_home_without_establishing_a_session() {
    let (app, users) = test_app();

    let response = send(
        &app,
        form_post("/sign-up", "username=alice&password=secret", None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
        "/"
    );

    // The account exists...
    assert!(users.user_by_username("alice").await.unwrap().is_some());

    // ...but the user still has to log in: whatever the response carried,
    // a follow-up request renders the anonymous home view.
    let cookie = session_cookie(&response);
    let home = send(&app, get("/", cookie.as_deref())).await;
    let markup = body_string(home).await;
    assert!(markup.contains("Please log in"));
    assert!(!markup.contains("Welcome back"));
}

#[tokio::test]
async fn sign_up_then_log_in_resolves_the_identity() {
    let (app, _users) = test_app();

    send(
        &app,
        form_post("/sign-up", "username=alice&password=secret", None),
    )
    .await;

    let cookie = log_in_as(&app, "alice", "secret").await;

    let home = send(&app, get("/", Some(&cookie))).await;
    assert_eq!(home.status(), StatusCode::OK);
    let markup = body_string(home).await;
    assert!(markup.contains("Welcome back, alice!"));
}

#[tokio::test]
async fn log_in_with_unknown_username_redirects_home_without_identity() {
    let (app, _users) = test_app();

    let response = send(
        &app,
        form_post("/log-in", "username=nobody&password=secret", None),
    )
    .await;

    // Indistinguishable from success at the HTTP level: same redirect.
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
        "/"
    );

    let cookie = session_cookie(&response);
    let home = send(&app, get("/", cookie.as_deref())).await;
    let markup = body_string(home).await;
    assert!(markup.contains("Please log in"));
}

#[tokio::test]
async fn log_in_with_wrong_password_redirects_home_without_identity() {
    let (app, _users) = test_app();

    send(
        &app,
        form_post("/sign-up", "username=alice&password=secret", None),
    )
    .await;

    let response = send(
        &app,
        form_post("/log-in", "username=alice&password=wrong", None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FOUND);

    let cookie = session_cookie(&response);
    let home = send(&app, get("/", cookie.as_deref())).await;
    let markup = body_string(home).await;
    assert!(markup.contains("Please log in"));
}

#[tokio::test]
async fn log_out_resolves_anonymous_even_with_the_cookie_still_present() {
    let (app, _users) = test_app();

    send(
        &app,
        form_post("/sign-up", "username=alice&password=secret", None),
    )
    .await;
    let cookie = log_in_as(&app, "alice", "secret").await;

    let response = send(&app, get("/log-out", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::FOUND);

    // The client still presents the old session cookie; only the token
    // inside the session is gone.
    let home = send(&app, get("/", Some(&cookie))).await;
    assert_eq!(home.status(), StatusCode::OK);
    let markup = body_string(home).await;
    assert!(markup.contains("Please log in"));
    assert!(!markup.contains("Welcome back"));
}

#[tokio::test]
async fn stale_token_for_a_deleted_user_resolves_to_anonymous() {
    let (app, users) = test_app();

    send(
        &app,
        form_post("/sign-up", "username=alice&password=secret", None),
    )
    .await;
    let cookie = log_in_as(&app, "alice", "secret").await;

    // The user disappears while the session still references them.
    let alice = users.user_by_username("alice").await.unwrap().unwrap();
    users.remove_user(alice.id).await;

    // The request must not crash; identity degrades to anonymous.
    let home = send(&app, get("/", Some(&cookie))).await;
    assert_eq!(home.status(), StatusCode::OK);
    let markup = body_string(home).await;
    assert!(markup.contains("Please log in"));
}

#[tokio::test]
async fn sign_up_with_blank_username_is_rejected_before_the_store() {
    let (app, users) = test_app();

    let response = send(&app, form_post("/sign-up", "username=&password=secret", None)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(users.user_by_username("").await.unwrap().is_none());
}

#[tokio::test]
async fn log_in_with_blank_password_is_rejected() {
    let (app, _users) = test_app();

    let response = send(&app, form_post("/log-in", "username=alice&password=", None)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn sign_up_page_serves_the_form() {
    let (app, _users) = test_app();

    let response = send(&app, get("/sign-up", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let markup = body_string(response).await;
    assert!(markup.contains(r#"action="/sign-up""#));
}

#[tokio::test]
async fn unknown_route_falls_back_to_404() {
    let (app, _users) = test_app();

    let response = send(&app, get("/no-such-page", None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
