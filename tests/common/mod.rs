//! Common test utilities
//!
//! Builds the gateway over in-memory user and session stores - wired in
//! through the same seams production uses for PostgreSQL - and provides
//! request plumbing for driving it with `tower::ServiceExt::oneshot`,
//! including carrying the session cookie between requests.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use authgate::auth::memory::MemoryUserStore;
use authgate::routes::create_router;
use authgate::server::AppState;

/// Build the full application over in-memory stores
///
/// Returns the router plus a handle to the user store so tests can
/// inspect or mutate it out of band.
pub fn test_app() -> (Router, MemoryUserStore) {
    let users = MemoryUserStore::new();
    let session_layer = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);
    let app = create_router(AppState::new(Arc::new(users.clone())), session_layer);
    (app, users)
}

/// Drive one request through the app
pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone()
        .oneshot(request)
        .await
        .expect("request should not fail at the service level")
}

/// GET request, optionally carrying a session cookie
pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).expect("valid request")
}

/// Form POST request, optionally carrying a session cookie
pub fn form_post(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

/// Extract the session cookie from a response, if one was set
pub fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|pair| pair.to_string())
}

/// Collect a response body into a string
pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should collect");
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}
