//! Session Lifecycle Handlers
//!
//! This module contains the HTTP handlers for the session lifecycle
//! endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Handler exports and the shared redirect
//! ├── types.rs    - Form payload and validation
//! ├── sign_up.rs  - Account creation handler
//! ├── log_in.rs   - Session establishment handler
//! └── log_out.rs  - Session teardown handler
//! ```
//!
//! # Handlers
//!
//! - **`sign_up`** - POST /sign-up - create an account (does not log in)
//! - **`log_in`** - POST /log-in - verify credentials, establish session
//! - **`log_out`** - GET /log-out - remove the identity binding
//!
//! # Redirect Policy
//!
//! Every endpoint answers with a 302 to the home surface - sign-up and
//! log-out on success, log-in on success AND on rejected credentials. The
//! failure reason is logged, never surfaced. axum's `Redirect` helpers emit
//! 303/307/308, so the 302 is built directly.

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::Response,
};

/// Form payload and validation
pub mod types;

/// Account creation handler
pub mod sign_up;

/// Session establishment handler
pub mod log_in;

/// Session teardown handler
pub mod log_out;

// Re-export commonly used types and handlers
pub use log_in::log_in;
pub use log_out::log_out;
pub use sign_up::sign_up;
pub use types::CredentialsForm;

/// 302 Found redirect to the home surface
pub(crate) fn redirect_home() -> Response {
    Response::builder()
        .status(StatusCode::FOUND)
        .header(header::LOCATION, HeaderValue::from_static("/"))
        .body(Body::empty())
        // Infallible: static status, static header, empty body.
        .unwrap()
}
