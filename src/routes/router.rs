/**
 * Router Configuration
 *
 * Assembles the gateway's routes and layers.
 *
 * # Layer Order
 *
 * Requests pass through, outermost first:
 *
 * 1. Trace layer (request logging)
 * 2. Session layer (cookie ↔ server-side record)
 * 3. Identity middleware (token → identity in request extensions)
 * 4. The matched handler
 *
 * The identity middleware needs the session, so the session layer must sit
 * outside it; every handler may read the identity, so the middleware sits
 * outside all routes.
 */

use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tower_sessions::{SessionManagerLayer, SessionStore};

use crate::auth::handlers::{log_in, log_out, sign_up};
use crate::middleware::identity_middleware;
use crate::routes::pages;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state carrying the user store
/// * `session_layer` - Session layer over whichever session store the
///   caller wired up (PostgreSQL in production, in-memory in tests)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router<Store>(
    app_state: AppState,
    session_layer: SessionManagerLayer<Store>,
) -> Router
where
    Store: SessionStore + Clone,
{
    Router::new()
        .route("/", get(pages::home))
        .route("/sign-up", get(pages::sign_up_form).post(sign_up))
        .route("/log-in", post(log_in))
        .route("/log-out", get(log_out))
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            identity_middleware,
        ))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
