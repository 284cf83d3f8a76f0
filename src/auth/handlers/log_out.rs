/**
 * Log-out Handler
 *
 * Implements GET /log-out. Removes the identity binding from the session
 * and redirects home. Only the token is removed: the session record and
 * the client's cookie may persist, and the next request simply resolves to
 * anonymous.
 */

use axum::response::Response;
use tower_sessions::Session;

use crate::auth::handlers::redirect_home;
use crate::auth::session::clear;
use crate::error::GateError;

/// Log-out handler
///
/// # Errors
///
/// * `500 Internal Server Error` - session store failure while removing
///   the token
pub async fn log_out(session: Session) -> Result<Response, GateError> {
    clear(&session).await?;
    tracing::info!("Session identity cleared");
    Ok(redirect_home())
}
