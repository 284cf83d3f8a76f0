/**
 * Log-in Handler
 *
 * Implements POST /log-in.
 *
 * # Authentication Process
 *
 * 1. Validate that both fields are present
 * 2. Run the authentication strategy (lookup + verify)
 * 3. On success, serialize the identity into the session
 * 4. Redirect to the home surface
 *
 * # Failure Policy
 *
 * Rejected credentials produce the SAME redirect as a successful log-in.
 * The reason ("Incorrect username" / "Incorrect password") is computed and
 * logged, then discarded before the response - nothing distinguishes the
 * two to the caller, and no session is established. Only internal faults
 * (store, hashing, session write) take the error path.
 */

use std::sync::Arc;

use axum::{extract::State, response::Response, Form};
use tower_sessions::Session;

use crate::auth::handlers::redirect_home;
use crate::auth::handlers::types::CredentialsForm;
use crate::auth::session::establish;
use crate::auth::strategy::{authenticate, AuthOutcome};
use crate::auth::users::UserStore;
use crate::error::GateError;

/// Log-in handler
///
/// # Arguments
///
/// * `State(store)` - User store from application state
/// * `session` - The request's session, to be populated on success
/// * `Form(form)` - Credentials form body
///
/// # Returns
///
/// 302 redirect to `/` - on success and on rejected credentials alike
///
/// # Errors
///
/// * `400 Bad Request` - blank username or password
/// * `500 Internal Server Error` - store, hashing, or session failure
pub async fn log_in(
    State(store): State<Arc<dyn UserStore>>,
    session: Session,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, GateError> {
    tracing::info!("Log-in request for username: {}", form.username);

    form.validate()?;

    match authenticate(store.as_ref(), &form.username, &form.password).await? {
        AuthOutcome::Authenticated(user) => {
            establish(&session, &user).await?;
            tracing::info!("User logged in: {} ({})", user.username, user.id);
        }
        AuthOutcome::Rejected(reason) => {
            tracing::warn!("Log-in rejected for {}: {}", form.username, reason);
        }
    }

    Ok(redirect_home())
}
