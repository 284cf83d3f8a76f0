/**
 * Sign-up Handler
 *
 * Implements POST /sign-up.
 *
 * # Registration Process
 *
 * 1. Validate that both fields are present
 * 2. Hash the password
 * 3. Persist the new user
 * 4. Redirect to the home surface
 *
 * No session is established - a freshly registered user still has to log
 * in. A hashing or store failure aborts the whole operation; no partial
 * user is ever created, because the user only comes into existence in the
 * single store call that persists it with the hash already computed.
 */

use std::sync::Arc;

use axum::{extract::State, response::Response, Form};

use crate::auth::handlers::redirect_home;
use crate::auth::handlers::types::CredentialsForm;
use crate::auth::password::hash_password;
use crate::auth::users::UserStore;
use crate::error::GateError;

/// Sign-up handler
///
/// # Arguments
///
/// * `State(store)` - User store from application state
/// * `Form(form)` - Credentials form body
///
/// # Returns
///
/// 302 redirect to `/` on success
///
/// # Errors
///
/// * `400 Bad Request` - blank username or password
/// * `500 Internal Server Error` - hashing or store failure
pub async fn sign_up(
    State(store): State<Arc<dyn UserStore>>,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, GateError> {
    tracing::info!("Sign-up request for username: {}", form.username);

    form.validate()?;

    let password_hash = hash_password(&form.password)?;

    let user = store.create_user(form.username, password_hash).await?;

    tracing::info!("User created: {} ({})", user.username, user.id);

    Ok(redirect_home())
}
