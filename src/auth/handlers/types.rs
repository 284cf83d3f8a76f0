/**
 * Handler Types
 *
 * The form payload shared by the sign-up and log-in handlers, plus its
 * presence validation. Validation runs before the hasher or the strategy,
 * so an empty field never costs a hash computation or a store round trip.
 */

use serde::{Deserialize, Serialize};

use crate::error::GateError;

/// Credentials form body
///
/// Submitted as `application/x-www-form-urlencoded` by both the sign-up
/// and log-in forms.
#[derive(Debug, Serialize, Deserialize)]
pub struct CredentialsForm {
    /// Username as entered
    pub username: String,
    /// Plaintext password; hashed (sign-up) or verified (log-in), never
    /// stored or logged
    pub password: String,
}

impl CredentialsForm {
    /// Reject blank fields
    pub fn validate(&self) -> Result<(), GateError> {
        if self.username.trim().is_empty() {
            return Err(GateError::validation("Username is required"));
        }
        if self.password.is_empty() {
            return Err(GateError::validation("Password is required"));
        }
        Ok(())
    }
}
