/**
 * Authentication Strategy
 *
 * Given a username and a plaintext password, looks the user up in the
 * store, verifies the password against the stored hash, and yields a
 * tagged outcome: authenticated identity or a named failure.
 *
 * # Order of Checks
 *
 * Verification is only attempted once a user has been found. An unknown
 * username short-circuits to `AuthFailure::IncorrectUsername` without the
 * hasher ever running - there is no stored hash to compare against, and
 * handing the verifier a missing value would turn a routine failed log-in
 * into an internal error.
 */

use std::fmt;

use crate::auth::password::verify_password;
use crate::auth::users::{User, UserStore};
use crate::error::GateError;

/// Why a credential pair was rejected
///
/// The reason is logged but never surfaced to the caller; both variants
/// produce the same redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    /// No user with the given username exists
    IncorrectUsername,
    /// The user exists but the password does not match
    IncorrectPassword,
}

impl AuthFailure {
    /// Failure reason as a message
    pub fn reason(&self) -> &'static str {
        match self {
            Self::IncorrectUsername => "Incorrect username",
            Self::IncorrectPassword => "Incorrect password",
        }
    }
}

impl fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// Outcome of an authentication attempt
///
/// Store and hashing faults are not outcomes; they travel separately as
/// the `Err` arm of [`authenticate`].
#[derive(Debug)]
pub enum AuthOutcome {
    /// Credentials verified; carries the full identity
    Authenticated(User),
    /// Credentials rejected for a named reason
    Rejected(AuthFailure),
}

/// Verify a credential pair against the store
///
/// # Arguments
///
/// * `store` - User store to look the username up in
/// * `username` - Username as submitted
/// * `password` - Plaintext password as submitted
///
/// # Returns
///
/// `AuthOutcome::Authenticated` with the user on success,
/// `AuthOutcome::Rejected` with the reason on a failed attempt.
///
/// # Errors
///
/// Store failures, and a stored hash that is structurally invalid. Both
/// are internal faults, distinct from a rejected credential pair.
///
/// # Side Effects
///
/// None beyond the store read. No attempt counting, no lockout.
pub async fn authenticate(
    store: &dyn UserStore,
    username: &str,
    password: &str,
) -> Result<AuthOutcome, GateError> {
    let user = match store.user_by_username(username).await? {
        Some(user) => user,
        None => {
            tracing::debug!("No user found for username: {}", username);
            return Ok(AuthOutcome::Rejected(AuthFailure::IncorrectUsername));
        }
    };

    let matched = verify_password(password, &user.password_hash)?;
    if !matched {
        tracing::debug!("Password mismatch for username: {}", username);
        return Ok(AuthOutcome::Rejected(AuthFailure::IncorrectPassword));
    }

    Ok(AuthOutcome::Authenticated(user))
}
