/**
 * Gateway Error Types
 *
 * This module defines the error type used across the authentication
 * gateway. Every fallible operation in the crate funnels into `GateError`,
 * which handlers return directly and which converts itself into an HTTP
 * response (see `conversion`).
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Crate-wide error type
///
/// Each variant corresponds to one class of the error taxonomy. Variants
/// wrapping a foreign error type use `#[from]` so that `?` works at the
/// call sites without explicit mapping.
#[derive(Debug, Error)]
pub enum GateError {
    /// Missing or empty form field
    ///
    /// Raised before the hasher or the strategy run, so no store access
    /// happens for an invalid request.
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable description of what was missing
        message: String,
    },

    /// User store failure (connection or query)
    ///
    /// Not recoverable locally; converted into a 5xx response with the
    /// detail kept in the log.
    #[error("User store error: {0}")]
    Store(#[from] sqlx::Error),

    /// Internal hashing fault
    ///
    /// Fatal to the current operation: sign-up aborts without a partial
    /// user, log-in aborts without a session.
    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Session read or write fault
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl GateError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `Store` / `Hash` / `Session` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Store(_) | Self::Hash(_) | Self::Session(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message safe to expose to the client
    ///
    /// Validation messages describe the caller's own input and are
    /// returned verbatim. Internal errors are reduced to a generic line;
    /// the full detail only ever reaches the log.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation { message } => message.clone(),
            Self::Store(_) | Self::Hash(_) | Self::Session(_) => {
                "Internal server error".to_string()
            }
        }
    }
}
