//! AuthGate - Main Library
//!
//! AuthGate is a minimal username/password authentication gateway built with
//! Rust and Axum. It registers accounts, verifies credentials at log-in, and
//! maintains a logged-in session across requests using server-side sessions.
//!
//! # Overview
//!
//! This library provides the core functionality for AuthGate, including:
//! - Credential hashing and verification (bcrypt)
//! - A user store contract with PostgreSQL and in-memory implementations
//! - The authentication strategy (lookup + verify, tagged outcome)
//! - Session serialization of the authenticated identity
//! - Request identity middleware and the session lifecycle endpoints
//!
//! # Module Structure
//!
//! The library is organized into five modules:
//!
//! - **`auth`** - Authentication core
//!   - Password hashing, user store, strategy, session serializer
//!   - HTTP handlers for sign-up, log-in, and log-out
//!
//! - **`middleware`** - Request-level identity resolution
//!   - Attaches the current identity (or anonymous) to every request
//!
//! - **`error`** - Error taxonomy and HTTP conversion
//!
//! - **`routes`** - Router assembly and page rendering
//!
//! - **`server`** - Configuration, application state, and startup wiring
//!
//! # Authentication Flow
//!
//! 1. **Sign-up**: username + password → password hashed → user persisted → redirect
//! 2. **Log-in**: credentials verified against the store → user id stored in the session → redirect
//! 3. **Every request**: session token resolved back into a full identity, or anonymous
//! 4. **Log-out**: token removed from the session → redirect
//!
//! # Error Handling
//!
//! The library uses Rust's standard error handling:
//!
//! - `Result<T, E>` for fallible operations
//! - `Option<T>` for optional values
//! - The crate-wide error type in `error::GateError`

/// Authentication core: hashing, stores, strategy, sessions, handlers
pub mod auth;

/// Error taxonomy and HTTP response conversion
pub mod error;

/// Request identity middleware
pub mod middleware;

/// Router assembly and page rendering
pub mod routes;

/// Configuration, state, and startup wiring
pub mod server;
