//! Middleware Module
//!
//! This module contains the HTTP middleware for the gateway.
//!
//! # Architecture
//!
//! A single middleware is provided:
//!
//! - **`identity`** - resolves the session token into the current identity
//!   on every request and attaches it to request extensions
//!
//! Unlike a route guard, this middleware never rejects a request:
//! anonymous is a valid, first-class state. Handlers that care about the
//! current user read it through the `CurrentIdentity` extractor.

pub mod identity;

pub use identity::{identity_middleware, CurrentIdentity, Identity};
