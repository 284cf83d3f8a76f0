//! Error Module
//!
//! This module defines the crate-wide error type and its conversion into
//! HTTP responses.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Error type definitions
//! - **`conversion`** - Error conversion implementations (IntoResponse)
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Taxonomy
//!
//! - `Validation` - missing or empty form fields; rejected before any
//!   hashing or store access happens
//! - `Store` - backing store unreachable or a query failed
//! - `Hash` - internal bcrypt fault, including a structurally invalid
//!   stored hash
//! - `Session` - session read/write fault
//!
//! Wrong-credential outcomes are deliberately NOT part of this taxonomy:
//! they are recovered locally by the log-in handler and never surface as
//! errors (see `auth::strategy::AuthFailure`).
//!
//! # HTTP Response Conversion
//!
//! `GateError` implements `IntoResponse`, so handlers can return it
//! directly. Validation failures map to 400 with the message; every
//! internal class maps to 500 with a generic body, with the detail kept in
//! the log.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::GateError;
