//! Routes Module
//!
//! This module assembles the HTTP surface of the gateway.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs    - Module exports
//! ├── router.rs - Router assembly and layering
//! └── pages.rs  - Home view and sign-up form rendering
//! ```
//!
//! # Routes
//!
//! - `GET /` - home view, rendered for the current identity
//! - `GET /sign-up` - sign-up form
//! - `POST /sign-up` - create an account
//! - `POST /log-in` - verify credentials, establish the session
//! - `GET /log-out` - remove the identity binding

/// Router assembly
pub mod router;

/// Page rendering
pub mod pages;

pub use router::create_router;
