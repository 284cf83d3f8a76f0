//! Authentication Module
//!
//! This module handles credential hashing, user storage, the
//! authentication strategy, session serialization, and the HTTP handlers
//! for the session lifecycle.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`password`** - Credential hashing and verification (bcrypt)
//! - **`users`** - User model and the user store contract
//! - **`memory`** - In-memory user store for demonstrations and tests
//! - **`strategy`** - Credential verification against the store
//! - **`session`** - Serialization of the identity into the session
//! - **`handlers`** - HTTP handlers for the lifecycle endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── password.rs     - bcrypt hashing and verification
//! ├── users.rs        - User model and store contract
//! ├── memory.rs       - In-memory store implementation
//! ├── strategy.rs     - Authentication strategy
//! ├── session.rs      - Session token serialization
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Form payload and validation
//!     ├── sign_up.rs  - Account creation handler
//!     ├── log_in.rs   - Session establishment handler
//!     └── log_out.rs  - Session teardown handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Sign-up**: username + password → password hashed → user persisted → redirect to `/`
//! 2. **Log-in**: strategy verifies credentials → user id written into the session → redirect to `/`
//! 3. **Log-out**: user id removed from the session → redirect to `/`
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (salted, work factor 10) before storage
//! - The plaintext never leaves the handler that received it
//! - Log-in failures are not distinguished to the caller: success and
//!   failure both redirect to the home surface

/// bcrypt hashing and verification
pub mod password;

/// User model and store contract
pub mod users;

/// In-memory user store
pub mod memory;

/// Authentication strategy
pub mod strategy;

/// Session token serialization
pub mod session;

/// HTTP handlers for the session lifecycle endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{log_in, log_out, sign_up, CredentialsForm};
pub use strategy::{authenticate, AuthFailure, AuthOutcome};
pub use users::{User, UserStore};
