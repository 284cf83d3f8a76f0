/**
 * Credential Hasher
 *
 * One-way transform of a plaintext password into a storable hash, and
 * verification of a plaintext candidate against a stored hash. Built on
 * bcrypt: salted, computationally expensive, constant-effort comparison.
 */

use bcrypt::BcryptError;

/// bcrypt work factor.
///
/// 2^10 rounds keeps hashing fast enough for an interactive log-in while
/// staying expensive enough to resist offline cracking. Tunable; every
/// stored hash encodes the cost it was created with, so existing hashes
/// keep verifying after a change.
pub const HASH_COST: u32 = 10;

/// Hash a plaintext password for storage
///
/// A fresh random salt is generated on every call, so hashing the same
/// plaintext twice yields different output. The result is a self-contained
/// PHC-style string (algorithm, cost, salt, digest).
///
/// # Errors
///
/// Internal bcrypt failure. The caller must treat this as fatal to the
/// operation in flight: no partial user may be created from it.
pub fn hash_password(plaintext: &str) -> Result<String, BcryptError> {
    bcrypt::hash(plaintext, HASH_COST)
}

/// Verify a plaintext candidate against a stored hash
///
/// Returns `Ok(false)` for "does not match" - a mismatch is a normal
/// outcome, never an error.
///
/// # Errors
///
/// Only when `password_hash` is not structurally a bcrypt hash (corrupt or
/// empty stored value). Callers must only hand this function a hash that
/// actually exists; see the order-of-checks contract in
/// [`crate::auth::strategy`].
pub fn verify_password(plaintext: &str, password_hash: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(plaintext, password_hash)
}
