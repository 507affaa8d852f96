//! One-way password hashing using bcrypt.

use crate::error::{AuthError, AuthResult};

/// bcrypt work factor. Each stored hash embeds its own random salt.
pub const BCRYPT_COST: u32 = 10;

/// Hash a plaintext password for storage.
///
/// CPU-bound (~100ms at cost 10); async callers should run this under
/// `spawn_blocking`.
pub fn hash_password(plain: &str) -> AuthResult<String> {
    bcrypt::hash(plain, BCRYPT_COST).map_err(|e| AuthError::Hash(e.to_string()))
}

/// Check a plaintext password against a stored hash.
///
/// A malformed stored hash counts as a mismatch rather than an error;
/// the caller cannot distinguish the two, which keeps the failure
/// surface uniform.
pub fn verify_password(plain: &str, hash: &str) -> bool {
    bcrypt::verify(plain, hash).unwrap_or(false)
}
