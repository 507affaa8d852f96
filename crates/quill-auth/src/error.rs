//! Error types for credential and token operations.

use thiserror::Error;

/// Result alias for auth operations.
pub type AuthResult<T> = std::result::Result<T, AuthError>;

/// Credential/token operation errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Password hashing failed.
    #[error("Password hashing failed: {0}")]
    Hash(String),

    /// Token signing failed.
    #[error("Token signing failed: {0}")]
    Signing(String),

    /// Token rejected. Deliberately carries no detail about which check
    /// failed (structure, signature, or expiry).
    #[error("Invalid or expired token")]
    InvalidToken,
}
