//! # quill-auth
//!
//! Credential and token primitives for quill.
//!
//! Two concerns live here, both treated as opaque primitives by the rest
//! of the system:
//!
//! - [`password`] — one-way, salted password hashing (bcrypt).
//! - [`token`] — signed, time-bounded bearer tokens (HMAC-SHA256 over
//!   a compact JWT-shaped string).

pub mod error;
pub mod password;
pub mod token;

pub use error::{AuthError, AuthResult};
pub use password::{hash_password, verify_password, BCRYPT_COST};
pub use token::{Claims, TokenSigner};
