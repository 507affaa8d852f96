//! Signed, time-bounded bearer tokens.
//!
//! Tokens are compact JWT-shaped strings: three base64url (unpadded)
//! segments `header.claims.signature`, signed with HMAC-SHA256. The
//! claims carry the authenticated subject and a validity window; nothing
//! is persisted server-side, the verifier reconstructs the assertion on
//! every request.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Fixed token header: HS256 is the only algorithm in play.
const HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// Decoded token payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject: the authenticated user's id.
    pub sub: Uuid,
    pub email: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch. Valid only while `now < exp`.
    pub exp: i64,
}

/// Issues and validates signed identity assertions.
#[derive(Clone)]
pub struct TokenSigner {
    secret: Vec<u8>,
    ttl: Duration,
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("secret", &"[REDACTED]")
            .field("ttl_secs", &self.ttl.num_seconds())
            .finish()
    }
}

impl TokenSigner {
    /// Create a signer with the given secret and token lifetime.
    pub fn new(secret: impl Into<Vec<u8>>, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            ttl,
        }
    }

    /// Mint a signed token asserting `sub`/`email` for the configured TTL.
    pub fn issue(&self, sub: Uuid, email: &str) -> AuthResult<String> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub,
            email: email.to_string(),
            iat,
            exp: iat + self.ttl.num_seconds(),
        };

        let header_b64 = URL_SAFE_NO_PAD.encode(HEADER);
        let claims_json =
            serde_json::to_vec(&claims).map_err(|e| AuthError::Signing(e.to_string()))?;
        let claims_b64 = URL_SAFE_NO_PAD.encode(claims_json);

        let signing_input = format!("{}.{}", header_b64, claims_b64);
        let signature = self.sign(signing_input.as_bytes())?;

        Ok(format!(
            "{}.{}",
            signing_input,
            URL_SAFE_NO_PAD.encode(signature)
        ))
    }

    /// Verify a token and decode its claims.
    ///
    /// Any failure — malformed structure, bad signature, expired window —
    /// yields the same [`AuthError::InvalidToken`], so callers cannot
    /// learn which check rejected the token.
    pub fn validate(&self, token: &str) -> AuthResult<Claims> {
        let mut parts = token.split('.');
        let (header_b64, claims_b64, sig_b64) =
            match (parts.next(), parts.next(), parts.next(), parts.next()) {
                (Some(h), Some(c), Some(s), None) => (h, c, s),
                _ => return Err(AuthError::InvalidToken),
            };

        let signing_input = format!("{}.{}", header_b64, claims_b64);
        let sig_bytes = URL_SAFE_NO_PAD
            .decode(sig_b64)
            .map_err(|_| AuthError::InvalidToken)?;

        // Constant-time comparison via Mac::verify_slice.
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|_| AuthError::InvalidToken)?;
        mac.update(signing_input.as_bytes());
        mac.verify_slice(&sig_bytes)
            .map_err(|_| AuthError::InvalidToken)?;

        let claims_json = URL_SAFE_NO_PAD
            .decode(claims_b64)
            .map_err(|_| AuthError::InvalidToken)?;
        let claims: Claims =
            serde_json::from_slice(&claims_json).map_err(|_| AuthError::InvalidToken)?;

        if Utc::now().timestamp() >= claims.exp {
            return Err(AuthError::InvalidToken);
        }

        Ok(claims)
    }

    fn sign(&self, input: &[u8]) -> AuthResult<Vec<u8>> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| AuthError::Signing(e.to_string()))?;
        mac.update(input);
        Ok(mac.finalize().into_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> TokenSigner {
        TokenSigner::new("test-secret", Duration::hours(1))
    }

    #[test]
    fn test_issue_validate_round_trip() {
        let signer = signer();
        let sub = Uuid::new_v4();

        let token = signer.issue(sub, "ada@example.com").unwrap();
        let claims = signer.validate(&token).unwrap();

        assert_eq!(claims.sub, sub);
        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let signer = signer();
        let token = signer.issue(Uuid::new_v4(), "ada@example.com").unwrap();

        // Flip the last signature character.
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        assert!(matches!(
            signer.validate(&tampered),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_tampered_claims_rejected() {
        let signer = signer();
        let token = signer.issue(Uuid::new_v4(), "ada@example.com").unwrap();

        // Swap in claims for a different subject, keeping the signature.
        let parts: Vec<&str> = token.split('.').collect();
        let forged_claims = URL_SAFE_NO_PAD.encode(
            serde_json::to_vec(&Claims {
                sub: Uuid::new_v4(),
                email: "mallory@example.com".to_string(),
                iat: 0,
                exp: i64::MAX,
            })
            .unwrap(),
        );
        let forged = format!("{}.{}.{}", parts[0], forged_claims, parts[2]);

        assert!(signer.validate(&forged).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = signer().issue(Uuid::new_v4(), "ada@example.com").unwrap();
        let other = TokenSigner::new("other-secret", Duration::hours(1));
        assert!(other.validate(&token).is_err());
    }

    #[test]
    fn test_zero_ttl_immediately_invalid() {
        let signer = TokenSigner::new("test-secret", Duration::seconds(0));
        let token = signer.issue(Uuid::new_v4(), "ada@example.com").unwrap();
        assert!(matches!(
            signer.validate(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        let signer = signer();
        for garbage in ["", "abc", "a.b", "a.b.c.d", "not base64 at all!!"] {
            assert!(signer.validate(garbage).is_err(), "accepted {:?}", garbage);
        }
    }

    #[test]
    fn test_debug_redacts_secret() {
        let s = format!("{:?}", signer());
        assert!(s.contains("[REDACTED]"));
        assert!(!s.contains("test-secret"));
    }
}
