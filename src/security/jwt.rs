/// Access token issuance and verification.
///
/// Tokens are compact HMAC-signed JWTs. Validity is determined solely by the
/// signature and the embedded expiry; there is no server-side token state and
/// no revocation list. That trade — losing instant revocation, gaining
/// horizontal scalability — is deliberate: disabled accounts are instead
/// rejected at identity resolution.
///
/// Keys are injected at construction and immutable afterwards; nothing in
/// this module reads ambient global state.
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::error::{AuthError, Result};

/// Claims embedded in every access token. Immutable once issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the username the token was issued to.
    #[serde(default)]
    pub sub: String,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
    /// Issued at (Unix timestamp).
    pub iat: i64,
    /// Unique token id, so concurrent issuance for one subject still yields
    /// distinct tokens.
    #[serde(default)]
    pub jti: String,
}

/// Why a token was rejected. All kinds collapse to the same 401 outwardly
/// but stay distinct for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token structure could not be parsed.
    #[error("malformed token")]
    Malformed,

    /// Signature mismatch. Treat as potential tampering.
    #[error("bad signature")]
    BadSignature,

    /// The token is past its expiration.
    #[error("token expired")]
    Expired,

    /// Claims parsed but carry no subject.
    #[error("missing subject")]
    MissingSubject,
}

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validation: Validation,
    default_ttl: Duration,
}

impl TokenService {
    /// Build a token service from the configured secret.
    ///
    /// `algorithm` must be an HMAC variant; asymmetric algorithms would make
    /// `from_secret` keys meaningless and open algorithm-confusion holes.
    pub fn new(secret: &str, algorithm: Algorithm, default_ttl: Duration) -> Self {
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        // No leeway: a token expired by one second is expired.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            algorithm,
            validation,
            default_ttl,
        }
    }

    /// Issue a signed token for `subject`, expiring after `ttl` (or the
    /// configured default). The token is self-contained: verifying it later
    /// needs only the same secret.
    pub fn issue(&self, subject: &str, ttl: Option<Duration>) -> Result<String> {
        let now = Utc::now();
        let expiry = now + ttl.unwrap_or(self.default_ttl);

        let claims = Claims {
            sub: subject.to_string(),
            exp: expiry.timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("failed to sign token: {e}")))
    }

    /// Verify a token and return its claims.
    ///
    /// The signature is recomputed over header+payload and compared in
    /// constant time before any claim is trusted; expiry is checked with
    /// zero leeway; a subject must be present.
    pub fn verify(&self, token: &str) -> std::result::Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|err| match err.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature
                | jsonwebtoken::errors::ErrorKind::InvalidAlgorithm => TokenError::BadSignature,
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            })?;

        if data.claims.sub.is_empty() {
            return Err(TokenError::MissingSubject);
        }

        Ok(data.claims)
    }
}
