/// Password hashing and verification using bcrypt
use crate::error::{AuthError, Result};

/// Salted adaptive password hashing with a configurable work factor.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a password. The salt is random, so hashing the same input twice
    /// produces different digests that both verify.
    pub fn hash(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, self.cost)
            .map_err(|_| AuthError::Internal("failed to hash password".to_string()))
    }

    /// Verify a password against a stored digest.
    ///
    /// A malformed stored digest yields `false` rather than an error, so a
    /// corrupt row can never break the login path open.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        match bcrypt::verify(password, hash) {
            Ok(matches) => matches,
            Err(err) => {
                tracing::debug!(error = %err, "stored password hash could not be parsed");
                false
            }
        }
    }
}
