use std::sync::Arc;

use crate::db::UserStore;
use crate::error::{AuthError, Result};
use crate::models::{TokenResponse, User};
use crate::security::jwt::TokenService;
use crate::security::password::PasswordHasher;

/// The login flow: credentials in, access token out.
pub struct AuthService {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: PasswordHasher,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            store,
            hasher,
            tokens,
        }
    }

    /// Check a username/password pair against the store.
    ///
    /// Unknown username and wrong password produce the identical
    /// `InvalidCredentials`, so the outward signal never reveals whether the
    /// username existed. Disabled accounts cannot authenticate at all: they
    /// get no new tokens here, and previously issued tokens are rejected at
    /// identity resolution.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User> {
        let user = self
            .store
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.hasher.verify(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        if user.disabled {
            return Err(AuthError::AccountDisabled);
        }

        Ok(user)
    }

    /// Authenticate and issue a bearer token for the user.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse> {
        let user = self.authenticate(username, password).await?;

        let access_token = self.tokens.issue(&user.username, None)?;

        tracing::info!(username = %user.username, "user logged in");

        Ok(TokenResponse::bearer(access_token))
    }
}
