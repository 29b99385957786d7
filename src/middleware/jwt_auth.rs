/// Bearer token authentication extractor.
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::error::AuthError;
use crate::metrics;
use crate::models::User;
use crate::security::jwt::TokenError;
use crate::AppState;

/// The identity resolved from a verified bearer token.
///
/// Extracting this on a handler is the per-request authentication guard:
/// the token is verified, its subject is looked up in the store, and
/// disabled or unresolvable identities are rejected. Pure function of the
/// token and current store state; nothing is cached across requests.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(AuthError::Token(TokenError::Malformed))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::Token(TokenError::Malformed))?;

        let claims = state.tokens.verify(token).map_err(|kind| {
            metrics::inc_token_rejections();
            tracing::debug!(kind = %kind, "bearer token rejected");
            AuthError::Token(kind)
        })?;

        let user = state
            .store
            .find_by_username(&claims.sub)
            .await?
            .ok_or_else(|| {
                tracing::debug!(subject = %claims.sub, "token subject no longer resolvable");
                AuthError::InvalidCredentials
            })?;

        if user.disabled {
            return Err(AuthError::AccountDisabled);
        }

        Ok(CurrentUser(user))
    }
}
