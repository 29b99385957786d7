use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::db::StoreError;
use crate::security::jwt::TokenError;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Bad username/password pair. Surfaced identically regardless of
    /// whether the username existed, to prevent enumeration.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("account disabled")]
    AccountDisabled,

    #[error("token rejected: {0}")]
    Token(#[from] TokenError),

    #[error("credential store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, AuthError>;

/// JSON error body returned to clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub status: u16,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        // Every authentication rejection collapses to the same outward
        // 401; the enum variant is what observability and tests see.
        let (status, message) = match &self {
            AuthError::InvalidCredentials
            | AuthError::AccountDisabled
            | AuthError::Token(_) => {
                tracing::debug!(kind = %self, "authentication rejected");
                (StatusCode::UNAUTHORIZED, "Could not validate credentials")
            }
            AuthError::StoreUnavailable(_) => {
                tracing::error!(error = %self, "credential store failure");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Service temporarily unavailable",
                )
            }
            AuthError::Internal(_) => {
                tracing::error!(error = %self, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(ErrorBody {
            error: message.to_string(),
            status: status.as_u16(),
        });

        if status == StatusCode::UNAUTHORIZED {
            (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        AuthError::StoreUnavailable(err.to_string())
    }
}
