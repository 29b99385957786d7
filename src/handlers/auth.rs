/// Authentication handlers
use axum::{extract::State, Form, Json};

use crate::error::{AuthError, ErrorBody};
use crate::metrics;
use crate::models::{LoginRequest, TokenResponse};
use crate::AppState;

/// Token endpoint handler
///
/// Exchanges a form-encoded username/password pair for a bearer access
/// token. Every rejection is the same generic 401 with a
/// `WWW-Authenticate: Bearer` header.
#[utoipa::path(
    post,
    path = "/token",
    tag = "auth",
    request_body(
        content = LoginRequest,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Access token issued", body = TokenResponse),
        (status = 401, description = "Invalid credentials", body = ErrorBody)
    )
)]
pub async fn issue_token(
    State(state): State<AppState>,
    Form(payload): Form<LoginRequest>,
) -> Result<Json<TokenResponse>, AuthError> {
    metrics::inc_login_requests();

    match state.auth.login(&payload.username, &payload.password).await {
        Ok(tokens) => Ok(Json(tokens)),
        Err(err) => {
            if matches!(
                err,
                AuthError::InvalidCredentials | AuthError::AccountDisabled
            ) {
                metrics::inc_login_failures();
            }
            Err(err)
        }
    }
}
