/// User profile handlers
use axum::Json;

use crate::error::ErrorBody;
use crate::middleware::CurrentUser;
use crate::models::UserResponse;

/// Current user endpoint handler
///
/// Requires a valid bearer token; the `CurrentUser` extractor performs the
/// verification and identity resolution.
#[utoipa::path(
    get,
    path = "/users/me",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The authenticated user", body = UserResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    )
)]
pub async fn me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(UserResponse::from(user))
}
