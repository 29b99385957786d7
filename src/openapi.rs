use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::error::ErrorBody;
use crate::handlers;
use crate::models::{LoginRequest, TokenResponse, UserResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Passport Service",
        description = "Bearer-token authentication service"
    ),
    paths(handlers::auth::issue_token, handlers::users::me),
    components(schemas(LoginRequest, TokenResponse, UserResponse, ErrorBody)),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Credential exchange"),
        (name = "users", description = "Authenticated user endpoints")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
