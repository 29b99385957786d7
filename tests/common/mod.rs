//! Shared helpers for integration tests.
//!
//! All suites run against the in-memory store: the `UserStore` trait is the
//! seam the core is designed to be tested through, so no database container
//! is needed.
#![allow(dead_code)] // each test binary uses a subset of these helpers

use std::sync::Arc;

use axum::Router;
use chrono::Duration;
use jsonwebtoken::Algorithm;
use uuid::Uuid;

use passport_service::db::MemoryUserStore;
use passport_service::models::User;
use passport_service::routes::build_router;
use passport_service::security::jwt::TokenService;
use passport_service::security::password::PasswordHasher;
use passport_service::AppState;

pub const TEST_USERNAME: &str = "johndoe";
pub const TEST_PASSWORD: &str = "secret";
pub const TEST_SECRET: &str = "XK6jd93hQzR8vTw2mNpY5bGc7LfWsE4uAx0CnVrJkMqZtDyB1gHhUoPiS";

/// Low bcrypt cost keeps the suite fast; semantics are unchanged.
pub fn test_hasher() -> PasswordHasher {
    PasswordHasher::new(4)
}

pub fn test_tokens() -> Arc<TokenService> {
    Arc::new(TokenService::new(
        TEST_SECRET,
        Algorithm::HS256,
        Duration::minutes(30),
    ))
}

pub fn user_with_password(username: &str, password: &str, disabled: bool) -> User {
    User {
        id: Uuid::new_v4(),
        username: username.to_string(),
        full_name: "John Doe".to_string(),
        email: format!("{username}@example.com"),
        password_hash: test_hasher().hash(password).expect("hash test password"),
        disabled,
    }
}

/// Build the full router over an in-memory store seeded with `users`.
///
/// The store handle is returned so tests can mutate state (disable a user,
/// simulate an outage) between requests.
pub fn test_app(users: Vec<User>) -> (Arc<MemoryUserStore>, Router) {
    let store = Arc::new(MemoryUserStore::new());
    for user in users {
        store.insert(user);
    }

    let state = AppState::new(store.clone(), test_tokens(), test_hasher());
    (store, build_router(state))
}
