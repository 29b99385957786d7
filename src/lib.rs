// Passport Service Library

use std::sync::Arc;

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod security;
pub mod services;
pub mod telemetry;


pub use error::{AuthError, Result};

use db::UserStore;
use security::jwt::TokenService;
use security::password::PasswordHasher;
use services::AuthService;

/// Shared application state, immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub tokens: Arc<TokenService>,
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, tokens: Arc<TokenService>, hasher: PasswordHasher) -> Self {
        let auth = Arc::new(AuthService::new(store.clone(), hasher, tokens.clone()));
        Self { store, tokens, auth }
    }
}
