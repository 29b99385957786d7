/// Passport Service - Main entry point
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use jsonwebtoken::Algorithm;
use tokio::net::TcpListener;

use passport_service::{
    config::Config,
    db::{self, PgUserStore},
    routes,
    security::jwt::TokenService,
    security::password::PasswordHasher,
    security::secret::{self, SecretStrength},
    telemetry, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init();

    let config = Config::from_env().context("failed to load configuration from environment")?;

    tracing::info!(
        "starting passport-service on {}:{}",
        config.server_host,
        config.server_port
    );

    match secret::validate_secret_strength(&config.jwt_secret) {
        SecretStrength::Weak => anyhow::bail!(
            "JWT_SECRET is too weak (need >= 32 high-entropy bytes); \
             generate one with secret::generate_secret"
        ),
        SecretStrength::Acceptable => {
            tracing::warn!("JWT_SECRET is acceptable but below the recommended 64 bytes");
        }
        SecretStrength::Strong => {}
    }

    let algorithm: Algorithm = config
        .jwt_algorithm
        .parse()
        .context("unrecognized JWT_ALGORITHM")?;
    if !matches!(
        algorithm,
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
    ) {
        anyhow::bail!("JWT_ALGORITHM must be an HMAC variant (HS256/HS384/HS512)");
    }

    let pool = db::create_pool(&config)
        .await
        .context("failed to initialize database pool")?;

    let store = Arc::new(PgUserStore::new(
        pool,
        Duration::from_secs(config.db_lookup_timeout_secs),
    ));
    let tokens = Arc::new(TokenService::new(
        &config.jwt_secret,
        algorithm,
        chrono::Duration::minutes(config.access_token_expire_minutes as i64),
    ));
    let hasher = PasswordHasher::new(config.bcrypt_cost);

    let state = AppState::new(store, tokens, hasher);
    let app = routes::build_router(state);

    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
