//! Database connection pool construction.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{error, info};

use crate::config::Config;

/// Create a PostgreSQL connection pool and verify connectivity.
///
/// Connections are checked out per lookup and released on every exit path;
/// acquisition is bounded by `db_acquire_timeout_secs`.
pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
        .test_before_acquire(true)
        .connect(&config.database_url)
        .await?;

    // Verify the pool with a bounded ping before serving traffic.
    match tokio::time::timeout(
        Duration::from_secs(config.db_connect_timeout_secs),
        sqlx::query("SELECT 1").execute(&pool),
    )
    .await
    {
        Ok(Ok(_)) => {
            info!(
                max_connections = config.db_max_connections,
                min_connections = config.db_min_connections,
                "database pool created and verified"
            );
            Ok(pool)
        }
        Ok(Err(e)) => {
            error!(error = %e, "database connection verification failed");
            Err(e)
        }
        Err(_) => {
            error!(
                timeout_secs = config.db_connect_timeout_secs,
                "database connection verification timeout"
            );
            Err(sqlx::Error::Io(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                "database verification timeout",
            )))
        }
    }
}
