use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use super::{StoreError, UserStore};
use crate::models::User;

/// Postgres-backed [`UserStore`].
///
/// Reads from the externally owned `users` table. Row mapping is explicit:
/// the query names the exact columns of [`User`], so the table may carry
/// additional columns without affecting this service.
pub struct PgUserStore {
    pool: PgPool,
    lookup_timeout: Duration,
}

impl PgUserStore {
    pub fn new(pool: PgPool, lookup_timeout: Duration) -> Self {
        Self {
            pool,
            lookup_timeout,
        }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let query = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, full_name, email, password_hash, disabled
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool);

        match tokio::time::timeout(self.lookup_timeout, query).await {
            Ok(result) => result.map_err(StoreError::from),
            Err(_) => Err(StoreError::Timeout),
        }
    }
}
