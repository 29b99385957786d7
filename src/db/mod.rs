//! Credential store seam.
//!
//! [`UserStore`] is the only interface the authentication core has to the
//! persistence layer. The Postgres implementation lives in [`user_repo`];
//! [`memory`] provides an in-memory backend for tests and local development.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::User;

pub mod memory;
pub mod pool;
pub mod user_repo;

pub use memory::MemoryUserStore;
pub use pool::create_pool;
pub use user_repo::PgUserStore;

/// Failure of the persistence collaborator, distinct from any
/// authentication rejection.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("lookup timed out")]
    Timeout,

    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

/// Read-only lookup of user records.
///
/// Implementations must be safe under concurrent reads and must bound every
/// lookup; the rest of the core is tested against this seam with
/// [`MemoryUserStore`].
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by username. `Ok(None)` means the user does not exist;
    /// `Err` means the store itself failed or timed out.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;
}
