//! In-memory [`UserStore`] for tests and local development.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use super::{StoreError, UserStore};
use crate::models::User;

#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, User>>,
    unavailable: AtomicBool,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, user: User) {
        self.users
            .write()
            .expect("user map lock poisoned")
            .insert(user.username.clone(), user);
    }

    /// Flip the disabled flag on an existing user. Returns `false` if the
    /// user is unknown.
    pub fn set_disabled(&self, username: &str, disabled: bool) -> bool {
        let mut users = self.users.write().expect("user map lock poisoned");
        match users.get_mut(username) {
            Some(user) => {
                user.disabled = disabled;
                true
            }
            None => false,
        }
    }

    /// Simulate a store outage: while set, every lookup fails.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Database("store offline".to_string()));
        }

        let users = self.users.read().expect("user map lock poisoned");
        Ok(users.get(username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample(username: &str) -> User {
        User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            full_name: "Sample User".to_string(),
            email: format!("{username}@example.com"),
            password_hash: "$2b$04$placeholderplaceholderplace".to_string(),
            disabled: false,
        }
    }

    #[test]
    fn test_insert_and_lookup() {
        let store = MemoryUserStore::new();
        store.insert(sample("johndoe"));

        let found = tokio_test::block_on(store.find_by_username("johndoe")).unwrap();
        assert_eq!(found.expect("user present").username, "johndoe");

        let missing = tokio_test::block_on(store.find_by_username("ghost")).unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_set_disabled() {
        let store = MemoryUserStore::new();
        store.insert(sample("johndoe"));

        assert!(store.set_disabled("johndoe", true));
        let user = tokio_test::block_on(store.find_by_username("johndoe"))
            .unwrap()
            .expect("user present");
        assert!(user.disabled);

        assert!(!store.set_disabled("ghost", true));
    }

    #[test]
    fn test_outage_fails_lookups() {
        let store = MemoryUserStore::new();
        store.insert(sample("johndoe"));
        store.set_unavailable(true);

        let result = tokio_test::block_on(store.find_by_username("johndoe"));
        assert!(matches!(result, Err(StoreError::Database(_))));

        store.set_unavailable(false);
        assert!(tokio_test::block_on(store.find_by_username("johndoe")).is_ok());
    }
}
