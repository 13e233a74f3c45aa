//! In-memory user store.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;

use stacona_core::{
    application::{StoreError, ports::UserStore},
    domain::{NewUserRecord, PersistedUser, UserId},
    error::StaconaResult,
};

use super::table::UserTable;

/// Thread-safe in-memory user store.
///
/// Clones share the same table.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    inner: Arc<RwLock<UserTable>>,
}

impl InMemoryUserStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of users.
    pub fn len(&self) -> StaconaResult<usize> {
        Ok(self.read()?.len())
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> StaconaResult<bool> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, UserTable>, StoreError> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, UserTable>, StoreError> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn exists_by_username(&self, username: &str) -> StaconaResult<bool> {
        Ok(self.read()?.contains_username(username))
    }

    async fn exists_by_email(&self, email: &str) -> StaconaResult<bool> {
        Ok(self.read()?.contains_email(email))
    }

    async fn insert_user(&self, record: NewUserRecord) -> StaconaResult<PersistedUser> {
        let user = self.write()?.insert(record)?;
        debug!(user_id = %user.id, "User inserted into memory store");
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> StaconaResult<Option<PersistedUser>> {
        Ok(self.read()?.find_by_username(username).cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> StaconaResult<Option<PersistedUser>> {
        Ok(self.read()?.find_by_id(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stacona_core::{application::ApplicationError, domain::Field, error::StaconaError};

    fn record(username: &str, email: &str) -> NewUserRecord {
        NewUserRecord {
            username: username.into(),
            email: email.into(),
            password_digest: "digest".into(),
        }
    }

    #[tokio::test]
    async fn inserted_user_is_visible_to_queries() {
        let store = InMemoryUserStore::new();
        let user = store.insert_user(record("alice", "a@x.com")).await.unwrap();

        assert!(store.exists_by_username("alice").await.unwrap());
        assert!(store.exists_by_email("a@x.com").await.unwrap());
        assert_eq!(store.find_by_id(&user.id).await.unwrap(), Some(user.clone()));
        assert_eq!(store.find_by_username("alice").await.unwrap(), Some(user));
        assert!(!store.exists_by_username("bob").await.unwrap());
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = InMemoryUserStore::new();
        let other = store.clone();
        store.insert_user(record("alice", "a@x.com")).await.unwrap();

        assert_eq!(other.len().unwrap(), 1);
        assert!(!other.is_empty().unwrap());
    }

    #[tokio::test]
    async fn duplicate_insert_reports_unique_violation() {
        let store = InMemoryUserStore::new();
        store.insert_user(record("alice", "a@x.com")).await.unwrap();

        let err = store
            .insert_user(record("bob", "a@x.com"))
            .await
            .unwrap_err();
        assert_eq!(err.unique_violation(), Some(Field::Email));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn poisoned_lock_is_reported_not_hidden() {
        let store = InMemoryUserStore::new();
        store.insert_user(record("alice", "a@x.com")).await.unwrap();

        let shared = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = shared.inner.write().unwrap();
            panic!("writer panicked while holding the lock");
        })
        .join();

        assert!(matches!(
            store.len(),
            Err(StaconaError::Application(ApplicationError::Store(StoreError::LockPoisoned)))
        ));
        assert!(store.is_empty().is_err());
        assert!(store.exists_by_username("alice").await.is_err());
    }
}
