//! User store persisted as a single JSON document.
//!
//! Every operation re-reads the file, so separate processes sharing one
//! path observe each other's writes. Writes go to a sibling temporary file
//! which is then renamed over the original.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use stacona_core::{
    application::{StoreError, ports::UserStore},
    domain::{NewUserRecord, PersistedUser, UserId},
    error::StaconaResult,
};

use super::table::UserTable;

/// Durable user store backed by a JSON file.
pub struct JsonFileUserStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl JsonFileUserStore {
    /// Open a store at `path`. The file is created on first insert.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<UserTable, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(UserTable::default()),
            Err(e) => return Err(unavailable(&self.path, "read", e)),
        };

        if raw.trim().is_empty() {
            return Ok(UserTable::default());
        }

        serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    async fn save(&self, table: &UserTable) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| unavailable(parent, "create directory", e))?;
        }

        let json = serde_json::to_vec_pretty(table).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        let tmp = self.temp_path();
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| unavailable(&tmp, "write", e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| unavailable(&self.path, "replace", e))
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "users.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl UserStore for JsonFileUserStore {
    async fn exists_by_username(&self, username: &str) -> StaconaResult<bool> {
        Ok(self.load().await?.contains_username(username))
    }

    async fn exists_by_email(&self, email: &str) -> StaconaResult<bool> {
        Ok(self.load().await?.contains_email(email))
    }

    #[instrument(skip_all)]
    async fn insert_user(&self, record: NewUserRecord) -> StaconaResult<PersistedUser> {
        let _guard = self.write_lock.lock().await;

        let mut table = self.load().await?;
        let user = table.insert(record)?;
        self.save(&table).await?;

        debug!(
            user_id = %user.id,
            path = %self.path.display(),
            users = table.len(),
            "User written"
        );
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> StaconaResult<Option<PersistedUser>> {
        Ok(self.load().await?.find_by_username(username).cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> StaconaResult<Option<PersistedUser>> {
        Ok(self.load().await?.find_by_id(id).cloned())
    }
}

fn unavailable(path: &Path, operation: &str, e: io::Error) -> StoreError {
    StoreError::Unavailable {
        reason: format!("Failed to {} {}: {}", operation, path.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stacona_core::domain::Field;
    use tempfile::TempDir;

    fn record(username: &str, email: &str) -> NewUserRecord {
        NewUserRecord {
            username: username.into(),
            email: email.into(),
            password_digest: "digest".into(),
        }
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileUserStore::new(dir.path().join("users.json"));

        assert!(!store.exists_by_username("alice").await.unwrap());
        assert!(store.find_by_username("alice").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn users_survive_reopening() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("users.json");

        let user = JsonFileUserStore::new(&path)
            .insert_user(record("alice", "a@x.com"))
            .await
            .unwrap();

        let reopened = JsonFileUserStore::new(&path);
        assert_eq!(reopened.find_by_id(&user.id).await.unwrap(), Some(user));
        assert!(reopened.exists_by_email("a@x.com").await.unwrap());
        assert!(!path.with_file_name("users.json.tmp").exists());
    }

    #[tokio::test]
    async fn duplicate_insert_leaves_file_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");
        let store = JsonFileUserStore::new(&path);
        store.insert_user(record("alice", "a@x.com")).await.unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let err = store
            .insert_user(record("alice", "other@x.com"))
            .await
            .unwrap_err();

        assert_eq!(err.unique_violation(), Some(Field::Username));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[tokio::test]
    async fn concurrent_inserts_of_same_user_admit_one() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileUserStore::new(dir.path().join("users.json"));

        let (a, b) = futures::join!(
            store.insert_user(record("alice", "a@x.com")),
            store.insert_user(record("alice", "a@x.com")),
        );

        assert_eq!(usize::from(a.is_ok()) + usize::from(b.is_ok()), 1);
    }

    #[tokio::test]
    async fn garbage_file_is_reported_as_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileUserStore::new(&path)
            .exists_by_username("alice")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("corrupt"));
    }
}
