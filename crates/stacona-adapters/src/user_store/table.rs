//! Row storage shared by the user store adapters.

use serde::{Deserialize, Serialize};

use stacona_core::{
    application::StoreError,
    domain::{Field, NewUserRecord, PersistedUser, UserId},
};

/// Users in insertion order.
///
/// This is also the on-disk document of `JsonFileUserStore`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct UserTable {
    users: Vec<PersistedUser>,
}

impl UserTable {
    pub(crate) fn len(&self) -> usize {
        self.users.len()
    }

    pub(crate) fn contains_username(&self, username: &str) -> bool {
        self.users.iter().any(|u| u.username == username)
    }

    pub(crate) fn contains_email(&self, email: &str) -> bool {
        self.users.iter().any(|u| u.email == email)
    }

    pub(crate) fn find_by_username(&self, username: &str) -> Option<&PersistedUser> {
        self.users.iter().find(|u| u.username == username)
    }

    pub(crate) fn find_by_id(&self, id: &UserId) -> Option<&PersistedUser> {
        self.users.iter().find(|u| u.id == *id)
    }

    /// Append a user, acting as the unique index on username and email.
    pub(crate) fn insert(&mut self, record: NewUserRecord) -> Result<PersistedUser, StoreError> {
        if self.contains_username(&record.username) {
            return Err(StoreError::UniqueViolation {
                field: Field::Username,
            });
        }
        if self.contains_email(&record.email) {
            return Err(StoreError::UniqueViolation {
                field: Field::Email,
            });
        }

        let user = record.into_persisted(UserId::new());
        self.users.push(user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(username: &str, email: &str) -> NewUserRecord {
        NewUserRecord {
            username: username.into(),
            email: email.into(),
            password_digest: "digest".into(),
        }
    }

    #[test]
    fn insert_assigns_distinct_ids() {
        let mut table = UserTable::default();
        let a = table.insert(record("alice", "a@x.com")).unwrap();
        let b = table.insert(record("bob", "b@x.com")).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(table.len(), 2);
        assert_eq!(table.find_by_id(&b.id), Some(&b));
    }

    #[test]
    fn duplicate_username_is_rejected_first() {
        let mut table = UserTable::default();
        table.insert(record("alice", "a@x.com")).unwrap();

        let err = table.insert(record("alice", "a@x.com")).unwrap_err();
        assert_eq!(
            err,
            StoreError::UniqueViolation {
                field: Field::Username
            }
        );
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let mut table = UserTable::default();
        table.insert(record("alice", "a@x.com")).unwrap();

        let err = table.insert(record("alicia", "a@x.com")).unwrap_err();
        assert_eq!(err, StoreError::UniqueViolation { field: Field::Email });
    }

    #[test]
    fn lookups_are_exact() {
        let mut table = UserTable::default();
        table.insert(record("alice", "a@x.com")).unwrap();

        assert!(table.contains_username("alice"));
        assert!(!table.contains_username("Alice"));
        assert!(table.find_by_username("alic").is_none());
    }
}
