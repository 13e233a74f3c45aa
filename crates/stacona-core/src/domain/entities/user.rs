use serde::{Deserialize, Serialize};

use crate::domain::value_objects::UserId;

/// A user that has been written to the store.
///
/// Only the password digest is kept. Instances are created once by a
/// successful registration (or seeding) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedUser {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password_digest: String,
}

/// Row handed to `UserStore::insert_user`; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserRecord {
    pub username: String,
    pub email: String,
    pub password_digest: String,
}

impl NewUserRecord {
    /// Materialize the record under a freshly assigned id.
    pub fn into_persisted(self, id: UserId) -> PersistedUser {
        PersistedUser {
            id,
            username: self.username,
            email: self.email,
            password_digest: self.password_digest,
        }
    }
}

/// Identity carried inside an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub id: UserId,
    pub username: String,
}

impl From<&PersistedUser> for TokenPayload {
    fn from(user: &PersistedUser) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}
