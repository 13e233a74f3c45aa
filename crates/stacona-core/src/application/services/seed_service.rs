//! Seed Service - provisions the administrator account.

use std::fmt;
use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    application::ports::{PasswordHasher, UserStore},
    domain::{NewUserRecord, PersistedUser},
    error::StaconaResult,
};

/// Account written by `SeedService::seed_admin`.
#[derive(Clone, PartialEq, Eq)]
pub struct SeedAccount {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SeedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedAccount")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    Created(PersistedUser),
    AlreadyPresent(PersistedUser),
}

impl SeedOutcome {
    pub fn user(&self) -> &PersistedUser {
        match self {
            Self::Created(user) | Self::AlreadyPresent(user) => user,
        }
    }
}

pub struct SeedService {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl SeedService {
    pub fn new(store: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    /// Insert the account unless a user with its username already exists.
    ///
    /// Validation rules are not applied; the account comes from trusted
    /// configuration.
    #[instrument(skip_all, fields(username = %account.username))]
    pub async fn seed_admin(&self, account: SeedAccount) -> StaconaResult<SeedOutcome> {
        if let Some(existing) = self.store.find_by_username(&account.username).await? {
            info!("Seed account already present");
            return Ok(SeedOutcome::AlreadyPresent(existing));
        }

        let password_digest = self.hasher.hash(&account.password).await?;
        let user = self
            .store
            .insert_user(NewUserRecord {
                username: account.username,
                email: account.email,
                password_digest,
            })
            .await?;

        info!(user_id = %user.id, "Seed account created");
        Ok(SeedOutcome::Created(user))
    }
}
