//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stacona-adapters` crate provides implementations.

use async_trait::async_trait;

use crate::domain::{NewUserRecord, PersistedUser, TokenPayload, UserId};
use crate::error::StaconaResult;

/// Port for user persistence.
///
/// Implemented by:
/// - `stacona_adapters::user_store::InMemoryUserStore` (testing, ephemeral)
/// - `stacona_adapters::user_store::JsonFileUserStore` (CLI, durable)
///
/// ## Design Notes
///
/// - Lookups are exact matches; case rules belong to the store
/// - `insert_user` must enforce uniqueness of username and email itself and
///   report a collision as `StoreError::UniqueViolation`, since an existence
///   check before the insert can race with a concurrent registration
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Whether a user with exactly this username exists.
    async fn exists_by_username(&self, username: &str) -> StaconaResult<bool>;

    /// Whether a user with exactly this email exists.
    async fn exists_by_email(&self, email: &str) -> StaconaResult<bool>;

    /// Persist a new user and return it with its assigned id.
    async fn insert_user(&self, record: NewUserRecord) -> StaconaResult<PersistedUser>;

    /// Look up a user by username.
    async fn find_by_username(&self, username: &str) -> StaconaResult<Option<PersistedUser>>;

    /// Look up a user by id.
    async fn find_by_id(&self, id: &UserId) -> StaconaResult<Option<PersistedUser>>;
}

/// Port for password hashing.
///
/// Implemented by:
/// - `stacona_adapters::hasher::Argon2PasswordHasher` (memory-hard, configurable cost)
///
/// Digests are never reversible; the only way back is `verify`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Produce a self-describing digest of `plaintext`.
    async fn hash(&self, plaintext: &str) -> StaconaResult<String>;

    /// Check `plaintext` against a digest produced by `hash`.
    ///
    /// Returns an error when `digest` cannot be parsed.
    async fn verify(&self, plaintext: &str, digest: &str) -> StaconaResult<bool>;
}

/// Port for access tokens.
///
/// Implemented by:
/// - `stacona_adapters::token::JwtTokenIssuer` (HS256, fixed secret and expiry)
#[cfg_attr(test, mockall::automock)]
pub trait TokenIssuer: Send + Sync {
    /// Sign a token carrying `payload`.
    fn sign(&self, payload: &TokenPayload) -> StaconaResult<String>;

    /// Check signature and expiry, returning the payload.
    fn verify(&self, token: &str) -> StaconaResult<TokenPayload>;
}
