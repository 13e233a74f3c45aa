//! Application layer errors.
//!
//! These errors represent infrastructure faults, not validation outcomes.
//! A rejected registration is a `FieldErrorSet`; an unreachable store is
//! an `ApplicationError`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::Field;
use crate::error::ErrorCategory;

/// Faults reported by a `UserStore` adapter.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    /// The backing store could not be reached or read.
    #[error("User store unavailable: {reason}")]
    Unavailable { reason: String },

    /// The insert collided with an existing row on a unique column.
    #[error("A user with this {field} already exists")]
    UniqueViolation { field: Field },

    /// Stored data could not be decoded.
    #[error("User store at {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    /// In-process lock was poisoned by a panicking writer.
    #[error("User store lock poisoned")]
    LockPoisoned,
}

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Persistence failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Password hashing or verification could not run.
    #[error("Password hashing failed: {reason}")]
    HashingFailed { reason: String },

    /// Token could not be signed.
    #[error("Token signing failed: {reason}")]
    TokenSigningFailed { reason: String },

    /// Token is malformed, expired, or signed with another key.
    #[error("Invalid token: {reason}")]
    InvalidToken { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Store(StoreError::Unavailable { reason }) => vec![
                format!("The user store could not be reached: {}", reason),
                "Check the store path in your configuration".into(),
            ],
            Self::Store(StoreError::Corrupt { path, .. }) => vec![
                format!("The store file {} could not be parsed", path.display()),
                "Restore it from a backup or move it aside to start fresh".into(),
            ],
            Self::Store(StoreError::LockPoisoned) => vec!["The user store is locked".into()],
            Self::Store(StoreError::UniqueViolation { field }) => vec![
                format!("Choose a different {}", field),
            ],
            Self::HashingFailed { .. } => vec![
                "Check the hasher cost settings in your configuration".into(),
                "Lower memory_cost_kib if the machine is short on memory".into(),
            ],
            Self::TokenSigningFailed { .. } => vec![
                "Check that auth.jwt_secret is set".into(),
            ],
            Self::InvalidToken { .. } => vec![
                "Log in again to obtain a fresh token".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Store(StoreError::UniqueViolation { .. }) => ErrorCategory::Validation,
            Self::Store(_) => ErrorCategory::Internal,
            Self::HashingFailed { .. } | Self::TokenSigningFailed { .. } => ErrorCategory::Internal,
            Self::InvalidToken { .. } => ErrorCategory::Validation,
        }
    }
}
