//! Unified error handling for Stacona Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::{ApplicationError, StoreError};
use crate::domain::DomainError;

/// Root error type for Stacona Core operations.
///
/// Every variant is a fault that aborts the current flow. Validation
/// failures never appear here.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StaconaError {
    /// Errors from the domain layer (malformed values).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (infrastructure faults).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl From<StoreError> for StaconaError {
    fn from(err: StoreError) -> Self {
        Self::Application(ApplicationError::Store(err))
    }
}

impl StaconaError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        let mut suggestions = match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Stacona".into(),
                "Please report this issue at: https://github.com/stacona/stacona/issues".into(),
            ],
        };
        if self.is_retryable() {
            suggestions.push("Try again in a moment".into());
        }
        suggestions
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::Store(
                StoreError::LockPoisoned | StoreError::Unavailable { .. }
            ))
        )
    }

    /// The store rejected an insert on a unique column.
    pub fn unique_violation(&self) -> Option<crate::domain::Field> {
        match self {
            Self::Application(ApplicationError::Store(StoreError::UniqueViolation { field })) => {
                Some(*field)
            }
            _ => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type StaconaResult<T> = Result<T, StaconaError>;
