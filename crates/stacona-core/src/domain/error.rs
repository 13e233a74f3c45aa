// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// Registration validation failures are *not* errors: they are collected
/// into a `FieldErrorSet`. This type covers malformed values that cannot be
/// represented at all.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid user id '{value}': {reason}")]
    InvalidUserId { value: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidUserId { value, .. } => vec![
                format!("'{}' is not a valid user id", value),
                "User ids are UUIDs, e.g. 67e55044-10b1-426f-9247-bb680e5fe0c8".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidUserId { .. } => ErrorCategory::Validation,
        }
    }
}
