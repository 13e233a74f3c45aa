//! Tagged outcomes of the registration, login, and refresh flows.

use std::fmt;

use crate::domain::entities::{field_errors::FieldErrorSet, user::PersistedUser};

/// Result of one registration attempt.
///
/// Exactly one variant is built, after aggregation, and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationResult {
    Success { user: PersistedUser },
    Failure { errors: FieldErrorSet },
}

impl RegistrationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn user(&self) -> Option<&PersistedUser> {
        match self {
            Self::Success { user } => Some(user),
            Self::Failure { .. } => None,
        }
    }

    pub fn errors(&self) -> Option<&FieldErrorSet> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { errors } => Some(errors),
        }
    }
}

/// Stages a single registration request moves through.
///
/// `Start → Validating → CheckingUniqueness → Aggregating → {Persisting → Succeeded} | Failed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStage {
    Validating,
    CheckingUniqueness,
    Aggregating,
    Persisting,
    Succeeded,
    Failed,
}

impl RegistrationStage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validating => "validating",
            Self::CheckingUniqueness => "checking-uniqueness",
            Self::Aggregating => "aggregating",
            Self::Persisting => "persisting",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for RegistrationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message returned for every login mismatch, whatever the cause.
pub const LOGIN_FAILED_MESSAGE: &str = "Could not login with the provided credentials";

/// Message returned when a token cannot be refreshed.
pub const REFRESH_FAILED_MESSAGE: &str = "Could not log in with the provided credentials";

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success { user: PersistedUser, token: String },
    Failure { message: &'static str },
}

impl LoginOutcome {
    pub const fn rejected() -> Self {
        Self::Failure {
            message: LOGIN_FAILED_MESSAGE,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Result of exchanging a valid token for a fresh one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    Success { token: String },
    Failure { message: &'static str },
}

impl RefreshOutcome {
    pub const fn rejected() -> Self {
        Self::Failure {
            message: REFRESH_FAILED_MESSAGE,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
