//! Domain value objects: Field, UserId.
//!
//! # Design
//!
//! These are pure value types with equality-by-value. `Field` is a closed
//! set: the registration form has exactly three inputs, so an error set can
//! never carry a key outside of it.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ── Field ────────────────────────────────────────────────────────────────────

/// A registration form field that can carry validation errors.
///
/// Declaration order is the rendering order of a `FieldErrorSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Username,
    Email,
    Password,
}

impl Field {
    /// Every field, in rendering order.
    pub const ALL: [Field; 3] = [Self::Username, Self::Email, Self::Password];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    /// Key used for this field when a failure is rendered at the caller
    /// boundary, e.g. `usernameErrors`.
    pub const fn response_key(&self) -> &'static str {
        match self {
            Self::Username => "usernameErrors",
            Self::Email => "emailErrors",
            Self::Password => "passwordErrors",
        }
    }

    /// Message appended when the store already holds this value.
    ///
    /// Only identity fields are checked for collisions.
    pub const fn collision_message(&self) -> Option<&'static str> {
        match self {
            Self::Username => Some("this user already exists"),
            Self::Email => Some("this email already exists"),
            Self::Password => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── UserId ───────────────────────────────────────────────────────────────────

/// Opaque identifier assigned to a user when it is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier from its hyphenated string form.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|e| DomainError::InvalidUserId {
                value: value.to_string(),
                reason: e.to_string(),
            })
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
