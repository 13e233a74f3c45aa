// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Stacona.
//!
//! This module contains the pure registration rules. Persistence, hashing,
//! and token signing are reached only through the ports defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or store calls
//! - **Immutable outcomes**: A result's tag is fixed once it is built
//! - **Data, not faults**: Validation failures are values (`FieldErrorSet`)
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    candidate::{CandidateUser, LoginAttempt},
    field_errors::{FieldErrorSet, aggregate},
    outcome::{
        LOGIN_FAILED_MESSAGE, LoginOutcome, REFRESH_FAILED_MESSAGE, RefreshOutcome,
        RegistrationResult, RegistrationStage,
    },
    user::{NewUserRecord, PersistedUser, TokenPayload},
};

pub use error::DomainError;

pub use value_objects::{Field, UserId};

pub use validation::{DomainValidator, MIN_PASSWORD_LENGTH, RULES, ValidationRule};
