pub mod candidate;
pub mod field_errors;
pub mod outcome;
pub mod user;

pub use crate::domain::DomainError;
pub use candidate::{CandidateUser, LoginAttempt};
pub use field_errors::FieldErrorSet;
pub use outcome::{LoginOutcome, RefreshOutcome, RegistrationResult};
pub use user::PersistedUser;
