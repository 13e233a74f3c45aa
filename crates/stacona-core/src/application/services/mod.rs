//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "register a user" or "refresh a token".

pub mod auth_service;
pub mod registration_service;
pub mod seed_service;
pub mod uniqueness;

pub use auth_service::AuthService;
pub use registration_service::RegistrationService;
pub use seed_service::{SeedAccount, SeedOutcome, SeedService};
pub use uniqueness::check_unique;
