//! Application layer for Stacona.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (RegistrationService, AuthService, SeedService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **DTOs**: `__typename`-tagged response shapes for the caller boundary
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! validation rules itself. Those live in `crate::domain`.

pub mod dto;
pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    AuthService, RegistrationService, SeedAccount, SeedOutcome, SeedService, check_unique,
};

// Re-export port traits (for adapter implementation)
pub use ports::{PasswordHasher, TokenIssuer, UserStore};

pub use dto::{LoginResponse, RefreshTokenResponse, RegistrationResponse, UserDto};
pub use error::{ApplicationError, StoreError};
