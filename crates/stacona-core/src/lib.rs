//! Stacona Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Stacona
//! account backend: user registration, login, and token refresh, following
//! hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           stacona-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (RegistrationService, AuthService, ...) │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Store, Hasher, Tokens)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stacona-adapters (Infrastructure)    │
//! │ (InMemoryUserStore, Argon2, JWT, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (CandidateUser, FieldErrorSet, Rules)   │
//! │           No I/O, No Async              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use stacona_core::{
//!     application::RegistrationService,
//!     domain::{CandidateUser, RegistrationResult},
//! };
//!
//! # async fn demo(store: Arc<dyn stacona_core::application::ports::UserStore>,
//! #               hasher: Arc<dyn stacona_core::application::ports::PasswordHasher>) {
//! let service = RegistrationService::new(store, hasher);
//! let candidate = CandidateUser::new("validuser1", "a@b.com", "Tr0ub4dor&3xyz");
//!
//! match service.register(candidate).await.unwrap() {
//!     RegistrationResult::Success { user } => println!("created {}", user.id),
//!     RegistrationResult::Failure { errors } => println!("{} problems", errors.error_count()),
//! }
//! # }
//! ```

// Domain layer (pure registration rules and data)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AuthService, RegistrationService, SeedService,
        ports::{PasswordHasher, TokenIssuer, UserStore},
    };
    pub use crate::domain::{
        CandidateUser, Field, FieldErrorSet, LoginAttempt, LoginOutcome, PersistedUser,
        RefreshOutcome, RegistrationResult, UserId,
    };
    pub use crate::error::{StaconaError, StaconaResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
