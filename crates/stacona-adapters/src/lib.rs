//! Infrastructure adapters for Stacona.
//!
//! This crate implements the ports defined in `stacona-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod hasher;
pub mod token;
pub mod user_store;

// Re-export commonly used adapters
pub use hasher::Argon2PasswordHasher;
pub use token::JwtTokenIssuer;
pub use user_store::{InMemoryUserStore, JsonFileUserStore};
