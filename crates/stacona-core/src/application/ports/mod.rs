//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `stacona-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `UserStore`: User persistence and existence queries
//!   - `PasswordHasher`: One-way password digests
//!   - `TokenIssuer`: Access token signing and verification
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{PasswordHasher, TokenIssuer, UserStore};

#[cfg(test)]
pub use output::{MockPasswordHasher, MockTokenIssuer, MockUserStore};
