//! Password hasher adapters.

mod argon2id;

pub use argon2id::Argon2PasswordHasher;
