//! Argon2id password hasher.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{self, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
};
use async_trait::async_trait;
use rand::RngCore;
use tracing::{debug, instrument};

use stacona_core::{
    application::{ApplicationError, ports::PasswordHasher},
    error::{StaconaError, StaconaResult},
};

const SALT_LEN: usize = 16;

/// Memory-hard password hasher producing PHC strings
/// (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`).
///
/// The digest records its own parameters, so changing the configured cost
/// does not invalidate existing digests.
#[derive(Debug, Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    pub const DEFAULT_MEMORY_COST_KIB: u32 = Params::DEFAULT_M_COST;
    pub const DEFAULT_ITERATIONS: u32 = Params::DEFAULT_T_COST;
    pub const DEFAULT_PARALLELISM: u32 = Params::DEFAULT_P_COST;

    /// Create a hasher with explicit cost parameters.
    ///
    /// Returns a configuration error when the parameters are outside what
    /// Argon2 accepts (for example a memory cost below `8 * parallelism`).
    pub fn new(memory_cost_kib: u32, iterations: u32, parallelism: u32) -> StaconaResult<Self> {
        let params = Params::new(memory_cost_kib, iterations, parallelism, None).map_err(|e| {
            StaconaError::Configuration {
                message: format!("invalid Argon2 parameters: {}", e),
            }
        })?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[instrument(skip_all)]
    async fn hash(&self, plaintext: &str) -> StaconaResult<String> {
        let argon2 = self.argon2();
        let plaintext = plaintext.to_owned();

        let digest = tokio::task::spawn_blocking(move || {
            let mut salt = [0u8; SALT_LEN];
            rand::thread_rng().fill_bytes(&mut salt);
            let salt = SaltString::encode_b64(&salt).map_err(hashing_failed)?;

            argon2
                .hash_password(plaintext.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(hashing_failed)
        })
        .await
        .map_err(join_failed)??;

        debug!(m_cost = self.params.m_cost(), "Password hashed");
        Ok(digest)
    }

    async fn verify(&self, plaintext: &str, digest: &str) -> StaconaResult<bool> {
        let argon2 = self.argon2();
        let plaintext = plaintext.to_owned();
        let digest = digest.to_owned();

        tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&digest).map_err(hashing_failed)?;
            match argon2.verify_password(plaintext.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(password_hash::Error::Password) => Ok(false),
                Err(e) => Err(hashing_failed(e)),
            }
        })
        .await
        .map_err(join_failed)?
    }
}

fn hashing_failed(e: password_hash::Error) -> StaconaError {
    ApplicationError::HashingFailed {
        reason: e.to_string(),
    }
    .into()
}

fn join_failed(e: tokio::task::JoinError) -> StaconaError {
    StaconaError::Internal {
        message: format!("hashing task did not complete: {}", e),
    }
}
