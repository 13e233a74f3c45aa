//! Adapter wiring.
//!
//! The only place that picks concrete adapters for the core ports.  Each
//! command asks for the service it needs; nothing else constructs adapters.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use stacona_adapters::{Argon2PasswordHasher, JsonFileUserStore, JwtTokenIssuer};
use stacona_core::application::{
    AuthService, RegistrationService, SeedService,
    ports::{PasswordHasher, TokenIssuer, UserStore},
};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Shared adapters built from configuration.
pub struct AppContext {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
    config: AppConfig,
}

impl AppContext {
    pub fn from_config(config: AppConfig) -> CliResult<Self> {
        let hasher = Argon2PasswordHasher::new(
            config.hasher.memory_cost_kib,
            config.hasher.iterations,
            config.hasher.parallelism,
        )?;
        debug!(store = %config.store.path.display(), "Adapters configured");

        Ok(Self {
            store: Arc::new(JsonFileUserStore::new(config.store.path.clone())),
            hasher: Arc::new(hasher),
            config,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn registration(&self) -> RegistrationService {
        RegistrationService::new(self.store.clone(), self.hasher.clone())
    }

    pub fn seeder(&self) -> SeedService {
        SeedService::new(self.store.clone(), self.hasher.clone())
    }

    /// Auth needs a signing secret, so this is the one service that can be
    /// unavailable because of configuration.
    pub fn auth(&self) -> CliResult<AuthService> {
        Ok(AuthService::new(
            self.store.clone(),
            self.hasher.clone(),
            self.token_issuer()?,
        ))
    }

    fn token_issuer(&self) -> CliResult<Arc<dyn TokenIssuer>> {
        let auth = &self.config.auth;
        if auth.jwt_secret.is_empty() {
            return Err(CliError::ConfigError {
                message: "auth.jwt_secret is not set".into(),
                source: None,
            });
        }

        let issuer = JwtTokenIssuer::new(
            &auth.jwt_secret,
            auth.issuer.clone(),
            Duration::from_secs(auth.jwt_expires_in_secs),
        )?;
        Ok(Arc::new(issuer))
    }
}
