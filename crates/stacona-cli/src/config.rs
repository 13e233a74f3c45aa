//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `STACONA_<SECTION>__<KEY>`, e.g.
//!    `STACONA_AUTH__JWT_SECRET` or `STACONA_STORE__PATH`
//! 3. Config file: `--config <FILE>` (must exist) or the platform config
//!    directory (optional)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use stacona_adapters::Argon2PasswordHasher;

/// Environment prefix for configuration overrides.
pub const ENV_PREFIX: &str = "STACONA";

const REDACTED: &str = "<redacted>";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where users are persisted.
    pub store: StoreConfig,
    /// Token signing.
    pub auth: AuthConfig,
    /// Argon2 cost parameters.
    pub hasher: HasherConfig,
    /// Account written by `stacona seed`.
    pub seed: SeedConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 secret. Empty means "not configured".
    pub jwt_secret: String,
    pub jwt_expires_in_secs: u64,
    pub issuer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HasherConfig {
    pub memory_cost_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; used when `--output-format` is `auto`.
    pub format: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: AppConfig::default_store_path(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            jwt_expires_in_secs: 3600,
            issuer: "stacona".into(),
        }
    }
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            memory_cost_kib: Argon2PasswordHasher::DEFAULT_MEMORY_COST_KIB,
            iterations: Argon2PasswordHasher::DEFAULT_ITERATIONS,
            parallelism: Argon2PasswordHasher::DEFAULT_PARALLELISM,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            username: "admin".into(),
            email: "admin@email.com".into(),
            password: "admin".into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let file = match config_file {
            Some(path) => config::File::from(path.as_path()).required(true),
            None => config::File::from(Self::config_path()).required(false),
        };

        config::Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration sources")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.stacona.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "stacona", "stacona")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".stacona.toml"))
    }

    /// Default location of the user store.
    pub fn default_store_path() -> PathBuf {
        directories::ProjectDirs::from("com", "stacona", "stacona")
            .map(|d| d.data_dir().join("users.json"))
            .unwrap_or_else(|| Path::new(".stacona").join("users.json"))
    }

    /// Copy with secrets masked, for display.
    pub fn redacted(&self) -> Self {
        let mut cfg = self.clone();
        if !cfg.auth.jwt_secret.is_empty() {
            cfg.auth.jwt_secret = REDACTED.into();
        }
        cfg.seed.password = REDACTED.into();
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_secret_is_unset() {
        assert!(AppConfig::default().auth.jwt_secret.is_empty());
    }

    #[test]
    fn default_seed_account_is_admin() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.seed.username, "admin");
        assert_eq!(cfg.seed.email, "admin@email.com");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("stacona.toml");
        std::fs::write(
            &path,
            "[auth]\njwt_secret = \"from-file\"\n\n[hasher]\niterations = 3\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.auth.jwt_secret, "from-file");
        assert_eq!(cfg.hasher.iterations, 3);
        assert_eq!(cfg.auth.issuer, "stacona");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = PathBuf::from("/definitely/not/here/stacona.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn redacted_masks_secrets() {
        let mut cfg = AppConfig::default();
        cfg.auth.jwt_secret = "hunter2".into();

        let shown = cfg.redacted();
        assert_eq!(shown.auth.jwt_secret, REDACTED);
        assert_eq!(shown.seed.password, REDACTED);
        assert_eq!(shown.seed.username, "admin");
    }

    #[test]
    fn config_path_is_absolute_or_relative() {
        // Just assert it doesn't panic and returns a non-empty path.
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
