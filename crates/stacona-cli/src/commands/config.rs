//! `stacona config`: inspect configuration values.

use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `config_file` is the `--config` flag, reported by `config path` in place
/// of the default location.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.data(&value)?;
        }

        ConfigCommands::List => {
            let shown = config.redacted();
            if output.is_json() {
                output.json(&shown)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised =
                    toml::to_string_pretty(&shown).map_err(|e| CliError::ConfigError {
                        message: format!("Failed to serialise config: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                output.print(&serialised)?;
            }
        }

        ConfigCommands::Path => {
            let path = config_file.unwrap_or_else(AppConfig::config_path);
            output.data(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let shown = config.redacted();
    match key {
        "store.path" => Ok(shown.store.path.display().to_string()),
        "auth.jwt_secret" => Ok(shown.auth.jwt_secret),
        "auth.jwt_expires_in_secs" => Ok(shown.auth.jwt_expires_in_secs.to_string()),
        "auth.issuer" => Ok(shown.auth.issuer),
        "hasher.memory_cost_kib" => Ok(shown.hasher.memory_cost_kib.to_string()),
        "hasher.iterations" => Ok(shown.hasher.iterations.to_string()),
        "hasher.parallelism" => Ok(shown.hasher.parallelism.to_string()),
        "seed.username" => Ok(shown.seed.username),
        "seed.email" => Ok(shown.seed.email),
        "seed.password" => Ok(shown.seed.password),
        "output.no_color" => Ok(shown.output.no_color.to_string()),
        "output.format" => Ok(shown.output.format),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "auth.issuer").unwrap(), "stacona");
        assert_eq!(get_config_value(&cfg, "seed.username").unwrap(), "admin");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn secrets_are_never_printed() {
        let mut cfg = AppConfig::default();
        cfg.auth.jwt_secret = "hunter2".into();
        assert_ne!(get_config_value(&cfg, "auth.jwt_secret").unwrap(), "hunter2");
        assert_ne!(get_config_value(&cfg, "seed.password").unwrap(), "admin");
    }

    #[test]
    fn unset_secret_reads_as_empty() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "auth.jwt_secret").unwrap(), "");
    }
}
