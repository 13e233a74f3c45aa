//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stacona",
    bin_name = "stacona",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Account registration and authentication",
    long_about = "Stacona registers users with validated, unique credentials, \
                  stores Argon2id password digests, and issues signed access tokens.",
    after_help = "EXAMPLES:\n\
        \x20 stacona register --username alice01 --email alice@example.com\n\
        \x20 stacona login --username alice01\n\
        \x20 stacona whoami --token <TOKEN>\n\
        \x20 stacona --output-format json register -u bob -e bob@example.com -p '<PASSWORD>'",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Register a new user.
    #[command(
        visible_alias = "r",
        about = "Register a new user",
        after_help = "EXAMPLES:\n\
            \x20 stacona register --username alice01 --email alice@example.com\n\
            \x20 stacona register -u alice01 -e alice@example.com -p 'Tr0ub4dor&3xyz'"
    )]
    Register(RegisterArgs),

    /// Log in and print an access token.
    #[command(about = "Log in and print an access token")]
    Login(LoginArgs),

    /// Show the user an access token belongs to.
    #[command(about = "Show the user behind a token")]
    Whoami(TokenArgs),

    /// Exchange a valid token for a fresh one.
    #[command(about = "Refresh an access token")]
    Refresh(TokenArgs),

    /// Create the configured administrator account if it is missing.
    #[command(about = "Seed the administrator account")]
    Seed,

    /// Initialise a Stacona configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 stacona init                       # default location\n\
            \x20 stacona --config ./stacona.toml init\n\
            \x20 stacona init --force               # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stacona completions bash > ~/.local/share/bash-completion/completions/stacona\n\
            \x20 stacona completions zsh  > ~/.zfunc/_stacona\n\
            \x20 stacona completions fish > ~/.config/fish/completions/stacona.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Stacona configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stacona config get store.path\n\
            \x20 stacona config list\n\
            \x20 stacona config path"
    )]
    Config(ConfigCommands),
}

// ── register ──────────────────────────────────────────────────────────────────

/// Arguments for `stacona register`.
#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Letters and digits only.
    #[arg(short = 'u', long = "username", value_name = "USERNAME")]
    pub username: String,

    #[arg(short = 'e', long = "email", value_name = "EMAIL")]
    pub email: String,

    /// Prompted for when omitted.
    #[arg(
        short = 'p',
        long = "password",
        value_name = "PASSWORD",
        help = "Password (prompted when omitted)"
    )]
    pub password: Option<String>,
}

// ── login ─────────────────────────────────────────────────────────────────────

/// Arguments for `stacona login`.
#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(short = 'u', long = "username", value_name = "USERNAME")]
    pub username: String,

    #[arg(
        short = 'p',
        long = "password",
        value_name = "PASSWORD",
        help = "Password (prompted when omitted)"
    )]
    pub password: Option<String>,
}

// ── whoami / refresh ──────────────────────────────────────────────────────────

/// A bearer token argument.
#[derive(Debug, Args)]
pub struct TokenArgs {
    #[arg(
        short = 't',
        long = "token",
        value_name = "TOKEN",
        env = "STACONA_TOKEN",
        hide_env_values = true,
        help = "Access token"
    )]
    pub token: String,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stacona init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stacona completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `stacona config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `auth.issuer`.
        key: String,
    },
    /// Print all configuration values (secrets masked).
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_register_command() {
        let cli = Cli::parse_from([
            "stacona",
            "register",
            "--username",
            "alice01",
            "--email",
            "alice@example.com",
            "--password",
            "Tr0ub4dor&3xyz",
        ]);
        let Commands::Register(args) = cli.command else {
            panic!("expected Register command");
        };
        assert_eq!(args.username, "alice01");
        assert_eq!(args.password.as_deref(), Some("Tr0ub4dor&3xyz"));
    }

    #[test]
    fn register_password_is_optional() {
        let cli = Cli::parse_from(["stacona", "r", "-u", "alice01", "-e", "a@b.com"]);
        assert!(matches!(cli.command, Commands::Register(RegisterArgs { password: None, .. })));
    }

    #[test]
    fn register_requires_email() {
        let result = Cli::try_parse_from(["stacona", "register", "--username", "alice01"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_token_commands() {
        let cli = Cli::parse_from(["stacona", "whoami", "--token", "abc"]);
        assert!(matches!(cli.command, Commands::Whoami(TokenArgs { ref token }) if token == "abc"));

        let cli = Cli::parse_from(["stacona", "refresh", "-t", "abc"]);
        assert!(matches!(cli.command, Commands::Refresh(_)));
    }

    #[test]
    fn output_format_is_global() {
        let cli = Cli::parse_from(["stacona", "seed", "--output-format", "json"]);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["stacona", "--quiet", "--verbose", "seed"]);
        assert!(result.is_err());
    }
}
