//! Interactive password prompts.
//!
//! Only compiled with the `interactive` feature; without it a missing
//! `--password` is reported as `CliError::FeatureNotAvailable`.

use crate::error::{CliError, CliResult};

/// Ask for a new password twice.
#[cfg(feature = "interactive")]
pub fn new_password() -> CliResult<String> {
    dialoguer::Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()
        .map_err(prompt_failed)
}

/// Ask for an existing password once.
#[cfg(feature = "interactive")]
pub fn password() -> CliResult<String> {
    dialoguer::Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(prompt_failed)
}

/// Ctrl-C surfaces from the terminal as an `Interrupted` read.
#[cfg(feature = "interactive")]
fn prompt_failed(e: dialoguer::Error) -> CliError {
    match e {
        dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
            CliError::Cancelled
        }
        other => CliError::IoError {
            message: "failed to read password".into(),
            source: std::io::Error::other(other.to_string()),
        },
    }
}

#[cfg(not(feature = "interactive"))]
pub fn new_password() -> CliResult<String> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(not(feature = "interactive"))]
pub fn password() -> CliResult<String> {
    new_password()
}
