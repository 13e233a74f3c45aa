//! Implementation of the `stacona login` command.

use tracing::instrument;

use stacona_core::{
    application::LoginResponse,
    domain::{LoginAttempt, LoginOutcome},
};

use crate::{
    cli::LoginArgs,
    commands::prompt,
    context::AppContext,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `stacona login` command.
///
/// Plain output is the bare token so it can be captured by a shell.
#[instrument(skip_all, fields(username = %args.username))]
pub async fn execute(args: LoginArgs, ctx: AppContext, output: OutputManager) -> CliResult<()> {
    let auth = ctx.auth()?;
    let password = match args.password {
        Some(password) => password,
        None => prompt::password()?,
    };

    let spinner = output.spinner("Logging in...");
    let outcome = auth.login(LoginAttempt::new(args.username, password)).await;
    spinner.finish_and_clear();
    let outcome = outcome?;

    if output.is_json() {
        output.json(&LoginResponse::from(&outcome))?;
    }

    match outcome {
        LoginOutcome::Success { user, token } => {
            if !output.is_json() {
                output.success(&format!("Logged in as '{}'", user.username))?;
                output.data(&token)?;
            }
            Ok(())
        }
        LoginOutcome::Failure { message } => Err(CliError::LoginFailed {
            message: message.to_string(),
        }),
    }
}
