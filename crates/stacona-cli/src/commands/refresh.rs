//! Implementation of the `stacona refresh` command.

use tracing::instrument;

use stacona_core::{application::RefreshTokenResponse, domain::RefreshOutcome};

use crate::{
    cli::TokenArgs,
    context::AppContext,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub async fn execute(args: TokenArgs, ctx: AppContext, output: OutputManager) -> CliResult<()> {
    let outcome = ctx.auth()?.refresh_token(&args.token).await?;

    if output.is_json() {
        output.json(&RefreshTokenResponse::from(&outcome))?;
    }

    match outcome {
        RefreshOutcome::Success { token } => {
            if !output.is_json() {
                output.data(&token)?;
            }
            Ok(())
        }
        RefreshOutcome::Failure { message } => Err(CliError::InvalidToken {
            message: message.to_string(),
        }),
    }
}
