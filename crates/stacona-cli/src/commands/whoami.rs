//! Implementation of the `stacona whoami` command.

use tracing::instrument;

use stacona_core::{application::UserDto, domain::REFRESH_FAILED_MESSAGE};

use crate::{
    cli::TokenArgs,
    context::AppContext,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Resolve a token to its user and print the public view of that user.
#[instrument(skip_all)]
pub async fn execute(args: TokenArgs, ctx: AppContext, output: OutputManager) -> CliResult<()> {
    let user = ctx
        .auth()?
        .authenticate(&args.token)
        .await?
        .ok_or_else(|| CliError::InvalidToken {
            message: REFRESH_FAILED_MESSAGE.into(),
        })?;

    let dto = UserDto::from(&user);
    if output.is_json() {
        output.json(&dto)?;
    } else {
        output.header(&dto.username)?;
        output.print(&format!("  id:    {}", dto.id))?;
        output.print(&format!("  email: {}", dto.email))?;
    }
    Ok(())
}
