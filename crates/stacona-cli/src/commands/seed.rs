//! Implementation of the `stacona seed` command.

use tracing::instrument;

use stacona_core::application::{SeedAccount, SeedOutcome, UserDto};

use crate::{context::AppContext, error::CliResult, output::OutputManager};

/// Create the configured administrator unless it already exists.
#[instrument(skip_all)]
pub async fn execute(ctx: AppContext, output: OutputManager) -> CliResult<()> {
    let seed = &ctx.config().seed;
    let account = SeedAccount {
        username: seed.username.clone(),
        email: seed.email.clone(),
        password: seed.password.clone(),
    };

    let spinner = output.spinner("Seeding...");
    let outcome = ctx.seeder().seed_admin(account).await;
    spinner.finish_and_clear();
    let outcome = outcome?;

    if output.is_json() {
        return Ok(output.json(&UserDto::from(outcome.user()))?);
    }

    match &outcome {
        SeedOutcome::Created(user) => {
            output.success(&format!("Created '{}' ({})", user.username, user.id))?
        }
        SeedOutcome::AlreadyPresent(user) => {
            output.info(&format!("'{}' already exists, left unchanged", user.username))?
        }
    }
    Ok(())
}
