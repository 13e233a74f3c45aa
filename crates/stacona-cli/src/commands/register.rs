//! Implementation of the `stacona register` command.
//!
//! Responsibility: build a `CandidateUser` from arguments (prompting for the
//! password if needed), call the registration service, and display the
//! outcome. No validation rules live here.

use tracing::{info, instrument};

use stacona_core::{
    application::RegistrationResponse,
    domain::{CandidateUser, FieldErrorSet, RegistrationResult},
};

use crate::{
    cli::RegisterArgs,
    commands::prompt,
    context::AppContext,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `stacona register` command.
///
/// A rejected candidate is printed (per field, or as JSON) and then reported
/// as `CliError::RegistrationRejected` so the process exits non-zero.
#[instrument(skip_all, fields(username = %args.username))]
pub async fn execute(args: RegisterArgs, ctx: AppContext, output: OutputManager) -> CliResult<()> {
    let password = match args.password {
        Some(password) => password,
        None => prompt::new_password()?,
    };
    let candidate = CandidateUser::new(args.username, args.email, password);

    let spinner = output.spinner("Registering...");
    let result = ctx.registration().register(candidate).await;
    spinner.finish_and_clear();
    let result = result?;

    if output.is_json() {
        output.json(&RegistrationResponse::from(&result))?;
    }

    match result {
        RegistrationResult::Success { user } => {
            info!(user_id = %user.id, "Registered");
            if !output.is_json() {
                output.success(&format!("Registered '{}'", user.username))?;
                output.print(&format!("  id:    {}", user.id))?;
                output.print(&format!("  email: {}", user.email))?;
            }
            Ok(())
        }
        RegistrationResult::Failure { errors } => {
            if !output.is_json() {
                show_field_errors(&errors, &output)?;
            }
            Err(rejected(&errors))
        }
    }
}

fn show_field_errors(errors: &FieldErrorSet, output: &OutputManager) -> CliResult<()> {
    for (field, messages) in errors.iter() {
        for message in messages {
            output.error(&format!("{field}: {message}"))?;
        }
    }
    Ok(())
}

fn rejected(errors: &FieldErrorSet) -> CliError {
    let fields: Vec<String> = errors.failed_fields().map(|f| f.to_string()).collect();
    CliError::RegistrationRejected {
        count: errors.error_count(),
        fields: fields.join(", "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stacona_core::domain::Field;

    #[test]
    fn rejected_lists_failed_fields_in_order() {
        let mut errors = FieldErrorSet::new();
        errors.push(Field::Password, "password is too weak");
        errors.push(Field::Username, "this user already exists");
        errors.push(Field::Password, "password must be longer than or equal to 10 characters");

        let CliError::RegistrationRejected { count, fields } = rejected(&errors) else {
            panic!("expected RegistrationRejected");
        };
        assert_eq!(count, 3);
        assert_eq!(fields, "username, password");
    }
}
