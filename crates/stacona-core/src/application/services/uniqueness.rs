//! Uniqueness checker: detects collisions with already-persisted users.

use futures::try_join;
use tracing::debug;

use crate::{
    application::ports::UserStore,
    domain::{CandidateUser, Field, FieldErrorSet},
    error::StaconaResult,
};

/// Query the store for existing usernames and emails.
///
/// Both queries run concurrently. Only `username` and `email` can appear in
/// the returned set. A failing query aborts the check with the store's
/// error instead of producing field data.
pub async fn check_unique(
    candidate: &CandidateUser,
    store: &dyn UserStore,
) -> StaconaResult<FieldErrorSet> {
    let (username_taken, email_taken) = try_join!(
        store.exists_by_username(&candidate.username),
        store.exists_by_email(&candidate.email),
    )?;

    debug!(username_taken, email_taken, "Uniqueness checked");

    let mut errors = FieldErrorSet::new();
    for (field, taken) in [(Field::Username, username_taken), (Field::Email, email_taken)] {
        if let (true, Some(message)) = (taken, field.collision_message()) {
            errors.push(field, message);
        }
    }
    Ok(errors)
}
