//! Registration Service - the register use case.
//!
//! One request moves through these stages:
//! 1. Validate the candidate and check uniqueness (concurrently)
//! 2. Aggregate both error sets
//! 3. Hash the password and persist, or return the failure

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::{PasswordHasher, UserStore},
        services::uniqueness::check_unique,
    },
    domain::{
        CandidateUser, DomainValidator as validator, FieldErrorSet, NewUserRecord,
        RegistrationResult, RegistrationStage, aggregate,
    },
    error::StaconaResult,
};

/// Registration orchestrator.
///
/// Holds no per-request state, so one instance can serve concurrent
/// registrations.
pub struct RegistrationService {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl RegistrationService {
    /// Create a new registration service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use stacona_core::application::RegistrationService;
    ///
    /// let service = RegistrationService::new(
    ///     Arc::new(store),  // impl UserStore
    ///     Arc::new(hasher), // impl PasswordHasher
    /// );
    /// ```
    pub fn new(store: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    /// Register a candidate user.
    ///
    /// Invalid or colliding candidates produce `RegistrationResult::Failure`
    /// and nothing is written. `Err` is reserved for faults: an unreachable
    /// store, a hashing failure, or an insert that fails for a reason other
    /// than a uniqueness conflict.
    #[instrument(skip_all, fields(username = %candidate.username))]
    pub async fn register(&self, candidate: CandidateUser) -> StaconaResult<RegistrationResult> {
        debug!(stage = %RegistrationStage::Validating, "Registration started");
        debug!(stage = %RegistrationStage::CheckingUniqueness);

        let (validator_errors, uniqueness_errors) = futures::join!(
            async { validator::validate_candidate(&candidate) },
            check_unique(&candidate, self.store.as_ref()),
        );
        let uniqueness_errors = uniqueness_errors?;

        debug!(stage = %RegistrationStage::Aggregating);
        let errors = aggregate(validator_errors, uniqueness_errors);

        if !errors.is_empty() {
            info!(
                stage = %RegistrationStage::Failed,
                failed_fields = ?errors.failed_fields().collect::<Vec<_>>(),
                "Registration rejected"
            );
            return Ok(RegistrationResult::Failure { errors });
        }

        debug!(stage = %RegistrationStage::Persisting);
        let password_digest = self.hasher.hash(&candidate.password).await?;

        let record = NewUserRecord {
            username: candidate.username,
            email: candidate.email,
            password_digest,
        };

        match self.store.insert_user(record).await {
            Ok(user) => {
                info!(stage = %RegistrationStage::Succeeded, user_id = %user.id, "User registered");
                Ok(RegistrationResult::Success { user })
            }
            Err(err) => match err.unique_violation() {
                // Another registration won the race after our existence check.
                Some(field) => {
                    warn!(%field, "Unique constraint hit on insert");
                    let mut errors = FieldErrorSet::new();
                    if let Some(message) = field.collision_message() {
                        errors.push(field, message);
                    }
                    Ok(RegistrationResult::Failure { errors })
                }
                None => Err(err),
            },
        }
    }
}
