//! Auth Service - login, token validation, and token refresh.

use std::sync::{Arc, OnceLock};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{PasswordHasher, TokenIssuer, UserStore},
    domain::{LoginAttempt, LoginOutcome, PersistedUser, RefreshOutcome, TokenPayload},
    error::StaconaResult,
};

/// Plaintext behind the digest verified for unknown usernames.
const DECOY_PASSWORD: &str = "stacona-decoy-password";

/// Credential and token orchestrator.
pub struct AuthService {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
    /// Digest of `DECOY_PASSWORD`, produced by `hasher` on first use.
    decoy_digest: OnceLock<String>,
}

impl AuthService {
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            store,
            hasher,
            tokens,
            decoy_digest: OnceLock::new(),
        }
    }

    /// Exchange credentials for a signed token.
    ///
    /// Every mismatch (unknown user, wrong password, unreadable digest)
    /// returns the same `LoginOutcome::Failure`. Store and signing faults
    /// are errors.
    #[instrument(skip_all, fields(username = %attempt.username))]
    pub async fn login(&self, attempt: LoginAttempt) -> StaconaResult<LoginOutcome> {
        if attempt.username.is_empty() {
            debug!("Empty username, rejecting without lookup");
            return Ok(LoginOutcome::rejected());
        }

        let Some(user) = self.store.find_by_username(&attempt.username).await? else {
            // Pay the same hashing cost as a known user so timing does not
            // reveal whether the username exists.
            self.verify_decoy(&attempt.password).await;
            info!("Login rejected: unknown user");
            return Ok(LoginOutcome::rejected());
        };

        let matches = match self
            .hasher
            .verify(&attempt.password, &user.password_digest)
            .await
        {
            Ok(matches) => matches,
            Err(err) => {
                warn!(error = %err, "Stored digest could not be verified");
                false
            }
        };

        if !matches {
            info!("Login rejected: password mismatch");
            return Ok(LoginOutcome::rejected());
        }

        let token = self.tokens.sign(&TokenPayload::from(&user))?;
        info!(user_id = %user.id, "Login succeeded");
        Ok(LoginOutcome::Success { user, token })
    }

    async fn verify_decoy(&self, password: &str) {
        let digest = match self.decoy_digest.get() {
            Some(digest) => digest.clone(),
            None => match self.hasher.hash(DECOY_PASSWORD).await {
                Ok(digest) => self.decoy_digest.get_or_init(|| digest).clone(),
                Err(err) => {
                    warn!(error = %err, "Decoy digest could not be produced");
                    return;
                }
            },
        };
        if let Err(err) = self.hasher.verify(password, &digest).await {
            warn!(error = %err, "Decoy digest could not be verified");
        }
    }

    /// Resolve a bearer token to the user it names.
    ///
    /// `None` covers a bad signature, an expired token, and a user that no
    /// longer exists.
    #[instrument(skip_all)]
    pub async fn authenticate(&self, token: &str) -> StaconaResult<Option<PersistedUser>> {
        let payload = match self.tokens.verify(token) {
            Ok(payload) => payload,
            Err(err) => {
                debug!(error = %err, "Token rejected");
                return Ok(None);
            }
        };

        let user = self.store.find_by_username(&payload.username).await?;
        if user.is_none() {
            debug!(username = %payload.username, "Token names an unknown user");
        }
        Ok(user)
    }

    /// Issue a fresh token for the user behind a still-valid token.
    #[instrument(skip_all)]
    pub async fn refresh_token(&self, token: &str) -> StaconaResult<RefreshOutcome> {
        match self.authenticate(token).await? {
            Some(user) => {
                let token = self.tokens.sign(&TokenPayload::from(&user))?;
                info!(user_id = %user.id, "Token refreshed");
                Ok(RefreshOutcome::Success { token })
            }
            None => Ok(RefreshOutcome::rejected()),
        }
    }
}
