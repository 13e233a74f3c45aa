//! HS256 JSON Web Token issuer.

use std::time::Duration;

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use stacona_core::{
    application::{ApplicationError, ports::TokenIssuer},
    domain::{TokenPayload, UserId},
    error::{StaconaError, StaconaResult},
};

/// JWT Claims - data stored in the token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,      // Subject (user id as string)
    pub username: String, // Looked up again on every authentication
    pub exp: i64,         // Expiration timestamp
    pub iat: i64,         // Issued at timestamp
    pub iss: String,      // Issuer
    pub jti: String,      // JWT ID (unique token identifier)
}

/// Signs and verifies access tokens with a shared secret.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    expires_in: Duration,
}

impl JwtTokenIssuer {
    /// Create a new issuer.
    ///
    /// An empty secret is rejected; tokens signed with it would be trivially
    /// forgeable.
    pub fn new(secret: &str, issuer: impl Into<String>, expires_in: Duration) -> StaconaResult<Self> {
        if secret.is_empty() {
            return Err(StaconaError::Configuration {
                message: "JWT secret must not be empty".into(),
            });
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer: issuer.into(),
            expires_in,
        })
    }

    /// Decode and check a token, returning the raw claims.
    pub fn decode_claims(&self, token: &str) -> StaconaResult<Claims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                ApplicationError::InvalidToken {
                    reason: e.to_string(),
                }
                .into()
            })
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn sign(&self, payload: &TokenPayload) -> StaconaResult<String> {
        let now = chrono::Utc::now();
        let ttl = chrono::Duration::from_std(self.expires_in).map_err(|e| {
            StaconaError::Configuration {
                message: format!("token lifetime out of range: {}", e),
            }
        })?;

        let claims = Claims {
            sub: payload.id.to_string(),
            username: payload.username.clone(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
            iss: self.issuer.clone(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            StaconaError::from(ApplicationError::TokenSigningFailed {
                reason: e.to_string(),
            })
        })?;

        debug!(jti = %claims.jti, exp = claims.exp, "Token signed");
        Ok(token)
    }

    fn verify(&self, token: &str) -> StaconaResult<TokenPayload> {
        let claims = self.decode_claims(token)?;
        let id = UserId::parse(&claims.sub).map_err(|e| ApplicationError::InvalidToken {
            reason: e.to_string(),
        })?;

        Ok(TokenPayload {
            id,
            username: claims.username,
        })
    }
}
