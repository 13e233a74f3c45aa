//! Caller-boundary response shapes.
//!
//! Each response is a JSON object discriminated by a `__typename` field, the
//! same contract a GraphQL union exposes. Password digests never appear in
//! any of these shapes.

use serde::Serialize;

use crate::domain::{
    FieldErrorSet, LoginOutcome, PersistedUser, RefreshOutcome, RegistrationResult, UserId,
};

/// Public view of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDto {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

impl From<&PersistedUser> for UserDto {
    fn from(user: &PersistedUser) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

/// `{"__typename":"Success",...user}` or `{"__typename":"Failure",...errors}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "__typename")]
pub enum RegistrationResponse {
    Success(UserDto),
    Failure(FieldErrorSet),
}

impl From<&RegistrationResult> for RegistrationResponse {
    fn from(result: &RegistrationResult) -> Self {
        match result {
            RegistrationResult::Success { user } => Self::Success(user.into()),
            RegistrationResult::Failure { errors } => Self::Failure(errors.clone()),
        }
    }
}

/// `LoginResult` carries the user and a token; `LoginError` a fixed message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "__typename")]
pub enum LoginResponse {
    LoginResult { user: UserDto, token: String },
    LoginError { message: String },
}

impl From<&LoginOutcome> for LoginResponse {
    fn from(outcome: &LoginOutcome) -> Self {
        match outcome {
            LoginOutcome::Success { user, token } => Self::LoginResult {
                user: user.into(),
                token: token.clone(),
            },
            LoginOutcome::Failure { message } => Self::LoginError {
                message: (*message).to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "__typename")]
pub enum RefreshTokenResponse {
    RefreshToken { token: String },
    RefreshTokenError { message: String },
}

impl From<&RefreshOutcome> for RefreshTokenResponse {
    fn from(outcome: &RefreshOutcome) -> Self {
        match outcome {
            RefreshOutcome::Success { token } => Self::RefreshToken {
                token: token.clone(),
            },
            RefreshOutcome::Failure { message } => Self::RefreshTokenError {
                message: (*message).to_string(),
            },
        }
    }
}
