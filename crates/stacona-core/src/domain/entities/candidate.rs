use serde::Deserialize;
use std::fmt;

/// A registration request as submitted by the caller.
///
/// Transient: it lives only for one registration call. The password is
/// plaintext and must never reach a log line, so `Debug` redacts it.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct CandidateUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl CandidateUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for CandidateUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CandidateUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Credentials submitted to the login flow.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct LoginAttempt {
    pub username: String,
    pub password: String,
}

impl LoginAttempt {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginAttempt")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_never_contains_password() {
        let candidate = CandidateUser::new("alice", "alice@example.com", "hunter2hunter2");
        let rendered = format!("{candidate:?}");

        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));

        let attempt = LoginAttempt::new("alice", "hunter2hunter2");
        assert!(!format!("{attempt:?}").contains("hunter2"));
    }

    #[test]
    fn candidate_deserializes_from_request_shape() {
        let candidate: CandidateUser = serde_json::from_str(
            r#"{"username":"bob1","email":"bob@example.com","password":"pw"}"#,
        )
        .unwrap();

        assert_eq!(candidate, CandidateUser::new("bob1", "bob@example.com", "pw"));
    }
}
