use std::sync::LazyLock;

use regex::Regex;
use zxcvbn::{Score, zxcvbn};

use crate::domain::{
    entities::{CandidateUser, FieldErrorSet},
    value_objects::Field,
};

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LENGTH: usize = 10;

/// Email grammar: an RFC 5322 dot-atom local part, dot-separated host labels,
/// and an alphabetic top-level domain.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*\.[A-Za-z]{2,63}$",
    )
    .expect("valid regex")
});

/// One `(field, predicate, message)` entry of the rule table.
pub struct ValidationRule {
    pub field: Field,
    pub message: &'static str,
    check: fn(&CandidateUser) -> bool,
}

impl ValidationRule {
    /// `true` when the candidate satisfies this rule.
    pub fn passes(&self, candidate: &CandidateUser) -> bool {
        (self.check)(candidate)
    }
}

/// Registration rules, evaluated in order. Every rule runs; a field may
/// collect more than one message.
pub static RULES: [ValidationRule; 6] = [
    ValidationRule {
        field: Field::Username,
        message: "username should not be empty",
        check: |c| !c.username.is_empty(),
    },
    ValidationRule {
        field: Field::Username,
        message: "username must contain only letters and numbers",
        check: |c| is_alphanumeric(&c.username),
    },
    ValidationRule {
        field: Field::Email,
        message: "email should not be empty",
        check: |c| !c.email.is_empty(),
    },
    ValidationRule {
        field: Field::Email,
        message: "email must be an email",
        check: |c| is_email(&c.email),
    },
    ValidationRule {
        field: Field::Password,
        message: "password is too weak",
        check: |c| !is_weak_password(&c.password),
    },
    ValidationRule {
        field: Field::Password,
        message: "password must be longer than or equal to 10 characters",
        check: |c| c.password.chars().count() >= MIN_PASSWORD_LENGTH,
    },
];

/// Centralized domain validation.
///
/// All registration checks live in [`RULES`], not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Run every rule against `candidate`.
    ///
    /// Pure: identical input gives identical output. Only failing fields
    /// appear in the returned set.
    pub fn validate_candidate(candidate: &CandidateUser) -> FieldErrorSet {
        let mut errors = FieldErrorSet::new();
        for rule in RULES.iter().filter(|rule| !rule.passes(candidate)) {
            errors.push(rule.field, rule.message);
        }
        errors
    }
}

fn is_alphanumeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
}

fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// A password is weak when the strength estimator gives it the lowest score.
fn is_weak_password(password: &str) -> bool {
    if password.is_empty() {
        return true;
    }
    matches!(zxcvbn(password, &[]).score(), Score::Zero)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors_for(username: &str, email: &str, password: &str) -> FieldErrorSet {
        DomainValidator::validate_candidate(&CandidateUser::new(username, email, password))
    }

    const GOOD_PASSWORD: &str = "Tr0ub4dor&3xyz";

    #[test]
    fn empty_username_reports_both_username_rules() {
        let errors = errors_for("", "a@b.com", GOOD_PASSWORD);
        assert_eq!(
            errors.get(Field::Username),
            [
                "username should not be empty",
                "username must contain only letters and numbers",
            ]
        );
        assert!(!errors.has_errors(Field::Email));
    }

    #[test]
    fn non_alphanumeric_usernames_are_rejected() {
        for username in ["ab!", "dash-name", "dot.name", "with space", "ünïcode"] {
            let errors = errors_for(username, "a@b.com", GOOD_PASSWORD);
            assert_eq!(
                errors.get(Field::Username),
                ["username must contain only letters and numbers"],
                "{username}"
            );
        }
    }

    #[test]
    fn valid_emails_pass() {
        for email in ["a@b.com", "first.last+tag@example.co.uk", "x_y@sub-domain.io"] {
            assert!(is_email(email), "{email}");
        }
    }

    #[test]
    fn invalid_emails_fail() {
        for email in ["not-an-email", "a@b", "@example.com", "a@.com", "a b@c.com", "a@b.c0m"] {
            assert!(!is_email(email), "{email}");
        }
    }

    #[test]
    fn misplaced_dots_in_local_part_fail() {
        for email in [".alice@example.com", "alice.@example.com", "a..b@example.com"] {
            let errors = errors_for("alice", email, GOOD_PASSWORD);
            assert_eq!(errors.get(Field::Email), ["email must be an email"], "{email}");
        }
    }

    #[test]
    fn empty_email_reports_both_email_rules() {
        let errors = errors_for("alice", "", GOOD_PASSWORD);
        assert_eq!(
            errors.get(Field::Email),
            ["email should not be empty", "email must be an email"]
        );
    }

    #[test]
    fn short_password_fails_length_rule() {
        let errors = errors_for("alice", "a@b.com", "xK9#q");
        assert!(
            errors
                .get(Field::Password)
                .iter()
                .any(|m| m == "password must be longer than or equal to 10 characters")
        );
    }

    #[test]
    fn dictionary_password_is_too_weak() {
        let errors = errors_for("alice", "a@b.com", "password");
        assert!(
            errors
                .get(Field::Password)
                .iter()
                .any(|m| m == "password is too weak")
        );
    }

    #[test]
    fn empty_password_is_weak_and_short() {
        let errors = errors_for("alice", "a@b.com", "");
        assert_eq!(
            errors.get(Field::Password),
            [
                "password is too weak",
                "password must be longer than or equal to 10 characters",
            ]
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 10 characters, 20 bytes
        let password = "ééééééééé1";
        assert_eq!(password.chars().count(), MIN_PASSWORD_LENGTH);
        let errors = errors_for("alice", "a@b.com", password);
        assert!(
            !errors
                .get(Field::Password)
                .iter()
                .any(|m| m.starts_with("password must be longer"))
        );
    }

    #[test]
    fn only_failing_fields_are_present() {
        let errors = errors_for("alice", "not-an-email", GOOD_PASSWORD);
        let failed: Vec<_> = errors.failed_fields().collect();
        assert_eq!(failed, [Field::Email]);
    }

    #[test]
    fn rule_table_covers_every_field() {
        for field in Field::ALL {
            assert!(RULES.iter().any(|rule| rule.field == field), "{field}");
        }
    }
}
