//! Field constraints enforced before a record is committed.
//!
//! Rejections produce a multi-line report naming the operation and every
//! offending argument, in the manner of an ORM validation error.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::User;
use crate::domain::ports::UserRepositoryError;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Store operation being validated, used in the report header.
#[derive(Debug, Clone, Copy)]
pub(super) enum Operation {
    Create,
    Update,
}

impl Operation {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
        }
    }
}

pub(super) fn validate_record(
    operation: Operation,
    user: &User,
) -> Result<(), UserRepositoryError> {
    let mut problems = Vec::new();
    if user.name().trim().is_empty() {
        problems.push("Argument `name`: must not be empty.".to_owned());
    }
    if !email_regex().is_match(user.email()) {
        problems.push(format!(
            "Argument `email`: expected a valid email address, received `{}`.",
            user.email()
        ));
    }
    if problems.is_empty() {
        return Ok(());
    }

    let mut report = format!("Invalid `users.{}()` invocation:\n", operation.as_str());
    for problem in problems {
        report.push('\n');
        report.push_str(&problem);
    }
    Err(UserRepositoryError::validation(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewUser, Role, UserId};
    use rstest::rstest;

    fn user(name: &str, email: &str) -> User {
        User::new(
            UserId::FIRST,
            NewUser {
                name: name.to_owned(),
                email: email.to_owned(),
                role: Role::Intern,
            },
        )
    }

    #[rstest]
    #[case("Ian Clarke", "ian.clarke@example.com")]
    #[case("Z", "z@x.com")]
    fn accepts_well_formed_records(#[case] name: &str, #[case] email: &str) {
        assert!(validate_record(Operation::Create, &user(name, email)).is_ok());
    }

    #[rstest]
    fn reports_every_offending_argument_on_separate_lines() {
        let Err(UserRepositoryError::Validation { message }) =
            validate_record(Operation::Update, &user("  ", "not-an-email"))
        else {
            panic!("expected a validation failure");
        };

        assert_eq!(
            message,
            "Invalid `users.update()` invocation:\n\n\
             Argument `name`: must not be empty.\n\
             Argument `email`: expected a valid email address, received `not-an-email`."
        );
    }

    #[rstest]
    #[case("plain")]
    #[case("two@@example.com")]
    #[case("spaced name@example.com")]
    #[case("nodot@example")]
    fn rejects_malformed_emails(#[case] email: &str) {
        assert!(validate_record(Operation::Create, &user("Valid", email)).is_err());
    }
}
