use std::str::FromStr;

use serde::Serialize;

/// A single failed constraint, tied to the field that violated it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

type Constraint = fn(&str) -> Result<(), String>;

const NAME_MIN_LENGTH: usize = 2;
const NAME_MAX_LENGTH: usize = 20;
const PASSWORD_MIN_LENGTH: usize = 6;

/// Ordered field schema. Constraints are plain functions evaluated one per
/// field, so validation needs no runtime type inspection and reports in a
/// stable order.
const SCHEMA: [(&str, Constraint); 3] = [
    ("name", name_length),
    ("email", email_format),
    ("password", password_length),
];

fn name_length(value: &str) -> Result<(), String> {
    let length = value.chars().count();
    if length < NAME_MIN_LENGTH || length > NAME_MAX_LENGTH {
        return Err(format!(
            "must be between {NAME_MIN_LENGTH} and {NAME_MAX_LENGTH} characters"
        ));
    }
    Ok(())
}

fn email_format(value: &str) -> Result<(), String> {
    email_address::EmailAddress::from_str(value)
        .map(|_| ())
        .map_err(|_| "must be a valid email address".to_string())
}

fn password_length(value: &str) -> Result<(), String> {
    if value.chars().count() < PASSWORD_MIN_LENGTH {
        return Err(format!(
            "must be at least {PASSWORD_MIN_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Structural validation of registration and update input.
///
/// Every constraint is evaluated independently (no short-circuiting), so a
/// caller can report all problems in a single response.
pub struct CredentialValidator;

impl CredentialValidator {
    /// Validate full registration input; every field is required.
    pub fn validate_registration(
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), Vec<FieldViolation>> {
        Self::run([Some(name), Some(email), Some(password)])
    }

    /// Validate partial-update input.
    ///
    /// An absent field is not a violation; a field present but violating its
    /// constraint is.
    pub fn validate_update(
        name: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<(), Vec<FieldViolation>> {
        Self::run([name, email, password])
    }

    fn run(values: [Option<&str>; 3]) -> Result<(), Vec<FieldViolation>> {
        let mut violations = Vec::new();

        for ((field, constraint), value) in SCHEMA.into_iter().zip(values) {
            let Some(value) = value else {
                continue;
            };
            if let Err(message) = constraint(value) {
                violations.push(FieldViolation { field, message });
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_accepts_valid_input() {
        let result = CredentialValidator::validate_registration("Al", "a@b.co", "secret1");
        assert!(result.is_ok());
    }

    #[test]
    fn test_registration_accumulates_all_violations() {
        let violations =
            CredentialValidator::validate_registration("A", "bad", "123").unwrap_err();

        assert_eq!(violations.len(), 3);
        assert_eq!(violations[0].field, "name");
        assert_eq!(violations[1].field, "email");
        assert_eq!(violations[2].field, "password");
    }

    #[test]
    fn test_registration_single_violation() {
        let violations =
            CredentialValidator::validate_registration("Alice", "alice@example.com", "123")
                .unwrap_err();

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "password");
    }

    #[test]
    fn test_name_boundaries() {
        assert!(CredentialValidator::validate_registration("Al", "a@b.co", "secret1").is_ok());
        assert!(CredentialValidator::validate_registration(
            &"x".repeat(20),
            "a@b.co",
            "secret1"
        )
        .is_ok());
        assert!(CredentialValidator::validate_registration(
            &"x".repeat(21),
            "a@b.co",
            "secret1"
        )
        .is_err());
    }

    #[test]
    fn test_update_skips_omitted_fields() {
        let result = CredentialValidator::validate_update(None, Some("a@b.co"), None);
        assert!(result.is_ok());
    }

    #[test]
    fn test_update_rejects_present_invalid_field() {
        let violations =
            CredentialValidator::validate_update(None, Some("not-an-email"), None).unwrap_err();

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "email");
    }

    #[test]
    fn test_update_all_omitted_is_valid() {
        assert!(CredentialValidator::validate_update(None, None, None).is_ok());
    }
}
