use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::user::errors::UserIdError;

/// User aggregate entity.
///
/// `password_hash` is the only credential material ever held; the plaintext
/// secret is hashed at the boundary and discarded.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier (database-assigned integer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    /// Parse a user ID from its decimal string form.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid integer
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        s.parse::<i64>()
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// New user record handed to the repository; the ID is assigned on insert.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Command to create a new user from already-validated input.
#[derive(Debug)]
pub struct CreateUserCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Command to update an existing user.
///
/// All fields are optional to support partial updates; only provided fields
/// are changed. A provided password is re-hashed by the service.
#[derive(Debug)]
pub struct UpdateUserCommand {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_from_string() {
        assert_eq!(UserId::from_string("42").unwrap(), UserId(42));
        assert!(UserId::from_string("forty-two").is_err());
        assert!(UserId::from_string("").is_err());
    }
}
