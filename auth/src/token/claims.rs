use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Bearer token payload: subject identity plus absolute expiry.
///
/// Immutable once issued. Serialized field names are part of the wire
/// format: `user_id` (integer subject) and `exp` (epoch seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identity carried by the token.
    pub user_id: i64,

    /// Expiration time (Unix timestamp, seconds).
    pub exp: i64,
}

impl Claims {
    /// Build claims for a subject, expiring `expiration_hours` from now.
    pub fn for_user(user_id: i64, expiration_hours: i64) -> Self {
        let expiration = Utc::now() + Duration::hours(expiration_hours);

        Self {
            user_id,
            exp: expiration.timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_user_expiry_offset() {
        let before = Utc::now().timestamp();
        let claims = Claims::for_user(42, 24);
        let after = Utc::now().timestamp();

        assert_eq!(claims.user_id, 42);
        assert!(claims.exp >= before + 24 * 60 * 60);
        assert!(claims.exp <= after + 24 * 60 * 60);
    }

    #[test]
    fn test_wire_field_names() {
        let claims = Claims { user_id: 7, exp: 1234567890 };

        let json = serde_json::to_value(claims).unwrap();
        assert_eq!(json["user_id"], 7);
        assert_eq!(json["exp"], 1234567890);
    }
}
