use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::TokenError;
use crate::token::TokenService;

/// Login coordinator combining password verification and token issuance.
///
/// A password mismatch is collapsed into `InvalidCredentials` so callers can
/// report it identically to an unknown account, preventing account
/// enumeration.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_service: TokenService,
}

/// Result of a successful login.
pub struct AuthenticationResult {
    /// Signed bearer token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `token_secret` - Signing secret for bearer tokens
    /// * `expiration_hours` - Lifetime of issued tokens
    pub fn new(token_secret: &[u8], expiration_hours: i64) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_service: TokenService::new(token_secret, expiration_hours),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a bearer token for the subject.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `user_id` - Subject identity to embed in the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `Password` - Stored hash is unusable
    /// * `Token` - Token issuance failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: i64,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        self.password_hasher
            .verify(stored_hash, password)
            .map_err(|e| match e {
                PasswordError::Mismatch => AuthenticationError::InvalidCredentials,
                other => AuthenticationError::Password(other),
            })?;

        let access_token = self.token_service.issue(user_id)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Reject a login attempt for an unknown account.
    ///
    /// Performs the same hashing work as a real verification before
    /// returning, so response timing does not reveal whether the account
    /// exists. Always yields `InvalidCredentials`.
    pub fn reject_unknown_account(&self, password: &str) -> AuthenticationError {
        let _ = self.password_hasher.hash(password);
        AuthenticationError::InvalidCredentials
    }

    /// Issue a bearer token without password verification.
    ///
    /// # Errors
    /// * `TokenError` - Token issuance failed
    pub fn issue_token(&self, user_id: i64) -> Result<String, TokenError> {
        self.token_service.issue(user_id)
    }

    /// Validate a bearer token and return the subject identity.
    ///
    /// # Errors
    /// * `TokenError` - Token validation failed
    pub fn validate_token(&self, token: &str) -> Result<i64, TokenError> {
        self.token_service.validate(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new(SECRET, 24);

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate(password, &hash, 42)
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let user_id = authenticator
            .validate_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(user_id, 42);
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = Authenticator::new(SECRET, 24);

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash, 42);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_reject_unknown_account_is_uniform() {
        let authenticator = Authenticator::new(SECRET, 24);

        // Same outcome as a wrong password against a real account
        let result = authenticator.reject_unknown_account("any_password");
        assert!(matches!(result, AuthenticationError::InvalidCredentials));
    }

    #[test]
    fn test_issue_and_validate_token() {
        let authenticator = Authenticator::new(SECRET, 24);

        let token = authenticator.issue_token(7).expect("Failed to issue token");
        assert_eq!(authenticator.validate_token(&token).unwrap(), 7);
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = Authenticator::new(SECRET, 24);

        assert!(authenticator.validate_token("invalid.token.here").is_err());
    }
}
