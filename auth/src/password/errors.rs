use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    /// Internal hashing failure (entropy or resource exhaustion), never a
    /// consequence of input shape.
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored hash is not a parseable PHC string.
    #[error("Invalid password hash: {0}")]
    InvalidHash(String),

    /// Candidate password does not match the stored hash.
    #[error("Password does not match")]
    Mismatch,
}
