use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as HashError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// One-way salted password hashing (Argon2id).
///
/// Every hash embeds its own random salt and the cost parameters it was
/// produced under, so verification stays compatible with hashes created
/// under older cost settings. The work factor is intentional latency that
/// throttles offline guessing.
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher with the default cost profile.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password for storage.
    ///
    /// A fresh random salt is generated per call, so hashing the same input
    /// twice yields two different, individually valid hashes.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (algorithm, parameters, salt, and digest)
    ///
    /// # Errors
    /// * `HashingFailed` - Internal hashing failure; never caused by input shape
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a candidate password against a stored hash.
    ///
    /// Recomputes the digest using the salt and cost embedded in `stored`.
    /// The comparison is constant-time; no partial-match information leaks.
    ///
    /// # Arguments
    /// * `stored` - Stored hash in PHC string format
    /// * `candidate` - Plaintext password to check
    ///
    /// # Errors
    /// * `InvalidHash` - Stored hash is not a parseable PHC string
    /// * `Mismatch` - Candidate does not match
    pub fn verify(&self, stored: &str, candidate: &str) -> Result<(), PasswordError> {
        let parsed_hash =
            PasswordHash::new(stored).map_err(|e| PasswordError::InvalidHash(e.to_string()))?;

        let argon2 = Argon2::default();

        argon2
            .verify_password(candidate.as_bytes(), &parsed_hash)
            .map_err(|e| match e {
                HashError::Password => PasswordError::Mismatch,
                other => PasswordError::InvalidHash(other.to_string()),
            })
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");

        assert!(hasher.verify(&hash, password).is_ok());
    }

    #[test]
    fn test_verify_wrong_password() {
        let hasher = PasswordHasher::new();

        let hash = hasher.hash("correct_password").expect("Failed to hash");

        let result = hasher.verify(&hash, "wrong_password");
        assert!(matches!(result, Err(PasswordError::Mismatch)));
    }

    #[test]
    fn test_same_password_different_hashes() {
        let hasher = PasswordHasher::new();
        let password = "repeated_password";

        let first = hasher.hash(password).expect("Failed to hash");
        let second = hasher.hash(password).expect("Failed to hash");

        // Salts differ, so the hashes must too
        assert_ne!(first, second);

        // Both still verify independently
        assert!(hasher.verify(&first, password).is_ok());
        assert!(hasher.verify(&second, password).is_ok());
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("not_a_phc_string", "password");
        assert!(matches!(result, Err(PasswordError::InvalidHash(_))));
    }
}
