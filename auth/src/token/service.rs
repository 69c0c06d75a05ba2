use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::decode_header;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and validates signed bearer tokens (HMAC-SHA256).
///
/// The signing secret is injected exactly once at construction and never
/// rotated; validation is stateless and consults nothing beyond the secret
/// and the wall clock. Tokens whose header declares any algorithm other
/// than HS256 are rejected outright.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    expiration_hours: i64,
}

impl TokenService {
    /// Create a token service bound to a signing secret.
    ///
    /// # Arguments
    /// * `secret` - Signing secret (at least 32 bytes recommended for HS256)
    /// * `expiration_hours` - Lifetime of issued tokens
    pub fn new(secret: &[u8], expiration_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            expiration_hours,
        }
    }

    /// Issue a signed token for a subject identity.
    ///
    /// Claims carry the subject and an expiry of now plus the configured
    /// lifetime.
    ///
    /// # Errors
    /// * `SigningFailed` - Internal signing failure
    pub fn issue(&self, user_id: i64) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);
        let claims = Claims::for_user(user_id, self.expiration_hours);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Validate a token and extract the subject identity.
    ///
    /// A token is accepted if and only if its signature verifies against the
    /// signing secret, its header algorithm is HS256, and its expiry is
    /// strictly in the future. One-shot: the first failure is terminal.
    ///
    /// # Errors
    /// * `Malformed` - Structural encoding is not a valid token
    /// * `AlgorithmMismatch` - Header declares a different algorithm
    /// * `BadSignature` - Signature does not verify (incl. tampered payload)
    /// * `Expired` - Expiry has passed
    /// * `MalformedClaims` - Subject or expiry claim absent or mistyped
    pub fn validate(&self, token: &str) -> Result<i64, TokenError> {
        // Structural and algorithm checks come before any claim inspection
        let header = decode_header(token).map_err(|_| TokenError::Malformed)?;
        if header.alg != self.algorithm {
            return Err(TokenError::AlgorithmMismatch);
        }

        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::BadSignature,
                ErrorKind::InvalidAlgorithm => TokenError::AlgorithmMismatch,
                ErrorKind::Json(_) | ErrorKind::MissingRequiredClaim(_) => {
                    TokenError::MalformedClaims
                }
                _ => TokenError::Malformed,
            })?;

        // jsonwebtoken treats exp == now as still valid; the contract is
        // strictly-future expiry
        let claims = token_data.claims;
        if claims.exp <= Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(claims.user_id)
    }
}
