use thiserror::Error;

/// Error type for bearer token validation and issuance.
///
/// A validation call is one-shot: it terminates on the first failure and is
/// never retried. The variants exist so the gate can log the precise reason
/// while reporting a uniform 401 to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Token is not three base64url segments joined by `.`, or a segment
    /// fails to decode.
    #[error("Token encoding is malformed")]
    Malformed,

    /// Header declares a signing algorithm other than the mandated one.
    /// Rejected before any claim inspection to defeat algorithm-substitution
    /// attacks.
    #[error("Token signing algorithm is not permitted")]
    AlgorithmMismatch,

    /// Recomputed signature does not match, including tampered payloads.
    #[error("Token signature verification failed")]
    BadSignature,

    /// Expiry is not strictly in the future.
    #[error("Token is expired")]
    Expired,

    /// Claims decoded but the subject or expiry is absent or mistyped.
    #[error("Token claims are malformed")]
    MalformedClaims,

    /// Internal signing failure during issuance.
    #[error("Token signing failed: {0}")]
    SigningFailed(String),
}
