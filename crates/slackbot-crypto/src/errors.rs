//! Crypto errors.

use thiserror::Error;

/// Crypto error.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Invalid signature format {sig}")]
    InvalidSignatureFormat { sig: String },
    #[error("Invalid request timestamp '{timestamp}'")]
    InvalidTimestamp { timestamp: String },
    #[error("Request timestamp {timestamp} is outside of the {tolerance}s tolerance window")]
    ExpiredTimestamp { timestamp: i64, tolerance: u64 },
    #[error("Signature mismatch")]
    SignatureMismatch,
    #[error("Signing secret is empty")]
    EmptySecret,
    #[error("Invalid HMAC secret key length")]
    InvalidSecretKeyLength,
}

/// Result alias for `CryptoError`.
pub type Result<T, E = CryptoError> = ::core::result::Result<T, E>;
