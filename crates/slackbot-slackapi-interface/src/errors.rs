//! API errors.

use thiserror::Error;

/// API error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    /// Slack answered with `ok: false`.
    #[error("Slack method '{}' failed: {}", method, error)]
    SlackError { method: String, error: String },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `ApiError`.
pub type Result<T, E = ApiError> = core::result::Result<T, E>;
