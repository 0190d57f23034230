//! Logic errors.

use thiserror::Error;

use crate::bot_commands::CommandError;

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`slackbot_slackapi_interface::ApiError`].
    #[error("API error: {source}")]
    ApiError {
        source: slackbot_slackapi_interface::ApiError,
    },

    /// Wraps [`CommandError`].
    #[error("Command error: {source}")]
    CommandError { source: CommandError },
}

impl From<slackbot_slackapi_interface::ApiError> for DomainError {
    fn from(e: slackbot_slackapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

impl From<CommandError> for DomainError {
    fn from(e: CommandError) -> Self {
        Self::CommandError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
