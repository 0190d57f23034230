//! Webhook errors.

use actix_web::{error::PayloadError, http::StatusCode, HttpResponse, ResponseError};
use slackbot_core::{bot_commands::CommandError, DomainError};
use slackbot_crypto::CryptoError;
use thiserror::Error;
use tracing::{error, warn};

/// Webhook error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Missing webhook header '{}'.", header)]
    MissingWebhookSignature { header: &'static str },

    #[error("Invalid webhook signature,\n  caused by: {}", source)]
    InvalidWebhookSignature { source: CryptoError },

    #[error("Could not read request body,\n  caused by: {}", source)]
    BodyReadError { source: PayloadError },

    #[error("Request body exceeds {} bytes.", limit)]
    PayloadTooLarge { limit: usize },

    #[error("Error while parsing webhook event,\n  caused by: {}", source)]
    EventParseError { source: serde_json::Error },

    #[error("Malformed mention,\n  caused by: {}", source)]
    MalformedMention { source: CommandError },

    #[error("Domain error,\n  caused by: {}", source)]
    DomainError { source: DomainError },

    #[error("I/O error,\n  caused by: {}", source)]
    IoError { source: std::io::Error },
}

impl From<DomainError> for ServerError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::CommandError { source } => Self::MalformedMention { source },
            other => Self::DomainError { source: other },
        }
    }
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match &self {
            ServerError::MalformedMention { .. } => StatusCode::BAD_REQUEST,
            ServerError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(status = %status, error = %self, message = "Webhook request failed");
        } else {
            warn!(status = %status, error = %self, message = "Webhook request rejected");
        }

        // Slack does not read error bodies.
        HttpResponse::build(status).finish()
    }
}

/// Result alias for `ServerError`.
pub type Result<T> = core::result::Result<T, ServerError>;
