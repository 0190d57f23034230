use slackbot_slackapi_interface::ApiError;

#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum SlackError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Invalid response from Slack method '{}': {}", method, source)]
    InvalidResponse {
        method: String,
        source: serde_json::Error,
    },

    #[error("Slack method '{}' failed: {}", method, error)]
    MethodError { method: String, error: String },

    #[error("Invalid bot token header value")]
    InvalidTokenError,
}

impl From<reqwest::Error> for SlackError {
    fn from(e: reqwest::Error) -> Self {
        SlackError::HttpError { source: e }
    }
}

impl From<SlackError> for ApiError {
    fn from(e: SlackError) -> Self {
        match e {
            SlackError::MethodError { method, error } => ApiError::SlackError { method, error },
            e => ApiError::ImplementationError { source: e.into() },
        }
    }
}
