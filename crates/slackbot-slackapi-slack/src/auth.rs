//! Auth.

use std::time::Duration;

use http::{header, HeaderMap};
use reqwest::ClientBuilder;
use slackbot_config::Config;

use crate::errors::SlackError;

/// Get a Slack client builder authenticated with the bot token.
pub fn get_authenticated_client_builder(config: &Config) -> Result<ClientBuilder, SlackError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        header::HeaderValue::from_str(&format!("Bearer {}", config.api.slack.bot_token))
            .map_err(|_| SlackError::InvalidTokenError)?,
    );

    Ok(ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.slack.connect_timeout))
        .user_agent(format!("slackbot/{}", config.version))
        .default_headers(headers))
}

/// Build a Slack Web API method URL.
pub fn build_slack_url<T: Into<String>>(config: &Config, method: T) -> String {
    format!(
        "{}/{}",
        config.api.slack.root_url.trim_end_matches('/'),
        method.into()
    )
}
