//! Slack adapter

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use slackbot_config::Config;
use slackbot_slackapi_interface::{
    types::{SlackChannel, SlackPostedMessage},
    ApiService, Result,
};

use crate::{
    auth::{build_slack_url, get_authenticated_client_builder},
    errors::SlackError,
};

const CONVERSATIONS_PAGE_SIZE: &str = "200";

/// Slack API adapter implementation.
#[derive(Clone)]
pub struct SlackApiService {
    config: Config,
    client: Client,
}

impl SlackApiService {
    /// Creates new Slack API adapter.
    pub fn new(config: Config) -> Result<Self> {
        let client = get_authenticated_client_builder(&config)?
            .build()
            .map_err(SlackError::from)?;

        Ok(Self { config, client })
    }

    fn build_url(&self, method: &str) -> String {
        build_slack_url(&self.config, method)
    }
}

#[derive(Deserialize)]
struct MethodStatus {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Check the `ok` flag of a Web API answer, then decode its payload.
fn decode_method_response<T: DeserializeOwned>(
    method: &str,
    body: &[u8],
) -> Result<T, SlackError> {
    let invalid = |source| SlackError::InvalidResponse {
        method: method.into(),
        source,
    };

    let status: MethodStatus = serde_json::from_slice(body).map_err(invalid)?;
    if !status.ok {
        return Err(SlackError::MethodError {
            method: method.into(),
            error: status.error.unwrap_or_else(|| "unknown_error".into()),
        });
    }

    serde_json::from_slice(body).map_err(invalid)
}

#[async_trait]
impl ApiService for SlackApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn chat_post_message(&self, channel: &str, text: &str) -> Result<SlackPostedMessage> {
        const METHOD: &str = "chat.postMessage";

        #[derive(Serialize)]
        struct Request<'a> {
            channel: &'a str,
            text: &'a str,
        }

        let body = self
            .client
            .post(self.build_url(METHOD))
            .json(&Request { channel, text })
            .send()
            .await
            .map_err(SlackError::from)?
            .error_for_status()
            .map_err(SlackError::from)?
            .bytes()
            .await
            .map_err(SlackError::from)?;

        Ok(decode_method_response(METHOD, &body)?)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn conversations_info(&self, channel: &str) -> Result<SlackChannel> {
        const METHOD: &str = "conversations.info";

        #[derive(Deserialize)]
        struct Response {
            channel: SlackChannel,
        }

        let body = self
            .client
            .get(self.build_url(METHOD))
            .query(&[("channel", channel)])
            .send()
            .await
            .map_err(SlackError::from)?
            .error_for_status()
            .map_err(SlackError::from)?
            .bytes()
            .await
            .map_err(SlackError::from)?;

        let response: Response = decode_method_response(METHOD, &body)?;
        Ok(response.channel)
    }

    #[tracing::instrument(skip(self))]
    async fn conversations_list(&self, include_archived: bool) -> Result<Vec<SlackChannel>> {
        const METHOD: &str = "conversations.list";

        #[derive(Deserialize, Default)]
        struct ResponseMetadata {
            #[serde(default)]
            next_cursor: String,
        }

        #[derive(Deserialize)]
        struct Response {
            channels: Vec<SlackChannel>,
            #[serde(default)]
            response_metadata: ResponseMetadata,
        }

        let exclude_archived = (!include_archived).to_string();
        let mut channels = vec![];
        let mut cursor = String::new();

        loop {
            let body = {
                let mut query = vec![
                    ("exclude_archived", exclude_archived.as_str()),
                    ("limit", CONVERSATIONS_PAGE_SIZE),
                ];
                if !cursor.is_empty() {
                    query.push(("cursor", cursor.as_str()));
                }

                self.client
                    .get(self.build_url(METHOD))
                    .query(&query)
                    .send()
                    .await
                    .map_err(SlackError::from)?
                    .error_for_status()
                    .map_err(SlackError::from)?
                    .bytes()
                    .await
                    .map_err(SlackError::from)?
            };

            let response: Response = decode_method_response(METHOD, &body)?;
            channels.extend(response.channels);

            cursor = response.response_metadata.next_cursor;
            if cursor.is_empty() {
                break;
            }
        }

        Ok(channels)
    }
}
