//! Null driver for Slack API.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use slackbot_slackapi_interface::{
    types::{SlackChannel, SlackPostedMessage},
    ApiService, Result,
};

/// Null API service.
#[derive(Clone, Default)]
pub struct NullApiService {
    _private: (),
}

impl NullApiService {
    /// Build a null API service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl ApiService for NullApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn chat_post_message(&self, channel: &str, text: &str) -> Result<SlackPostedMessage> {
        Ok(SlackPostedMessage {
            channel: channel.into(),
            ts: "0000000000.000000".into(),
        })
    }

    #[tracing::instrument(skip(self), ret)]
    async fn conversations_info(&self, channel: &str) -> Result<SlackChannel> {
        Ok(SlackChannel {
            id: channel.into(),
            name: channel.into(),
            is_archived: false,
        })
    }

    #[tracing::instrument(skip(self), ret)]
    async fn conversations_list(&self, include_archived: bool) -> Result<Vec<SlackChannel>> {
        Ok(vec![])
    }
}
