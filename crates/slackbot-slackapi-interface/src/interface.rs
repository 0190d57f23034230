use async_trait::async_trait;

use crate::{
    types::{SlackChannel, SlackPostedMessage},
    Result,
};

/// Slack Web API adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Post a plain text message to a channel.
    async fn chat_post_message(&self, channel: &str, text: &str) -> Result<SlackPostedMessage>;
    /// Get channel information.
    async fn conversations_info(&self, channel: &str) -> Result<SlackChannel>;
    /// List channels visible to the bot.
    async fn conversations_list(&self, include_archived: bool) -> Result<Vec<SlackChannel>>;
}
