use serde::{Deserialize, Serialize};

/// Slack conversation.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct SlackChannel {
    /// Channel ID.
    pub id: String,
    /// Display name, without the leading `#`.
    #[serde(default)]
    pub name: String,
    /// Is the channel archived?
    #[serde(default)]
    pub is_archived: bool,
}

/// Result of a posted message.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct SlackPostedMessage {
    /// Channel ID.
    pub channel: String,
    /// Message timestamp.
    pub ts: String,
}
