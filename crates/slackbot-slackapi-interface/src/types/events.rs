use serde::Deserialize;

/// Events API envelope, tagged by its top-level `type` field.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlackEventEnvelope {
    /// Endpoint ownership handshake.
    UrlVerification(SlackUrlVerificationEvent),
    /// Event delivery.
    EventCallback(SlackEventCallback),
    /// Any other envelope type.
    #[serde(other)]
    Unsupported,
}

/// URL verification handshake.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct SlackUrlVerificationEvent {
    /// Opaque challenge, to be echoed verbatim.
    pub challenge: String,
    /// Deprecated verification token.
    #[serde(default)]
    pub token: Option<String>,
}

/// Event callback wrapper.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct SlackEventCallback {
    /// Workspace ID.
    #[serde(default)]
    pub team_id: Option<String>,
    /// App ID.
    #[serde(default)]
    pub api_app_id: Option<String>,
    /// Unique event ID.
    #[serde(default)]
    pub event_id: Option<String>,
    /// Event time (unix seconds).
    #[serde(default)]
    pub event_time: Option<u64>,
    /// Inner event.
    pub event: SlackInnerEvent,
}

/// Inner event, tagged by its `type` field.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlackInnerEvent {
    /// Bot mentioned in a channel.
    AppMention(SlackAppMentionEvent),
    /// Any other event kind.
    #[serde(other)]
    Unsupported,
}

/// App mention event.
#[derive(Debug, Deserialize, Default, PartialEq, Eq, Clone)]
pub struct SlackAppMentionEvent {
    /// Author user ID.
    #[serde(default)]
    pub user: Option<String>,
    /// Message text, starting with the bot mention.
    #[serde(default)]
    pub text: String,
    /// Channel ID.
    pub channel: String,
    /// Message timestamp.
    #[serde(default)]
    pub ts: Option<String>,
    /// Parent thread timestamp.
    #[serde(default)]
    pub thread_ts: Option<String>,
}
