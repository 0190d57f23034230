//! Webhook constants.

/// Slack events path.
pub const SLACK_EVENTS_PATH: &str = "/slack/events";
/// Slack request timestamp header.
pub const SLACK_TIMESTAMP_HEADER: &str = "X-Slack-Request-Timestamp";
/// Slack signature header.
pub const SLACK_SIGNATURE_HEADER: &str = "X-Slack-Signature";
