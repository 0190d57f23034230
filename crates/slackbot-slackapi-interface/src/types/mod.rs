//! Slack types.

mod channel;
mod events;

pub use channel::{SlackChannel, SlackPostedMessage};
pub use events::{
    SlackAppMentionEvent, SlackEventCallback, SlackEventEnvelope, SlackInnerEvent,
    SlackUrlVerificationEvent,
};
