use async_trait::async_trait;
use shaku::{Component, HasComponent, Interface};
use slackbot_slackapi_interface::types::{
    SlackAppMentionEvent, SlackEventCallback, SlackInnerEvent,
};
use tracing::debug;

use crate::{
    bot_commands::{CommandContext, CommandExecutorInterface, CommandParser},
    CoreContext, Result,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait HandleEventCallbackInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: SlackEventCallback) -> Result<()>;
}

#[derive(Component)]
#[shaku(interface = HandleEventCallbackInterface)]
pub(crate) struct HandleEventCallback;

#[async_trait]
impl HandleEventCallbackInterface for HandleEventCallback {
    #[tracing::instrument(skip(self, ctx), fields(
        event_id = ?event.event_id,
        team_id = ?event.team_id,
    ))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: SlackEventCallback) -> Result<()> {
        match event.event {
            SlackInnerEvent::AppMention(mention) => self.run_app_mention(ctx, mention).await,
            SlackInnerEvent::Unsupported => {
                debug!(
                    event_id = ?event.event_id,
                    message = "Ignoring unsupported inner event"
                );
                Ok(())
            }
        }
    }
}

impl HandleEventCallback {
    async fn run_app_mention(
        &self,
        ctx: &CoreContext<'_>,
        mention: SlackAppMentionEvent,
    ) -> Result<()> {
        let command = CommandParser::parse_mention(&mention.text)?;

        let command_ctx = CommandContext {
            config: ctx.config,
            api_service: ctx.api_service,
            channel: &mention.channel,
            user: mention.user.as_deref(),
        };

        let command_executor: &dyn CommandExecutorInterface = ctx.core_module.resolve_ref();
        command_executor
            .execute_command(&command_ctx, command)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use slackbot_slackapi_interface::{
        types::{SlackChannel, SlackPostedMessage},
        ApiError,
    };

    use super::*;
    use crate::{bot_commands::CommandError, context::tests::CoreContextTest, DomainError};

    fn mention_event(text: &str) -> SlackEventCallback {
        SlackEventCallback {
            team_id: Some("T123".into()),
            api_app_id: None,
            event_id: Some("Ev123".into()),
            event_time: None,
            event: SlackInnerEvent::AppMention(SlackAppMentionEvent {
                user: Some("U456".into()),
                text: text.into(),
                channel: "C123".into(),
                ts: None,
                thread_ts: None,
            }),
        }
    }

    fn posted() -> SlackPostedMessage {
        SlackPostedMessage {
            channel: "C123".into(),
            ts: "1.0".into(),
        }
    }

    fn channel(name: &str) -> SlackChannel {
        SlackChannel {
            id: format!("C{name}"),
            name: name.into(),
            is_archived: false,
        }
    }

    #[tokio::test]
    async fn ping_posts_pong() -> Result<()> {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_chat_post_message()
            .once()
            .withf(|channel, text| channel == "C123" && text == "pong")
            .return_once(|_, _| Ok(posted()));

        HandleEventCallback
            .run(&ctx.as_context(), mention_event("<@BOTID> ping"))
            .await
    }

    #[tokio::test]
    async fn pong_posts_ping() -> Result<()> {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_chat_post_message()
            .once()
            .withf(|channel, text| channel == "C123" && text == "ping")
            .return_once(|_, _| Ok(posted()));

        HandleEventCallback
            .run(&ctx.as_context(), mention_event("<@BOTID> pong extra words"))
            .await
    }

    #[tokio::test]
    async fn where_posts_channel_name() -> Result<()> {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_conversations_info()
            .once()
            .withf(|channel| channel == "C123")
            .return_once(|_| Ok(channel("general")));
        ctx.api_service
            .expect_chat_post_message()
            .once()
            .withf(|channel, text| channel == "C123" && text == "general")
            .return_once(|_, _| Ok(posted()));

        HandleEventCallback
            .run(&ctx.as_context(), mention_event("<@BOTID> where"))
            .await
    }

    #[tokio::test]
    async fn channels_posts_channel_list() -> Result<()> {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_conversations_list()
            .once()
            .return_once(|_| Ok(vec![channel("general"), channel("random")]));
        ctx.api_service
            .expect_chat_post_message()
            .once()
            .withf(|channel, text| channel == "C123" && text == "#general / #random / ")
            .return_once(|_, _| Ok(posted()));

        HandleEventCallback
            .run(&ctx.as_context(), mention_event("<@BOTID> channels"))
            .await
    }

    #[tokio::test]
    async fn incomplete_mention_is_rejected() {
        let ctx = CoreContextTest::new();

        let result = HandleEventCallback
            .run(&ctx.as_context(), mention_event("<@BOTID>"))
            .await;
        assert!(matches!(
            result,
            Err(DomainError::CommandError {
                source: CommandError::IncompleteCommand { .. }
            })
        ));
    }

    #[tokio::test]
    async fn unknown_command_is_ignored() -> Result<()> {
        let ctx = CoreContextTest::new();

        HandleEventCallback
            .run(&ctx.as_context(), mention_event("<@BOTID> unknowncmd"))
            .await
    }

    #[tokio::test]
    async fn unsupported_event_is_ignored() -> Result<()> {
        let ctx = CoreContextTest::new();

        HandleEventCallback
            .run(
                &ctx.as_context(),
                SlackEventCallback {
                    team_id: None,
                    api_app_id: None,
                    event_id: None,
                    event_time: None,
                    event: SlackInnerEvent::Unsupported,
                },
            )
            .await
    }

    #[tokio::test]
    async fn fetch_failure_stops_processing() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_conversations_info()
            .once()
            .return_once(|_| {
                Err(ApiError::SlackError {
                    method: "conversations.info".into(),
                    error: "channel_not_found".into(),
                })
            });

        let result = HandleEventCallback
            .run(&ctx.as_context(), mention_event("<@BOTID> where"))
            .await;
        assert!(matches!(result, Err(DomainError::ApiError { .. })));
    }
}
