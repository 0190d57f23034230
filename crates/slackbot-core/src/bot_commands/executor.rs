use async_trait::async_trait;
use shaku::{Component, Interface};
use tracing::info;

use super::{
    commands::{ChannelsCommand, PingCommand, PongCommand, WhereCommand},
    BotCommand, Command, CommandContext, CommandExecutionResult, ResultAction,
};
use crate::Result;

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CommandExecutorInterface: Interface {
    async fn execute_command<'a>(
        &self,
        ctx: &CommandContext<'a>,
        command: Command,
    ) -> Result<CommandExecutionResult>;

    async fn process_command_result<'a>(
        &self,
        ctx: &CommandContext<'a>,
        command_result: &CommandExecutionResult,
    ) -> Result<()>;
}

/// Command executor.
#[derive(Component)]
#[shaku(interface = CommandExecutorInterface)]
pub(crate) struct CommandExecutor;

#[async_trait]
impl CommandExecutorInterface for CommandExecutor {
    #[tracing::instrument(
        skip_all,
        fields(
            channel = %ctx.channel,
            user = ?ctx.user,
            command = ?command
        ),
        ret
    )]
    async fn execute_command<'a>(
        &self,
        ctx: &CommandContext<'a>,
        command: Command,
    ) -> Result<CommandExecutionResult> {
        let command_result = match Self::build_command(&command) {
            Some(handler) => handler.handle(ctx).await?,
            None => {
                info!(
                    command = ?command,
                    channel = %ctx.channel,
                    message = "Ignoring unknown command"
                );
                CommandExecutionResult::default()
            }
        };

        self.process_command_result(ctx, &command_result).await?;
        Ok(command_result)
    }

    async fn process_command_result<'a>(
        &self,
        ctx: &CommandContext<'a>,
        command_result: &CommandExecutionResult,
    ) -> Result<()> {
        for action in &command_result.result_actions {
            match action {
                ResultAction::PostMessage(text) => {
                    ctx.api_service
                        .chat_post_message(ctx.channel, text)
                        .await?;
                }
            }
        }

        Ok(())
    }
}

impl CommandExecutor {
    fn build_command(command: &Command) -> Option<Box<dyn BotCommand + Send + Sync>> {
        match command {
            Command::Ping => Some(Box::new(PingCommand::new())),
            Command::Pong => Some(Box::new(PongCommand::new())),
            Command::Where => Some(Box::new(WhereCommand::new())),
            Command::Channels => Some(Box::new(ChannelsCommand::new())),
            Command::Unknown(_) => None,
        }
    }
}
