use async_trait::async_trait;

use crate::{
    bot_commands::{
        command::{CommandExecutionResult, ResultAction},
        BotCommand, CommandContext,
    },
    Result,
};

const CHANNEL_SEPARATOR: &str = " / ";

pub struct ChannelsCommand;

impl ChannelsCommand {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BotCommand for ChannelsCommand {
    async fn handle(&self, ctx: &CommandContext) -> Result<CommandExecutionResult> {
        let channels = ctx.api_service.conversations_list(false).await?;

        // Every name is followed by the separator, including the last one.
        let message: String = channels
            .iter()
            .map(|c| format!("#{}{CHANNEL_SEPARATOR}", c.name))
            .collect();

        Ok(CommandExecutionResult::builder()
            .with_action(ResultAction::PostMessage(message))
            .build())
    }
}
