use async_trait::async_trait;

use crate::{
    bot_commands::{
        command::{CommandExecutionResult, ResultAction},
        BotCommand, CommandContext,
    },
    Result,
};

pub struct WhereCommand;

impl WhereCommand {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BotCommand for WhereCommand {
    async fn handle(&self, ctx: &CommandContext) -> Result<CommandExecutionResult> {
        let channel = ctx.api_service.conversations_info(ctx.channel).await?;

        Ok(CommandExecutionResult::builder()
            .with_action(ResultAction::PostMessage(channel.name))
            .build())
    }
}
