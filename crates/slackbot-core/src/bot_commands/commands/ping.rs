use async_trait::async_trait;

use crate::{
    bot_commands::{
        command::{CommandExecutionResult, ResultAction},
        BotCommand, CommandContext,
    },
    Result,
};

pub struct PingCommand;

impl PingCommand {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BotCommand for PingCommand {
    async fn handle(&self, _ctx: &CommandContext) -> Result<CommandExecutionResult> {
        Ok(CommandExecutionResult::builder()
            .with_action(ResultAction::PostMessage("pong".into()))
            .build())
    }
}
