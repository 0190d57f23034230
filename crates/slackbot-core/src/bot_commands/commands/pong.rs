use async_trait::async_trait;

use crate::{
    bot_commands::{
        command::{CommandExecutionResult, ResultAction},
        BotCommand, CommandContext,
    },
    Result,
};

pub struct PongCommand;

impl PongCommand {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BotCommand for PongCommand {
    async fn handle(&self, _ctx: &CommandContext) -> Result<CommandExecutionResult> {
        Ok(CommandExecutionResult::builder()
            .with_action(ResultAction::PostMessage("ping".into()))
            .build())
    }
}
