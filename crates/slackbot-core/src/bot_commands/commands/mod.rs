use async_trait::async_trait;

use crate::{bot_commands::command::CommandExecutionResult, Result};

mod channels;
mod context;
mod ping;
mod pong;
mod where_command;

pub use channels::ChannelsCommand;
pub use context::CommandContext;
pub use ping::PingCommand;
pub use pong::PongCommand;
pub use where_command::WhereCommand;

#[async_trait]
pub trait BotCommand {
    async fn handle(&self, ctx: &CommandContext) -> Result<CommandExecutionResult>;
}

#[cfg(test)]
pub(crate) mod tests {
    use slackbot_config::Config;
    use slackbot_slackapi_interface::MockApiService;

    use super::*;

    pub(crate) struct CommandContextTest {
        pub config: Config,
        pub api_service: MockApiService,
        pub channel: String,
        pub user: Option<String>,
    }

    impl CommandContextTest {
        pub fn new() -> Self {
            Self {
                config: Config::from_env_no_version().unwrap(),
                api_service: MockApiService::new(),
                channel: "C123".into(),
                user: Some("U456".into()),
            }
        }

        pub fn as_context(&self) -> CommandContext<'_> {
            CommandContext {
                config: &self.config,
                api_service: &self.api_service,
                channel: &self.channel,
                user: self.user.as_deref(),
            }
        }
    }
}
