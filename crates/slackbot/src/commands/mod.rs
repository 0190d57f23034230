//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use slackbot_config::Config;
use slackbot_core::CoreModule;
use slackbot_slackapi_interface::ApiService;
use tokio::sync::RwLock;

use self::{server::ServerCommand, sign::SignCommand};
use crate::Result;

mod server;
mod sign;

pub(crate) struct CommandContext {
    pub config: Config,
    pub core_module: CoreModule,
    pub api_service: Box<dyn ApiService>,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Server(ServerCommand),
    Sign(SignCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Server(sub) => sub.execute(ctx).await,
            Self::Sign(sub) => sub.execute(ctx).await,
        }
    }
}
