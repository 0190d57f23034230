use std::sync::Arc;

use clap::Parser;
use slackbot_config::{ApiDriver, Config};
use slackbot_core::CoreModule;
use slackbot_sentry::with_sentry_configuration;
use slackbot_slackapi_interface::ApiService;
use slackbot_slackapi_null::NullApiService;
use slackbot_slackapi_slack::SlackApiService;
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

#[derive(Parser)]
#[command(about = None, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let sync = |config: Config, args: Args| async move {
            let core_module = CoreModule::builder().build();
            let api_service = Self::build_api_service(&config)?;

            let ctx = CommandContext {
                config: config.clone(),
                core_module,
                api_service,
                writer: Arc::new(RwLock::new(std::io::stdout())),
            };

            with_sentry_configuration(&config.clone(), || async {
                Self::parse_args_async(args, ctx).await
            })
            .await
        };

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        actix_rt::System::with_tokio_rt(move || runtime).block_on(sync(config, args))?;

        Ok(())
    }

    fn build_api_service(config: &Config) -> Result<Box<dyn ApiService>> {
        let api_service: Box<dyn ApiService> = match config.api.driver {
            ApiDriver::Slack => {
                info!("Using SlackApiService API driver");
                Box::new(SlackApiService::new(config.clone())?)
            }
            ApiDriver::Null => {
                info!("Using NullApiService API driver");
                Box::new(NullApiService::new())
            }
        };

        Ok(api_service)
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
