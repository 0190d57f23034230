use async_trait::async_trait;
use clap::Parser;
use slackbot_crypto::SlackSignature;

use super::{Command, CommandContext};
use crate::Result;

/// Compute the Slack signature header for a request body, using the configured signing secret
#[derive(Parser)]
pub(crate) struct SignCommand {
    /// Request timestamp (unix seconds)
    #[arg(long)]
    timestamp: i64,
    /// Raw request body
    #[arg(long)]
    body: String,
}

#[async_trait]
impl Command for SignCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let signature = SlackSignature::compute(
            &self.timestamp.to_string(),
            self.body.as_bytes(),
            &ctx.config.server.signing_secret,
        )?;

        writeln!(ctx.writer.write().await, "{}", signature)?;

        Ok(())
    }
}
