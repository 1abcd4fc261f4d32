use eyre::Result;
use tracing::info;

pub mod commands;
pub mod config;
pub mod handlers;

use commands::Cli;
use config::CliConfig;
use handlers::{HandlerContext, Outcome, handle_command};

/// Run one `slotbook` command with the provided configuration.
///
/// # Returns
///
/// * `Ok(Outcome)` once the command finished, including when the backend
///   refused it (the refusal is in [`Outcome::notices`])
/// * `Err` if the input could not be parsed, no suitable user is configured
///   or the client could not be built
pub async fn run(cli: &Cli, config: CliConfig) -> Result<Outcome> {
    info!(api_url = %config.api_url, zone = %config.zone, "starting slotbook");

    let ctx = HandlerContext::new(config)?;
    handle_command(&ctx, &cli.command).await
}
