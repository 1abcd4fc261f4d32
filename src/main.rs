use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::Result;
use dotenv::dotenv;
use slotbook_cli::{commands::Cli, config::CliConfig};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize error handling
    color_eyre::install()?;

    let cli = Cli::parse();

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = CliConfig::from_env()?;

    // Initialize logging; stdout is reserved for command output
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let outcome = slotbook_cli::run(&cli, config).await?;
    print!("{}", outcome.render(cli.format)?);

    if outcome.has_errors() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
