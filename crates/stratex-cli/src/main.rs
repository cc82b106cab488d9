//! Stratex CLI - Extract strategic initiatives from documents with a local LLM.

use clap::Parser;
use stratex_cli::commands;
use stratex_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> stratex_cli::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Analyze(args) => {
            commands::execute_analyze(args, &config, &formatter).await?;
        }
        Command::Chunks(args) => {
            commands::execute_chunks(args, &config, &formatter).await?;
        }
        Command::Config(args) => {
            commands::execute_config(args, &config, cli.config.as_deref(), &formatter).await?;
        }
    }

    Ok(())
}
