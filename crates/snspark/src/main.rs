//! snspark CLI - render and relay SNS notifications to Webex rooms

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod fixtures;
mod output;

use cli::{Cli, Commands};
use commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // SPARK_TOKEN and friends may live in a local .env
    dotenvy::dotenv().ok();

    output::set_json_mode(cli.json);

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "snspark={0},snspark_core={0},snspark_notify={0}",
                    log_level
                )
                .into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config_path = cli.config.as_deref();
    let result = match cli.command {
        Commands::Render { input } => render::execute(&input, config_path),
        Commands::Send { input } => send::execute(&input, config_path).await,
        Commands::Selftest { dry_run } => selftest::execute(dry_run, config_path).await,
        Commands::Config(args) => config::execute(args, config_path),
    };

    if let Err(e) = result {
        output::print_error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
