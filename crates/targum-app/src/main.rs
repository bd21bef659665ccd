use std::io;

use anyhow::Context;
use clap::Parser;
use targum_config::Config;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod commands;
pub mod state;


use self::cli::Cli;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to load .env: {e}");
        }
    }

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = load_config(&cli)?;
    let state = AppState::new(config);

    let mut stdout = io::stdout().lock();
    commands::dispatch(&state, cli.command, &mut stdout).await
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Config file (or env defaults), then command-line overrides
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path).context("Failed to load config")?,
        None => Config::new(),
    };

    if let Some(language) = cli.language {
        config.ui.language = language;
    }
    config
        .dictionary
        .additional_paths
        .extend(cli.dictionaries.iter().cloned());

    Ok(config)
}
