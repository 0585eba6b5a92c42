use anyhow::{Context, Result};
use clap::Parser;

use bulletin::api::HttpFeedService;
use bulletin::auth::TokenStore;
use bulletin::cli::Cli;
use bulletin::config::Config;
use bulletin::{logging, tui};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(server) = cli.server {
        config.server.url = server;
    }

    let service = HttpFeedService::new(&config.server.url)
        .with_context(|| format!("Invalid server URL: {}", config.server.url))?;
    let tokens = TokenStore::new(Config::token_path()?);

    tui::run_tui(Box::new(service), tokens)?;
    Ok(())
}
