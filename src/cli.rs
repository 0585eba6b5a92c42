use std::path::PathBuf;

use clap::Parser;

/// Terminal dashboard for a bulletin feed server.
#[derive(Debug, Parser)]
#[command(name = "bulletin", version, about)]
pub struct Cli {
    /// Base URL of the feed server (overrides the config file)
    #[arg(short, long, env = "BULLETIN_SERVER")]
    pub server: Option<String>,

    /// Enable verbose (DEBUG) logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Write structured logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
