// src/cli/mod.rs
use clap::Parser;
use std::path::PathBuf;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Use JSON output (for scripting)
    #[arg(long)]
    pub json: bool,

    /// History file path
    #[arg(long, env = "HISTORY_FILE")]
    pub history: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// Skip starting the API server
    #[arg(long)]
    pub no_api: bool,

    /// API server port
    #[arg(long)]
    pub api_port: Option<u16>,

    /// Run in API-only mode (no CLI)
    #[arg(long)]
    pub api_only: bool,
}
