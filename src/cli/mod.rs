// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::{CliCommand, GenerateArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate random passwords from selected character classes", long_about = None)]
pub struct Args {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Command to execute; without one the interactive form opens
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
