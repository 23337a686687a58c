use std::path::Path;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use passgen::cli::{self, Args, CliCommand};
use passgen::clipboard::SystemClipboard;
use passgen::core::config::Config;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    let log_level = args
        .log_level
        .as_deref()
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(config.log_level);

    // Logs go to stderr so stdout only carries passwords
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .target(env_logger::Target::Stderr)
        .init();

    log::debug!("Loaded config: {:?}", config);

    let mut clipboard = SystemClipboard::new();

    match args.command {
        Some(CliCommand::Generate(generate)) => {
            let stdout = std::io::stdout();
            cli::handlers::handle_generate(&generate, &config, &mut stdout.lock(), &mut clipboard)
                .context("password generation failed")?;
        }
        Some(CliCommand::Interactive) | None => {
            cli::menu::run_cli_menu(&config, &mut clipboard).context("interactive session failed")?;
        }
    }

    Ok(())
}
