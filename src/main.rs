//! xspfconv - Convert URL lists and aria2 input lists to XSPF playlists

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::commands::{self, InputFormat};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stderr keeps `--stdout` output clean
    let filter = if cli.verbose {
        "xspfconv=debug"
    } else {
        "xspfconv=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Urls { args } => commands::convert(InputFormat::Urls, args)?,
        Commands::Json { args } => commands::convert(InputFormat::Json, args)?,
        Commands::Aria2 { args } => commands::convert(InputFormat::Aria2, args)?,
        Commands::Config {
            title,
            output_dir,
            reset,
        } => {
            commands::config(title, output_dir, reset)?;
        }
        Commands::Completion { shell } => {
            commands::completion(shell);
        }
    }

    Ok(())
}
