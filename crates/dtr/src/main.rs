//! Descriptor Registry - Entry Point

// Force-link dtr-providers to ensure linkme registrations are included
extern crate dtr_providers;

use clap::Parser;
use dtr::cli::{Cli, execute, load_config};
use dtr_infrastructure::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.logging)?;

    let mut stdout = std::io::stdout().lock();
    execute(cli.command, config, &mut stdout).await
}
