use anyhow::Result;
use clap::Parser;
use tracing::debug;

use atm_cli::settings::init_logger;

fn main() -> Result<()> {
    let log_file = init_logger()?;
    debug!(log_file = %log_file.display(), "Logger initialized");
    let cli = atm_cli::cli::Cli::parse();
    atm_cli::run(cli)?;
    Ok(())
}
