use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::validate::validate_bank_name;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Optional path to a settings JSON file, instead of the platform config directory
    #[arg(short, long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive ATM (default)
    Run,

    /// List the banks offered by the ATM
    Banks,

    /// Configure the CLI
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Bank offered on the selection screen, repeat for several banks (e.g: --bank "Cairo Bank")
    #[arg(short, long = "bank", value_name = "NAME", required = true, value_parser = validate_bank_name)]
    pub banks: Vec<String>,
}
