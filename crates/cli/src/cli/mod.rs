//! CLI module for Coinfolio
//!
//! Uses clap for argument parsing with a structured command pattern:
//! one module per subcommand under `commands/`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use commands::alarm::AlarmArgs;
use commands::add::AddArgs;
use commands::remove::RemoveArgs;

/// Default portfolio file, relative to the working directory.
pub const DEFAULT_PORTFOLIO_FILE: &str = "portfolio.json";

#[derive(Parser)]
#[command(name = "coinfolio")]
#[command(version)]
#[command(about = "Track a crypto portfolio and price alarms from the command line", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Portfolio file path
    #[arg(long, global = true, default_value = DEFAULT_PORTFOLIO_FILE)]
    pub file: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a coin to your portfolio (e.g., BTCUSDT)
    Add(AddArgs),

    /// List coins in the portfolio with live prices
    List,

    /// Remove a coin from the portfolio
    Remove(RemoveArgs),

    /// Set a price alarm for a coin
    Alarm(AlarmArgs),

    /// Save the portfolio to the config file
    Save,

    /// Check all set alarms against live prices
    Alarms,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Add(args) => commands::add::execute(&self.file, args),
            Commands::List => commands::list::execute(&self.file).await,
            Commands::Remove(args) => commands::remove::execute(&self.file, args),
            Commands::Alarm(args) => commands::alarm::execute(&self.file, args),
            Commands::Save => commands::save::execute(&self.file),
            Commands::Alarms => commands::alarms::execute(&self.file).await,
        }
    }
}
