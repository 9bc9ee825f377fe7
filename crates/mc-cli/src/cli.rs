//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// Motorcade - seed the vehicle catalog database from CSV spec sheets
#[derive(Parser, Debug)]
#[command(name = "motorcade")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute (defaults to `load`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override database path (file path or :memory:)
    #[arg(short, long, global = true)]
    pub database: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Wipe and reseed the catalog database from the CSV corpus
    Load(LoadArgs),
}

/// Arguments for the load command
#[derive(Args, Debug, Default)]
pub struct LoadArgs {
    /// Override the CSV input directory
    #[arg(short, long)]
    pub input: Option<String>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
