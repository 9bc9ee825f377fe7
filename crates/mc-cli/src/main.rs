//! Motorcade CLI - seed the vehicle catalog database from CSV spec sheets

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands, LoadArgs};
use commands::common::ExitCode;
use commands::load;

fn main() {
    let cli = Cli::parse();

    // A bare `motorcade` is a plain full load.
    let result = match &cli.command {
        Some(Commands::Load(args)) => load::execute(args, &cli.global),
        None => load::execute(&LoadArgs::default(), &cli.global),
    };

    if let Err(error) = result {
        if let Some(code) = error.downcast_ref::<ExitCode>() {
            std::process::exit(code.0);
        }
        eprintln!("Error: {:#}", error);
        std::process::exit(1);
    }
}
