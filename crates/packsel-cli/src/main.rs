//! Packsel CLI - Command-line utility for selective project archiving.

mod cli;
mod error;
mod output;
mod progress;
mod run;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let formatter = output::formatter_for(&args);

    run::execute(&args, &*formatter)
}
