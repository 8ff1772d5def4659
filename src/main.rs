//! mrclog - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use mrclog::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::init_logging(cli.verbose);
    commands::plot::handle(&cli)
}
