mod cli;
mod config;
mod display_cmd;
mod logging;
mod lunar_cmd;
mod solar_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::AmlichConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => AmlichConfig::load(path)?,
        None => AmlichConfig::default(),
    };

    match cli.command {
        Command::Solar(args) => solar_cmd::run(args, &config),
        Command::Lunar(args) => lunar_cmd::run(args, &config),
        Command::Display(args) => display_cmd::run(args, &config),
    }
}
