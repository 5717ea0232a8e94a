use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Amlich Vietnamese lunisolar calendar converter.
#[derive(Parser)]
#[command(
    name = "amlich",
    version,
    about = "Vietnamese lunisolar calendar converter"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to optional TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date to the lunisolar calendar.
    Solar(SolarArgs),
    /// Convert a lunisolar date back to the Gregorian calendar.
    Lunar(LunarArgs),
    /// Print the compact lunar display string for a Gregorian date.
    Display(DisplayArgs),
}

/// Arguments for the `solar` subcommand.
#[derive(clap::Args)]
pub struct SolarArgs {
    /// Gregorian year.
    pub year: i32,

    /// Gregorian month (1-12).
    pub month: u8,

    /// Gregorian day of month.
    pub day: u8,

    /// Time zone offset in hours (overrides config; default UTC+7).
    #[arg(short, long)]
    pub tz: Option<f64>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `lunar` subcommand.
#[derive(clap::Args)]
pub struct LunarArgs {
    /// Lunar year.
    pub year: i32,

    /// Lunar month (1-12).
    pub month: u8,

    /// Lunar day (1-30).
    pub day: u8,

    /// The month is the inserted leap month.
    #[arg(short, long)]
    pub leap: bool,

    /// Time zone offset in hours (overrides config; default UTC+7).
    #[arg(short, long)]
    pub tz: Option<f64>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `display` subcommand.
#[derive(clap::Args)]
pub struct DisplayArgs {
    /// Gregorian year.
    pub year: i32,

    /// Gregorian month (1-12).
    pub month: u8,

    /// Gregorian day of month.
    pub day: u8,
}
