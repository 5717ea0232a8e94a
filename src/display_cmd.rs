//! `display` subcommand: compact lunar display string.

use anyhow::Result;

use amlich_julian::GregorianDate;
use amlich_lunisolar::lunar_display;

use crate::cli::DisplayArgs;
use crate::config::{resolve_tz, AmlichConfig};

pub fn run(args: DisplayArgs, config: &AmlichConfig) -> Result<()> {
    let tz = resolve_tz(None, config);
    let date = GregorianDate::new(args.year, args.month, args.day)?;
    println!("{}", lunar_display(date, tz).render());
    Ok(())
}
