//! `lunar` subcommand: lunisolar -> Gregorian.

use anyhow::Result;
use tracing::debug;

use amlich_lunisolar::{lunar_to_solar, LunarDate};

use crate::cli::LunarArgs;
use crate::config::{resolve_tz, AmlichConfig};

pub fn run(args: LunarArgs, config: &AmlichConfig) -> Result<()> {
    let tz = resolve_tz(args.tz, config);
    let lunar = LunarDate::new(args.day, args.month, args.year, args.leap)?;
    debug!(?lunar, tz, "converting lunar to solar");

    let date = lunar_to_solar(lunar, tz);
    if args.json {
        println!("{}", serde_json::to_string(&date)?);
    } else {
        let leap = if args.leap { " (leap)" } else { "" };
        println!(
            "lunar day {} month {}{} year {} -> {}-{:02}-{:02}",
            args.day,
            args.month,
            leap,
            args.year,
            date.year(),
            date.month(),
            date.day()
        );
    }
    Ok(())
}
