//! `solar` subcommand: Gregorian -> lunisolar.

use anyhow::Result;
use tracing::debug;

use amlich_julian::GregorianDate;
use amlich_lunisolar::solar_to_lunar;

use crate::cli::SolarArgs;
use crate::config::{resolve_tz, AmlichConfig};

pub fn run(args: SolarArgs, config: &AmlichConfig) -> Result<()> {
    let tz = resolve_tz(args.tz, config);
    let date = GregorianDate::new(args.year, args.month, args.day)?;
    debug!(?date, tz, "converting solar to lunar");

    let lunar = solar_to_lunar(date, tz)?;
    if args.json {
        println!("{}", serde_json::to_string(&lunar)?);
    } else {
        let leap = if lunar.leap() { " (leap)" } else { "" };
        println!(
            "{}-{:02}-{:02} -> lunar day {} month {}{} year {}",
            args.year,
            args.month,
            args.day,
            lunar.day(),
            lunar.month(),
            leap,
            lunar.year()
        );
    }
    Ok(())
}
