//! Month-11 anchor: the new moon starting the lunar month that contains
//! the December solstice.

use amlich_astro::{new_moon_day, sun_longitude_sector, SYNODIC_MONTH};
use amlich_julian::{GregorianDate, JulianDay};
use tracing::debug;

/// Sector index of the December solstice (ecliptic longitude 270).
const SOLSTICE_SECTOR: u8 = 9;

/// Integer epoch day of the January 1900 reference new moon.
const EPOCH_DAY: i64 = 2_415_021;

/// Returns the day of the new moon that starts lunar month 11 of the
/// given Gregorian year.
///
/// Estimates the lunation index from the days between the 1900 epoch
/// and December 31 of `year`, then steps back one synodic month if the
/// solstice has already passed at that new moon (sector >= 9).
pub(crate) fn month11_new_moon(year: i32, time_zone: f64) -> JulianDay {
    let dec31 = GregorianDate::new(year, 12, 31)
        .expect("December 31 is always a valid date")
        .julian_day();
    let off = dec31.get() - EPOCH_DAY;
    let k = (off as f64 / SYNODIC_MONTH).floor() as i64;
    let nm = new_moon_day(k, time_zone);
    if sun_longitude_sector(nm, time_zone) >= SOLSTICE_SECTOR {
        let stepped = new_moon_day(k - 1, time_zone);
        debug!(
            year,
            nm = nm.get(),
            stepped = stepped.get(),
            "solstice already passed, stepping back one lunation"
        );
        stepped
    } else {
        nm
    }
}
