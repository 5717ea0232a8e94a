//! Sun ecliptic longitude and the twelve solar-term sectors.

use std::f64::consts::PI;

use amlich_julian::JulianDay;

use crate::angle::normalize_radians;

/// Returns the sun's ecliptic longitude in radians, normalized to
/// [0, 2π), at local midnight opening the given day in the given time
/// zone.
///
/// Truncated series: mean longitude plus the equation-of-center
/// correction in up to three multiples of the mean anomaly.
pub fn sun_longitude(jd: JulianDay, time_zone: f64) -> f64 {
    let t = (jd.get() as f64 - 2_451_545.5 - time_zone / 24.0) / 36_525.0;
    let t2 = t * t;
    let dr = PI / 180.0;

    let m = 357.52910 + 35_999.05030 * t - 0.0001559 * t2 - 0.00000048 * t * t2;
    let l0 = 280.46645 + 36_000.76983 * t + 0.0003032 * t2;
    let mut dl = (1.914600 - 0.004817 * t - 0.000014 * t2) * (m * dr).sin();
    dl += (0.019993 - 0.000101 * t) * (2.0 * m * dr).sin() + 0.000290 * (3.0 * m * dr).sin();

    normalize_radians((l0 + dl) * dr)
}

/// Returns the 30-degree sector (0..=11) containing the sun's ecliptic
/// longitude at the given day.
///
/// Sector 0 starts at the March equinox (longitude 0), so the December
/// solstice (longitude 270) opens sector 9. The lunisolar conversion
/// only ever compares sectors, never raw longitudes.
pub fn sun_longitude_sector(jd: JulianDay, time_zone: f64) -> u8 {
    (sun_longitude(jd, time_zone) / PI * 180.0 / 30.0).floor() as u8
}
