//! New moon timing from a truncated periodic series.

use std::f64::consts::PI;

use amlich_julian::JulianDay;

/// Mean length of the synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530588853;

/// Fractional Julian day of the reference new moon (January 1900) that
/// the lunation index `k` counts from.
pub const NEW_MOON_EPOCH: f64 = 2_415_021.076998695;

/// Returns the fractional Julian day of the k-th new moon after the
/// January 1900 reference lunation.
///
/// Mean lunation plus periodic corrections in the solar mean anomaly
/// `m`, the lunar mean anomaly `mpr`, and the lunar argument of latitude
/// `f`, with a delta-T adjustment for the drift of terrestrial time.
pub fn new_moon_time(k: i64) -> f64 {
    let kf = k as f64;
    let t = kf / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let dr = PI / 180.0;

    let mut jd1 = 2_415_020.75933 + 29.53058868 * kf + 0.0001178 * t2 - 0.000000155 * t3;
    jd1 += 0.00033 * ((166.56 + 132.87 * t - 0.009173 * t2) * dr).sin();

    let m = 359.2242 + 29.10535608 * kf - 0.0000333 * t2 - 0.00000347 * t3;
    let mpr = 306.0253 + 385.81691806 * kf + 0.0107306 * t2 + 0.00001236 * t3;
    let f = 21.2964 + 390.67050646 * kf - 0.0016528 * t2 - 0.00000239 * t3;

    let mut c1 = (0.1734 - 0.000393 * t) * (m * dr).sin() + 0.0021 * (2.0 * m * dr).sin()
        - 0.4068 * (mpr * dr).sin();
    c1 += 0.0161 * (2.0 * mpr * dr).sin() - 0.0004 * (3.0 * mpr * dr).sin();
    c1 += 0.0104 * (2.0 * f * dr).sin()
        - 0.0051 * ((m + mpr) * dr).sin()
        - 0.0074 * ((m - mpr) * dr).sin();
    c1 += 0.0004 * ((2.0 * f + m) * dr).sin() - 0.0004 * ((2.0 * f - m) * dr).sin();
    c1 += 0.0006 * ((2.0 * f + mpr) * dr).sin()
        - 0.0010 * ((2.0 * f - mpr) * dr).sin()
        - 0.0005 * ((2.0 * mpr + m) * dr).sin();

    let delta_t = if t < -11.0 {
        0.001 + 0.000839 * t + 0.0002261 * t2 - 0.00000845 * t3 - 0.000000081 * t * t3
    } else {
        -0.000278 + 0.000265 * t + 0.000262 * t2
    };

    jd1 + c1 - delta_t
}

/// Returns the local calendar day on which the k-th new moon falls, for
/// the given time zone offset in hours.
pub fn new_moon_day(k: i64, time_zone: f64) -> JulianDay {
    JulianDay::new((new_moon_time(k) + 0.5 + time_zone / 24.0).floor() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TZ: f64 = 7.0;

    #[test]
    fn reference_lunation() {
        // k = 0 is the new moon of January 1900; in UTC+7 it falls on
        // JDN 2415021 (1900-01-01).
        assert_eq!(new_moon_day(0, TZ).get(), 2_415_021);
    }

    #[test]
    fn epoch_constant_matches_series() {
        assert!((new_moon_time(0) - NEW_MOON_EPOCH).abs() < 0.01);
    }

    #[test]
    fn tet_2024_new_moon() {
        // Lunar New Year 2024 fell on 2024-02-10 (JDN 2460351).
        let k = ((2_460_351.0 - NEW_MOON_EPOCH) / SYNODIC_MONTH).round() as i64;
        assert_eq!(new_moon_day(k, TZ).get(), 2_460_351);
    }

    #[test]
    fn consecutive_lunations_are_29_or_30_days() {
        for k in -1200..1200 {
            let len = new_moon_day(k + 1, TZ).days_since(new_moon_day(k, TZ));
            assert!(
                len == 29 || len == 30,
                "lunation {k} has length {len} days"
            );
        }
    }

    #[test]
    fn mean_lunation_tracks_synodic_month() {
        let n = 1236;
        let span = new_moon_time(n) - new_moon_time(0);
        let mean = span / n as f64;
        assert!(
            (mean - SYNODIC_MONTH).abs() < 0.002,
            "mean lunation {mean} drifted from {SYNODIC_MONTH}"
        );
    }
}
