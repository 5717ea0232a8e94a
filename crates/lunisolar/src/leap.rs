//! Leap month detection.

use amlich_astro::{new_moon_day, sun_longitude_sector, NEW_MOON_EPOCH, SYNODIC_MONTH};
use amlich_julian::JulianDay;
use tracing::debug;

/// Hard cap on the month-by-month scan: one synodic month past a full
/// lunar year. A real inserted leap month always matches well inside
/// the cap for any date in the supported range; hitting it returns the
/// cap-derived offset instead of looping.
const SCAN_CAP: i64 = 14;

/// Returns the offset (in lunations from the month-11 anchor `a11`) of
/// the inserted leap month.
///
/// Scans consecutive new moons comparing sun-longitude sectors; the
/// first month whose sector repeats the previous month's contains no
/// major solar term, which marks it as the leap month.
///
/// Only meaningful when the lunar year spanning `a11` has 13 months,
/// i.e. the gap to the next month-11 anchor exceeds 365 days.
pub(crate) fn leap_month_offset(a11: JulianDay, time_zone: f64) -> i64 {
    let k = (0.5 + (a11.get() as f64 - NEW_MOON_EPOCH) / SYNODIC_MONTH).floor() as i64;
    let mut i = 1;
    let mut arc = sun_longitude_sector(new_moon_day(k + i, time_zone), time_zone);
    loop {
        let last = arc;
        i += 1;
        arc = sun_longitude_sector(new_moon_day(k + i, time_zone), time_zone);
        if arc == last || i >= SCAN_CAP {
            break;
        }
    }
    debug!(a11 = a11.get(), offset = i - 1, "leap month offset resolved");
    i - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::month11_new_moon;

    const TZ: f64 = 7.0;

    fn is_thirteen_month_year(a11: JulianDay, b11: JulianDay) -> bool {
        b11.days_since(a11) > 365
    }

    #[test]
    fn leap_2023_is_month_2() {
        // The lunar year 2023 (Quy Mao) inserts leap month 2. From the
        // 2022 anchor the offsets run 11, 12, 1, 2, leap 2, so the leap
        // month sits 4 lunations after the anchor.
        let a11 = month11_new_moon(2022, TZ);
        let b11 = month11_new_moon(2023, TZ);
        assert!(is_thirteen_month_year(a11, b11));
        assert_eq!(leap_month_offset(a11, TZ), 4);
    }

    #[test]
    fn leap_2014_is_month_9() {
        // The lunar year 2014 (Giap Ngo) inserts leap month 9: offset 11
        // lunations after the 2013 anchor.
        let a11 = month11_new_moon(2013, TZ);
        let b11 = month11_new_moon(2014, TZ);
        assert!(is_thirteen_month_year(a11, b11));
        assert_eq!(leap_month_offset(a11, TZ), 11);
    }

    #[test]
    fn leap_2020_is_month_4() {
        // The lunar year 2020 (Canh Ty) inserts leap month 4: offset 6
        // lunations after the 2019 anchor.
        let a11 = month11_new_moon(2019, TZ);
        let b11 = month11_new_moon(2020, TZ);
        assert!(is_thirteen_month_year(a11, b11));
        assert_eq!(leap_month_offset(a11, TZ), 6);
    }

    #[test]
    fn offset_bounded_for_all_thirteen_month_years() {
        for year in 1900..2100 {
            let a11 = month11_new_moon(year, TZ);
            let b11 = month11_new_moon(year + 1, TZ);
            if is_thirteen_month_year(a11, b11) {
                let off = leap_month_offset(a11, TZ);
                assert!(
                    (1..SCAN_CAP).contains(&off),
                    "leap offset {off} out of bounds for anchor year {year}"
                );
            }
        }
    }

    #[test]
    fn thirteen_month_years_follow_metonic_density() {
        // Roughly 7 leap years per 19-year cycle.
        let count = (2000..2019)
            .filter(|&y| {
                is_thirteen_month_year(month11_new_moon(y, TZ), month11_new_moon(y + 1, TZ))
            })
            .count();
        assert_eq!(count, 7, "expected 7 thirteen-month years in 2000-2018");
    }
}
