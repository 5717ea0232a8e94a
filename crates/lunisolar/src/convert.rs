//! Gregorian <-> lunisolar conversion.

use amlich_astro::{new_moon_day, NEW_MOON_EPOCH, SYNODIC_MONTH};
use amlich_julian::{GregorianDate, JulianDay};
use tracing::debug;

use crate::anchor::month11_new_moon;
use crate::error::LunisolarError;
use crate::leap::leap_month_offset;
use crate::lunar_date::LunarDate;

/// Converts a Gregorian date to the lunisolar date it falls on.
///
/// # Errors
///
/// Returns [`LunisolarError::OutOfRange`] if the computed lunar day or
/// month falls outside its valid range, which only happens when the
/// input is far outside the multi-century span the astronomical series
/// are accurate over.
pub fn solar_to_lunar(date: GregorianDate, time_zone: f64) -> Result<LunarDate, LunisolarError> {
    let day_number = date.julian_day();
    let jd = day_number.get();

    // New moon starting the lunar month that contains `date`.
    let k = ((jd as f64 - NEW_MOON_EPOCH) / SYNODIC_MONTH).floor() as i64;
    let mut month_start = new_moon_day(k + 1, time_zone);
    if month_start > day_number {
        month_start = new_moon_day(k, time_zone);
    }

    let (a11, b11, provisional_year) = bracket_anchors(date.year(), month_start, time_zone);
    debug!(
        a11 = a11.get(),
        b11 = b11.get(),
        month_start = month_start.get(),
        "anchors resolved"
    );

    let diff = (month_start.days_since(a11) as f64 / 29.0).floor() as i64;
    let (month, leap) = resolve_month(diff, a11, b11, time_zone);

    // Months 11 and 12 at the head of the bracketed span belong to the
    // lunar year that ends at this span's first anchor.
    let year = if month >= 11 && diff < 4 {
        provisional_year - 1
    } else {
        provisional_year
    };
    let day = jd - month_start.get() + 1;

    if !(1..=30).contains(&day) || !(1..=12).contains(&month) {
        return Err(LunisolarError::OutOfRange { jdn: jd });
    }
    Ok(LunarDate::from_parts(day as u8, month as u8, year, leap))
}

/// Resolves the month-11 anchors bracketing `month_start` and the
/// provisional lunar year of the bracketed span.
fn bracket_anchors(
    year: i32,
    month_start: JulianDay,
    time_zone: f64,
) -> (JulianDay, JulianDay, i32) {
    let a11 = month11_new_moon(year, time_zone);
    if a11 >= month_start {
        (month11_new_moon(year - 1, time_zone), a11, year)
    } else {
        (a11, month11_new_moon(year + 1, time_zone), year + 1)
    }
}

/// Derives the month ordinal and leap flag from the lunation offset
/// between the month start and the first anchor.
fn resolve_month(diff: i64, a11: JulianDay, b11: JulianDay, time_zone: f64) -> (i64, bool) {
    let mut month = diff + 11;
    let mut leap = false;
    if b11.days_since(a11) > 365 {
        let leap_offset = leap_month_offset(a11, time_zone);
        if diff >= leap_offset {
            month = diff + 10;
            if diff == leap_offset {
                leap = true;
            }
        }
    }
    if month > 12 {
        month -= 12;
    }
    (month, leap)
}

/// Converts a lunisolar date back to the unique Gregorian date it
/// denotes.
///
/// Total over validated [`LunarDate`] values: a lunar day that does not
/// exist in the named month (a 30th day of a 29-day month, or a leap
/// flag on a month that is not inserted that year) resolves into the
/// following month rather than being rejected.
pub fn lunar_to_solar(lunar: LunarDate, time_zone: f64) -> GregorianDate {
    // Months 11 and 12 of lunar year Y start at or after the month-11
    // anchor of Gregorian year Y; months 1..10 hang off the previous
    // year's anchor.
    let (a11, b11) = if lunar.month() < 11 {
        (
            month11_new_moon(lunar.year() - 1, time_zone),
            month11_new_moon(lunar.year(), time_zone),
        )
    } else {
        (
            month11_new_moon(lunar.year(), time_zone),
            month11_new_moon(lunar.year() + 1, time_zone),
        )
    };

    let k = (0.5 + (a11.get() as f64 - NEW_MOON_EPOCH) / SYNODIC_MONTH).floor() as i64;
    let mut off = lunar.month() as i64 - 11;
    if off < 0 {
        off += 12;
    }
    if b11.days_since(a11) > 365 {
        let leap_off = leap_month_offset(a11, time_zone);
        // The inserted month sits one lunation after its common twin;
        // later common months skip over it.
        if lunar.leap() || off >= leap_off {
            off += 1;
        }
    }

    let month_start = new_moon_day(k + off, time_zone);
    GregorianDate::from_julian_day(month_start.add_days(lunar.day() as i64 - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TZ_VIETNAM;

    fn solar(year: i32, month: u8, day: u8) -> GregorianDate {
        GregorianDate::new(year, month, day).unwrap()
    }

    #[test]
    fn tet_2024() {
        let lunar = solar_to_lunar(solar(2024, 2, 10), TZ_VIETNAM).unwrap();
        assert_eq!(lunar, LunarDate::new(1, 1, 2024, false).unwrap());
    }

    #[test]
    fn mid_month_day_offset() {
        // Full moon festival: lunar 15/01/2024 is 2024-02-24.
        let lunar = solar_to_lunar(solar(2024, 2, 24), TZ_VIETNAM).unwrap();
        assert_eq!(lunar, LunarDate::new(15, 1, 2024, false).unwrap());
    }

    #[test]
    fn leap_month_2023() {
        // Leap month 2 of 2023 started 2023-03-22.
        let lunar = solar_to_lunar(solar(2023, 3, 25), TZ_VIETNAM).unwrap();
        assert_eq!(lunar, LunarDate::new(4, 2, 2023, true).unwrap());
    }

    #[test]
    fn common_month_before_leap_not_flagged() {
        // 2023-03-01 is in common month 2 of 2023 (started 2023-02-20).
        let lunar = solar_to_lunar(solar(2023, 3, 1), TZ_VIETNAM).unwrap();
        assert_eq!(lunar, LunarDate::new(10, 2, 2023, false).unwrap());
    }

    #[test]
    fn december_month_12_keeps_lunar_year() {
        // 2022-12-28 sits in lunar month 12 of 2022, which started
        // 2022-12-23 -- after the 2022 month-11 anchor.
        let lunar = solar_to_lunar(solar(2022, 12, 28), TZ_VIETNAM).unwrap();
        assert_eq!(lunar, LunarDate::new(6, 12, 2022, false).unwrap());
        assert_eq!(lunar_to_solar(lunar, TZ_VIETNAM), solar(2022, 12, 28));
    }

    #[test]
    fn january_month_12_belongs_to_previous_lunar_year() {
        // 2024-01-15 is in lunar month 12 of 2023.
        let lunar = solar_to_lunar(solar(2024, 1, 15), TZ_VIETNAM).unwrap();
        assert_eq!(lunar.month(), 12);
        assert_eq!(lunar.year(), 2023);
    }

    #[test]
    fn month_11_year_assignment() {
        // 2022-12-01 is in lunar month 11 of 2022 (anchor 2022-11-24).
        let lunar = solar_to_lunar(solar(2022, 12, 1), TZ_VIETNAM).unwrap();
        assert_eq!(lunar, LunarDate::new(8, 11, 2022, false).unwrap());
    }

    #[test]
    fn lunar_to_solar_tet_dates() {
        let cases: &[(i32, (i32, u8, u8))] = &[
            (2019, (2019, 2, 5)),
            (2020, (2020, 1, 25)),
            (2021, (2021, 2, 12)),
            (2022, (2022, 2, 1)),
            (2023, (2023, 1, 22)),
            (2024, (2024, 2, 10)),
        ];
        for &(lunar_year, (y, m, d)) in cases {
            let tet = LunarDate::new(1, 1, lunar_year, false).unwrap();
            assert_eq!(
                lunar_to_solar(tet, TZ_VIETNAM),
                solar(y, m, d),
                "Tet of lunar year {lunar_year}"
            );
        }
    }

    #[test]
    fn leap_month_roundtrip() {
        let leap = LunarDate::new(4, 2, 2023, true).unwrap();
        assert_eq!(lunar_to_solar(leap, TZ_VIETNAM), solar(2023, 3, 25));
        let common = LunarDate::new(4, 2, 2023, false).unwrap();
        assert_eq!(lunar_to_solar(common, TZ_VIETNAM), solar(2023, 2, 23));
    }

    #[test]
    fn custom_time_zone_roundtrip() {
        // The engine threads the offset through every computation; a
        // different meridian must still round-trip.
        for tz in [0.0, 8.0] {
            let date = solar(2024, 6, 30);
            let lunar = solar_to_lunar(date, tz).unwrap();
            assert_eq!(lunar_to_solar(lunar, tz), date, "tz {tz}");
        }
    }
}
