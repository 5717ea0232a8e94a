//! Compact lunar display string with an explicit approximate fallback.

use amlich_julian::GregorianDate;
use tracing::warn;

use crate::convert::solar_to_lunar;
use crate::lunar_date::LunarDate;
use crate::TZ_VIETNAM;

/// JDN of the Unix epoch day 1970-01-01, used by the fallback's
/// epoch-day arithmetic.
const UNIX_EPOCH_JDN: i64 = 2_440_588;

/// Result of a display-oriented lunar lookup.
///
/// `Approximate` is the deliberately inexact fallback used when the
/// astronomical conversion fails; it exists so presentation code never
/// dies, and is not part of the correctness contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LunarDisplay {
    /// Astronomically computed lunar date.
    Exact(LunarDate),
    /// Cheap epoch-modulo approximation of the lunar day and month.
    Approximate {
        /// Approximate lunar day (1..=30).
        day: u8,
        /// Approximate lunar month (1..=12).
        month: u8,
    },
}

impl LunarDisplay {
    /// Renders the compact display string.
    ///
    /// Exact dates render as `D/MM` with an `" (L)"` suffix for leap
    /// months; the fallback renders as zero-padded `DD/MM`.
    pub fn render(&self) -> String {
        match self {
            Self::Exact(lunar) => {
                let suffix = if lunar.leap() { " (L)" } else { "" };
                format!("{}/{:02}{}", lunar.day(), lunar.month(), suffix)
            }
            Self::Approximate { day, month } => format!("{day:02}/{month:02}"),
        }
    }
}

/// Looks up the lunar date for display, substituting the approximate
/// fallback if conversion fails.
pub fn lunar_display(date: GregorianDate, time_zone: f64) -> LunarDisplay {
    match solar_to_lunar(date, time_zone) {
        Ok(lunar) => LunarDisplay::Exact(lunar),
        Err(err) => {
            warn!(
                %err,
                year = date.year(),
                month = date.month(),
                day = date.day(),
                "lunar conversion failed, falling back to approximation"
            );
            let epoch = date.julian_day().get() - UNIX_EPOCH_JDN;
            let day = ((epoch + 40) % 30 + 30) % 30 + 1;
            let month = ((date.month() as i64 - 1 + (epoch / 30) % 12) % 12 + 12) % 12 + 1;
            LunarDisplay::Approximate {
                day: day as u8,
                month: month as u8,
            }
        }
    }
}

/// Renders the compact lunar display string for a Gregorian date at the
/// Vietnamese reference meridian.
pub fn format_lunar_display(date: GregorianDate) -> String {
    lunar_display(date, TZ_VIETNAM).render()
}
