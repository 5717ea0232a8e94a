//! # amlich-lunisolar
//!
//! Bidirectional conversion between proleptic Gregorian dates and the
//! traditional Vietnamese lunisolar calendar, computed from first
//! principles (new-moon timing and solar ecliptic longitude) rather
//! than a lookup table.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["GregorianDate"] -->|"solar_to_lunar()"| B["LunarDate"]
//!     B -->|"lunar_to_solar()"| A
//!     A -->|"lunar_display()"| C["LunarDisplay"]
//!     D["month11_new_moon()"] --> B
//!     E["leap_month_offset()"] --> B
//! ```
//!
//! Every lunar month starts on an astronomically computed new moon, and
//! every lunar year is anchored on the new moon that starts the month
//! containing the December solstice (month 11). A lunar year with 13
//! new moons between consecutive month-11 anchors carries one inserted
//! leap month, identified as the first month whose sun-longitude sector
//! does not advance past a major solar term.
//!
//! ## Quick Start
//!
//! ```ignore
//! use amlich_julian::GregorianDate;
//! use amlich_lunisolar::{solar_to_lunar, lunar_to_solar, TZ_VIETNAM};
//!
//! let tet = GregorianDate::new(2024, 2, 10).unwrap();
//! let lunar = solar_to_lunar(tet, TZ_VIETNAM).unwrap();
//! assert_eq!((lunar.day(), lunar.month(), lunar.year()), (1, 1, 2024));
//! assert_eq!(lunar_to_solar(lunar, TZ_VIETNAM), tet);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `lunar_date` | Validated lunisolar date value type |
//! | `anchor` | Month-11 (winter-solstice month) anchor resolver |
//! | `leap` | Leap month detection |
//! | `convert` | Gregorian <-> lunisolar conversion |
//! | `display` | Compact display string with approximate fallback |
//! | `error` | Error types |

mod anchor;
mod convert;
mod display;
mod error;
mod leap;
mod lunar_date;

pub use convert::{lunar_to_solar, solar_to_lunar};
pub use display::{format_lunar_display, lunar_display, LunarDisplay};
pub use error::LunisolarError;
pub use lunar_date::LunarDate;

/// Time zone offset of the Vietnamese civil lunisolar convention
/// (UTC+7), in hours.
pub const TZ_VIETNAM: f64 = 7.0;
