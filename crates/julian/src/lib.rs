//! # amlich-julian
//!
//! Julian day numbers and proleptic Gregorian dates.
//!
//! The Julian day number (JDN) is a continuous count of days used as the
//! calendar-agnostic integer timeline that the lunisolar conversion is
//! built on. Conversion in both directions uses the standard arithmetic
//! formula, including the pre-reform Julian-calendar branch below JDN
//! 2299161, so the behavior matches the reference algorithm over the
//! whole historical range.
//!
//! ## Quick Start
//!
//! ```ignore
//! use amlich_julian::{GregorianDate, JulianDay};
//!
//! let date = GregorianDate::new(2000, 1, 1).unwrap();
//! assert_eq!(date.julian_day(), JulianDay::new(2_451_545));
//! assert_eq!(GregorianDate::from_julian_day(date.julian_day()), date);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `day` | Julian day number newtype |
//! | `gregorian` | Validated Gregorian date and JDN conversions |
//! | `error` | Error types |

mod day;
mod error;
mod gregorian;

pub use day::JulianDay;
pub use error::DateError;
pub use gregorian::GregorianDate;
