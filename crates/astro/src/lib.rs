//! # amlich-astro
//!
//! Astronomical approximations for the lunisolar calendar: the time of
//! the k-th new moon since the January 1900 reference lunation, and the
//! sun's ecliptic longitude bucketed into the twelve 30-degree sectors
//! that anchor the solar terms.
//!
//! Every function here is pure and total: a finite input always yields a
//! finite output, with no error cases. Accuracy degrades slowly outside
//! the multi-century civil range the truncated series were fitted for.

mod angle;
mod new_moon;
mod sun;

pub use new_moon::{new_moon_day, new_moon_time, NEW_MOON_EPOCH, SYNODIC_MONTH};
pub use sun::{sun_longitude, sun_longitude_sector};
