//! # NEO-7 NMEA Decoder
//!
//! This library decodes the two NMEA 0183 sentences a u-blox NEO-7 receiver
//! needs to report a position fix:
//!
//! - `GGA` (fix data): local time, latitude, longitude, fix quality,
//!   satellite count and altitude
//! - `RMC` (recommended minimum): speed, course and date
//!
//! Every decode walks a bounded buffer field by field, reports a typed
//! [`Error`] with a stable [numeric code](Error::code), and leaves the
//! caller's record untouched unless the whole sentence decoded.
//!
//! Fix times are moved by a configurable [`GmtOffset`]. When that moves the
//! time past midnight, the running [`DayShift`] is updated and applied to the
//! next RMC date.
//!
//! ## Usage
//!
//! ```rust
//! use neo7_nmea::{DayShift, FixRecord, GmtOffset, MotionRecord, decode_gga, decode_rmc};
//!
//! let offset = GmtOffset::try_from(200i16).unwrap();
//! let mut day_shift = DayShift::default();
//! let mut fix = FixRecord::default();
//! let mut motion = MotionRecord::default();
//!
//! decode_gga(
//!     b"GPGGA,231519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47",
//!     offset,
//!     &mut day_shift,
//!     &mut fix,
//! )
//! .unwrap();
//! decode_rmc(
//!     b"GPRMC,231519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A",
//!     day_shift,
//!     &mut motion,
//! )
//! .unwrap();
//!
//! assert_eq!(fix.time.hour, 1);
//! assert_eq!(motion.date.day, 24);
//! ```
//!
//! To pull sentences out of a raw byte stream, see [`nmea0183::frame`] and
//! [`GpsDecoder::receive_and_decode`].

pub mod decoder;
pub mod error;
pub mod nmea0183;
pub mod nmea_content;
pub mod parsing;

pub use decoder::{DecoderConfig, GpsData, GpsDecoder};
pub use error::{Error, IResult};
pub use nmea_content::{
    Altitude, Date, DayShift, FixRecord, GmtOffset, InvalidOffset, Location, MotionRecord,
    Quality, Status, TimeOfDay, decode_gga, decode_rmc,
};
pub use nmea0183::{Framer, FramingError, SentenceKind, frame};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
