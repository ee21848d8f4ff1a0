//! # NMEA Content
//!
//! Strongly-typed values decoded from GGA and RMC sentence bodies, the field
//! parsers that produce them and the two sentence decoders.

pub mod parse;
pub mod sentences;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use sentences::{FixRecord, MotionRecord, Quality, Status, decode_gga, decode_rmc};

/// Local time of day, after the GMT offset has been applied.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    /// Hour (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
    /// Second (0-59)
    pub second: u8,
}

#[cfg(feature = "time")]
impl TimeOfDay {
    /// Converts to a [`time::Time`].
    pub fn to_time(&self) -> Option<time::Time> {
        time::Time::from_hms(self.hour, self.minute, self.second).ok()
    }
}

/// Running calendar-day correction caused by the GMT offset crossing midnight.
///
/// Every successful GGA decode whose local hour wrapped past midnight moves
/// the counter by one day in that direction; it is never reset implicitly.
/// The RMC decoder adds it to the decoded day. The counter is only meaningful
/// when GGA and RMC sentences of the same epoch are decoded in GGA-then-RMC
/// order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DayShift(i32);

impl DayShift {
    /// Creates a counter with the given number of days.
    pub const fn new(days: i32) -> Self {
        Self(days)
    }

    /// Number of days to add to a decoded date.
    pub const fn days(self) -> i32 {
        self.0
    }

    /// Clears the counter.
    pub fn reset(&mut self) {
        self.0 = 0;
    }

    pub(crate) fn apply(&mut self, rollover: i32) {
        self.0 = self.0.saturating_add(rollover);
    }
}

/// Timezone correction applied to every decoded GGA time.
///
/// Encoded as `hours * 100 + minutes`, e.g. `530` for UTC+5:30 or `-100` for
/// UTC-1. Both components carry the sign of the whole offset.
///
/// ```rust
/// use neo7_nmea::GmtOffset;
///
/// let ist = GmtOffset::try_from(530i16).unwrap();
/// assert_eq!((ist.hours(), ist.minutes()), (5, 30));
///
/// let newfoundland = GmtOffset::try_from(-330i16).unwrap();
/// assert_eq!((newfoundland.hours(), newfoundland.minutes()), (-3, -30));
///
/// assert!(GmtOffset::try_from(175i16).is_err());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i16", into = "i16"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GmtOffset(i16);

impl GmtOffset {
    /// UTC itself.
    pub const UTC: Self = Self(0);

    /// Whole hours of the offset.
    pub const fn hours(self) -> i32 {
        self.0 as i32 / 100
    }

    /// Sub-hour minutes of the offset.
    pub const fn minutes(self) -> i32 {
        self.0 as i32 % 100
    }

    /// The raw `hours * 100 + minutes` value.
    pub const fn value(self) -> i16 {
        self.0
    }

    /// Converts to a [`time::UtcOffset`].
    #[cfg(feature = "time")]
    pub fn to_utc_offset(self) -> Option<time::UtcOffset> {
        time::UtcOffset::from_hms(self.hours() as i8, self.minutes() as i8, 0).ok()
    }
}

/// Returned when a GMT offset is outside ±23 hours or its minutes outside ±59.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidOffset(pub i16);

impl fmt::Display for InvalidOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid GMT offset {} (expected hours*100 + minutes)", self.0)
    }
}

impl std::error::Error for InvalidOffset {}

impl TryFrom<i16> for GmtOffset {
    type Error = InvalidOffset;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        let offset = Self(value);
        if offset.hours().abs() > 23 || offset.minutes().abs() > 59 {
            return Err(InvalidOffset(value));
        }

        Ok(offset)
    }
}

impl From<GmtOffset> for i16 {
    fn from(value: GmtOffset) -> Self {
        value.0
    }
}

/// Position in degrees, with the hemisphere indicators kept verbatim.
///
/// Latitude and longitude are magnitudes; the sign is carried by `ns` and
/// `ew`. An empty hemisphere field is stored as `'\0'`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Location {
    /// Latitude in degrees
    pub latitude: f64,
    /// North/South indicator (`'N'` or `'S'`)
    pub ns: char,
    /// Longitude in degrees
    pub longitude: f64,
    /// East/West indicator (`'E'` or `'W'`)
    pub ew: char,
}

impl Location {
    /// Latitude in degrees, negative in the southern hemisphere.
    pub fn signed_latitude(&self) -> f64 {
        if self.ns == 'S' { -self.latitude } else { self.latitude }
    }

    /// Longitude in degrees, negative in the western hemisphere.
    pub fn signed_longitude(&self) -> f64 {
        if self.ew == 'W' { -self.longitude } else { self.longitude }
    }
}

/// Antenna altitude as reported by the receiver.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Altitude {
    /// Altitude above mean sea level
    pub altitude: f32,
    /// Unit indicator, normally `'M'` for meters
    pub unit: char,
}

/// Calendar date of an RMC fix.
///
/// `day` already includes the [`DayShift`] correction and is not range checked:
/// it can read `0` or `32` (or further out if the counter kept growing) with
/// `month` and `year` left as decoded. Use [`Date::is_calendar_day`] to detect
/// this, or `to_date_rolled_over` (feature `time`) to normalize it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    /// Day of the month, shifted by the running day correction
    pub day: i32,
    /// Month (1-12)
    pub month: u8,
    /// Two-digit year
    pub year: u8,
}

impl Date {
    /// Returns `true` if `day` is within 1-31 and `month` within 1-12.
    ///
    /// This does not check month lengths.
    pub fn is_calendar_day(&self) -> bool {
        (1..=31).contains(&self.day) && (1..=12).contains(&self.month)
    }

    /// Full year, mapping `83..=99` to the 1900s and everything else to the
    /// 2000s.
    pub fn full_year(&self) -> i32 {
        match self.year {
            83..=99 => 1900 + i32::from(self.year),
            _ => 2000 + i32::from(self.year),
        }
    }

    /// Converts to a [`time::Date`], or `None` if the shifted day is not a day
    /// of the decoded month.
    #[cfg(feature = "time")]
    pub fn to_date(&self) -> Option<time::Date> {
        let month = time::Month::try_from(self.month).ok()?;
        let day = u8::try_from(self.day).ok()?;

        time::Date::from_calendar_date(self.full_year(), month, day).ok()
    }

    /// Converts to a [`time::Date`], carrying an out-of-range day into the
    /// neighbouring month or year.
    ///
    /// ```rust
    /// use neo7_nmea::Date;
    ///
    /// let date = Date { day: 32, month: 3, year: 94 };
    /// let date = date.to_date_rolled_over().unwrap();
    /// assert_eq!((date.year(), u8::from(date.month()), date.day()), (1994, 4, 1));
    /// ```
    #[cfg(feature = "time")]
    pub fn to_date_rolled_over(&self) -> Option<time::Date> {
        let month = time::Month::try_from(self.month).ok()?;
        let first = time::Date::from_calendar_date(self.full_year(), month, 1).ok()?;

        first.checked_add(time::Duration::days(i64::from(self.day) - 1))
    }
}
