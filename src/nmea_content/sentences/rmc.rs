use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    nmea_content::{
        Date, DayShift, Status,
        parse::{date, optional_decimal_value},
    },
    parsing::Tokenizer,
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 11
///         |         | |       | |        |  |   |   |    |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a*hh<CR><LF>
/// ```
///
/// Only fields 2, 7, 8 and 9 are decoded; position and time come from GGA.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MotionRecord {
    /// Fix date, shifted by the running day correction
    pub date: Date,
    /// Speed over ground in knots, `0.0` when the receiver left it empty
    pub speed: f32,
    /// Course over ground in degrees, `0.0` when the receiver left it empty
    pub course: f32,
    /// `true` when the status indicator is `A`
    pub is_valid: bool,
}

/// Decodes an RMC sentence body into `record`.
///
/// `sentence` holds everything from the sentence type onwards (whatever
/// precedes the first comma is ignored), and its length is the bound no field
/// walk crosses. `day_shift` is added to the decoded day; pass the counter
/// updated by the GGA decode of the same epoch.
///
/// `record` is only written on success, with one exception: a status other
/// than `A` clears [`MotionRecord::is_valid`], leaves every other field as it
/// was and returns [`Error::InvalidData`].
///
/// # Examples
///
/// ```rust
/// use neo7_nmea::{DayShift, MotionRecord, decode_rmc};
///
/// let mut record = MotionRecord::default();
///
/// decode_rmc(
///     b"GPRMC,123519,A,4807.038,N,01131.000,E,,,230394,003.1,W*6A",
///     DayShift::new(1),
///     &mut record,
/// )?;
///
/// assert!(record.is_valid);
/// assert_eq!((record.speed, record.course), (0.0, 0.0));
/// assert_eq!((record.date.day, record.date.month, record.date.year), (24, 3, 94));
/// # Ok::<(), neo7_nmea::Error<&'static [u8]>>(())
/// ```
pub fn decode_rmc<'a>(
    sentence: &'a [u8],
    day_shift: DayShift,
    record: &mut MotionRecord,
) -> Result<(), Error<&'a [u8]>> {
    let mut fields = Tokenizer::new(sentence);

    // sentence type, time
    fields.skip_fields(2)?;

    let indicator = fields.peek()?;
    if Status::from_byte(indicator) != Some(Status::Valid) {
        debug!("RMC reports invalid data (status {:?})", indicator as char);
        record.is_valid = false;
        return Err(Error::InvalidData(indicator));
    }

    // status, latitude, N/S, longitude, E/W
    fields.skip_fields(5)?;

    let speed = optional_decimal_value(fields.next_field()?)?;
    let course = optional_decimal_value(fields.next_field()?)?;
    let date = date(fields.next_field()?, day_shift)?;

    *record = MotionRecord {
        date,
        speed,
        course,
        is_valid: true,
    };

    trace!("decoded RMC: {record:?}");
    Ok(())
}
