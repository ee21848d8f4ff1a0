use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    nmea_content::{
        Altitude, DayShift, GmtOffset, Location, Quality, TimeOfDay,
        parse::{coordinate, decimal_value, local_time, satellite_count},
    },
    parsing::Tokenizer,
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
///
/// Only fields 1-7, 9 and 10 are decoded.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FixRecord {
    /// Position in degrees
    pub location: Location,
    /// Local time of the fix
    pub time: TimeOfDay,
    /// `true` when the fix quality is GPS, DGPS or estimated
    pub is_fix_valid: bool,
    /// GPS Quality Indicator
    pub quality: Quality,
    /// Antenna altitude above mean sea level
    pub altitude: Altitude,
    /// Number of satellites in use
    pub satellite_count: u8,
}

/// Decodes a GGA sentence body into `record`.
///
/// `sentence` holds everything from the sentence type onwards (whatever
/// precedes the first comma is ignored), and its length is the bound no field
/// walk crosses. Fix time is moved by `gmt_offset`; when that wraps past
/// midnight `day_shift` is moved by one day.
///
/// `record` and `day_shift` are only written on success, with one exception:
/// a sentence whose fix quality is not `1`, `2` or `6` clears
/// [`FixRecord::is_fix_valid`], leaves every other field as it was and returns
/// [`Error::NoFix`].
///
/// # Examples
///
/// ```rust
/// use neo7_nmea::{DayShift, FixRecord, GmtOffset, decode_gga};
///
/// let mut record = FixRecord::default();
/// let mut day_shift = DayShift::default();
///
/// decode_gga(
///     b"GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47",
///     GmtOffset::UTC,
///     &mut day_shift,
///     &mut record,
/// )?;
///
/// assert!(record.is_fix_valid);
/// assert_eq!(record.satellite_count, 8);
/// assert_eq!(record.location.ns, 'N');
/// assert_eq!(record.altitude.unit, 'M');
/// # Ok::<(), neo7_nmea::Error<&'static [u8]>>(())
/// ```
pub fn decode_gga<'a>(
    sentence: &'a [u8],
    gmt_offset: GmtOffset,
    day_shift: &mut DayShift,
    record: &mut FixRecord,
) -> Result<(), Error<&'a [u8]>> {
    let mut fields = Tokenizer::new(sentence);

    // sentence type, time, latitude, N/S, longitude, E/W
    fields.skip_fields(6)?;

    let indicator = fields.peek()?;
    let quality = match Quality::from_byte(indicator) {
        Some(quality) if quality.is_fix() => quality,
        _ => {
            debug!("GGA reports no fix (quality {:?})", indicator as char);
            record.is_fix_valid = false;
            return Err(Error::NoFix(indicator));
        }
    };

    fields.rewind();
    fields.skip()?;

    let (time, rollover) = local_time(fields.next_field()?, gmt_offset)?;

    let latitude = coordinate(fields.next_field()?)?;
    let ns = indicator_char(fields.next_field()?);

    let longitude = coordinate(fields.next_field()?)?;
    let ew = indicator_char(fields.next_field()?);

    // fix quality, already checked
    fields.skip()?;

    let satellite_count = satellite_count(fields.next_field()?)?;

    // HDOP
    fields.skip()?;

    let altitude = decimal_value(fields.next_field()?)?;
    let unit = fields.peek()? as char;

    *record = FixRecord {
        location: Location {
            latitude,
            ns,
            longitude,
            ew,
        },
        time,
        is_fix_valid: true,
        quality,
        altitude: Altitude { altitude, unit },
        satellite_count,
    };

    if rollover != 0 {
        debug!("GMT offset moved the fix {rollover:+} day(s)");
        day_shift.apply(rollover);
    }

    trace!("decoded GGA: {record:?}");
    Ok(())
}

fn indicator_char(token: &[u8]) -> char {
    token.first().map_or('\0', |&b| b as char)
}
