use nom::{
    Parser,
    bytes::complete::take_while_m_n,
    character::complete::{char, digit0, one_of},
    combinator::opt,
    sequence::preceded,
};

use crate::{
    Error, IResult,
    nmea_content::{Date, DayShift, GmtOffset, TimeOfDay},
    parsing::parse_field,
};

/// Shortest latitude/longitude field accepted, e.g. `4807.0`.
pub const MIN_COORDINATE_LEN: usize = 6;

/// A `<digits>.<digits>` field split into its integer and fractional parts.
///
/// The fraction is kept as an integer plus its digit count so the two
/// encodings NMEA uses can be derived from it: [`FixedPoint::value`] for plain
/// decimals and [`FixedPoint::degrees`] for `dddmm.mmmm` coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPoint {
    negative: bool,
    whole: u64,
    fraction: u64,
    fraction_digits: u32,
}

impl FixedPoint {
    /// `whole + fraction / 10^fraction_digits`, signed.
    pub fn value(&self) -> f64 {
        self.signed(self.whole as f64 + self.fraction_value())
    }

    /// Degrees from degrees-minutes encoding.
    ///
    /// The last two integer digits and the fraction are minutes, everything
    /// before them is whole degrees: `4807.038` is 48° 07.038' = 48.1173°.
    pub fn degrees(&self) -> f64 {
        let degrees = (self.whole / 100) as f64;
        let minutes = (self.whole % 100) as f64 + self.fraction_value();

        self.signed(degrees + minutes / 60.0)
    }

    fn fraction_value(&self) -> f64 {
        self.fraction as f64 / 10f64.powi(self.fraction_digits as i32)
    }

    fn signed(&self, value: f64) -> f64 {
        if self.negative { -value } else { value }
    }
}

/// Parses an optionally signed `<digits>.<digits>` number.
///
/// Either digit run may be empty (`.5`, `12.`), but the decimal point is
/// mandatory: without it the parser fails with [`Error::MissingDecimalPoint`]
/// carrying the whole input.
pub fn fixed_point(i: &[u8]) -> IResult<&[u8], FixedPoint> {
    let input = i;

    let (i, sign) = opt(one_of("+-")).parse(i)?;
    let (i, whole) = digit0.parse(i)?;
    let (i, point) = opt(char('.')).parse(i)?;
    if point.is_none() {
        return Err(nom::Err::Failure(Error::MissingDecimalPoint(input)));
    }
    let (i, fraction) = digit0.parse(i)?;

    let (Some(whole), Some(fraction_value)) = (decimal(whole), decimal(fraction)) else {
        return Err(nom::Err::Failure(Error::InvalidField(input)));
    };

    Ok((
        i,
        FixedPoint {
            negative: sign == Some('-'),
            whole,
            fraction: fraction_value,
            fraction_digits: fraction.len() as u32,
        },
    ))
}

fn decimal(digits: &[u8]) -> Option<u64> {
    digits.iter().try_fold(0u64, |acc, &digit| {
        acc.checked_mul(10)?.checked_add(u64::from(digit - b'0'))
    })
}

fn two_digits(i: &[u8]) -> IResult<&[u8], u8> {
    let (i, digits) = take_while_m_n(2, 2, |b: u8| b.is_ascii_digit()).parse(i)?;

    Ok((i, (digits[0] - b'0') * 10 + (digits[1] - b'0')))
}

/// Parses `hhmmss` with an optional, ignored `.sss` fraction.
pub fn utc_time(i: &[u8]) -> IResult<&[u8], (u8, u8, u8)> {
    let (i, hms) = (two_digits, two_digits, two_digits).parse(i)?;
    let (i, _) = opt(preceded(char('.'), digit0)).parse(i)?;

    Ok((i, hms))
}

/// Decodes a latitude or longitude field in degrees-minutes encoding.
///
/// The field is an unsigned magnitude; the hemisphere carries the sign, so a
/// leading `+` or `-` is rejected.
pub fn coordinate(token: &[u8]) -> Result<f64, Error<&[u8]>> {
    if token.len() < MIN_COORDINATE_LEN {
        return Err(Error::FieldTooShort(token));
    }
    if matches!(token.first(), Some(b'+' | b'-')) {
        return Err(Error::InvalidField(token));
    }

    parse_field(token, fixed_point).map(|value| value.degrees())
}

/// Decodes a plain fixed-point field (altitude).
pub fn decimal_value(token: &[u8]) -> Result<f32, Error<&[u8]>> {
    parse_field(token, fixed_point).map(|value| value.value() as f32)
}

/// Decodes a plain fixed-point field that may be left empty (speed, course).
///
/// An empty field reads as `0.0`.
pub fn optional_decimal_value(token: &[u8]) -> Result<f32, Error<&[u8]>> {
    if token.is_empty() {
        return Ok(0.0);
    }

    decimal_value(token)
}

/// Decodes the number-of-satellites field.
pub fn satellite_count(token: &[u8]) -> Result<u8, Error<&[u8]>> {
    parse_field(token, nom::character::complete::u8)
}

/// Decodes a GGA time field and moves it by `offset`.
///
/// Returns the local time and the day rollover it caused: `-1` when the hour
/// wrapped below midnight, `1` when it wrapped past it, `0` otherwise.
///
/// ```rust
/// use neo7_nmea::{GmtOffset, TimeOfDay, nmea_content::parse::local_time};
///
/// let offset = GmtOffset::try_from(-100i16).unwrap();
/// let (time, rollover) = local_time(b"003000", offset).unwrap();
/// assert_eq!(time, TimeOfDay { hour: 23, minute: 30, second: 0 });
/// assert_eq!(rollover, -1);
/// ```
pub fn local_time(token: &[u8], offset: GmtOffset) -> Result<(TimeOfDay, i32), Error<&[u8]>> {
    let (hour, minute, second) = parse_field(token, utc_time)?;
    if hour > 23 || minute > 59 || second > 59 {
        return Err(Error::InvalidField(token));
    }

    let mut hour = i32::from(hour) + offset.hours();
    let mut minute = i32::from(minute) + offset.minutes();

    if minute > 59 {
        minute -= 60;
        hour += 1;
    } else if minute < 0 {
        minute += 60;
        hour -= 1;
    }

    let mut rollover = 0;
    if hour < 0 {
        hour += 24;
        rollover = -1;
    } else if hour >= 24 {
        hour -= 24;
        rollover = 1;
    }

    // offset validation bounds hour to 0..=23 and minute to 0..=59 here
    let time = TimeOfDay {
        hour: hour as u8,
        minute: minute as u8,
        second,
    };

    Ok((time, rollover))
}

/// Decodes an RMC `ddmmyy` date field and adds the running day correction.
pub fn date(token: &[u8], day_shift: DayShift) -> Result<Date, Error<&[u8]>> {
    let (day, month, year) = parse_field(token, (two_digits, two_digits, two_digits))?;

    Ok(Date {
        day: i32::from(day) + day_shift.days(),
        month,
        year,
    })
}
