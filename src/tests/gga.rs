use crate::{
    Altitude, DayShift, Error, FixRecord, GmtOffset, Location, Quality, TimeOfDay, decode_gga,
};

fn sentence(time: &str, quality: char, altitude: &str) -> String {
    format!("GPGGA,{time},4807.038,N,01131.000,E,{quality},08,0.9,{altitude},M,46.9,M,,*47")
}

fn offset(value: i16) -> GmtOffset {
    GmtOffset::try_from(value).unwrap()
}

fn decoded(time: &str, gmt_offset: GmtOffset, day_shift: &mut DayShift) -> FixRecord {
    let input = sentence(time, '1', "545.4");
    let mut record = FixRecord::default();

    let result = decode_gga(input.as_bytes(), gmt_offset, day_shift, &mut record);
    assert_eq!(result, Ok(()));

    record
}

#[test]
fn test_gga_fix_qualities() {
    for quality in '0'..='9' {
        let input = sentence("123519", quality, "545.4");
        let mut record = FixRecord::default();
        let mut day_shift = DayShift::default();

        let result = decode_gga(input.as_bytes(), GmtOffset::UTC, &mut day_shift, &mut record);

        if matches!(quality, '1' | '2' | '6') {
            assert_eq!(result, Ok(()), "quality {quality}");
            assert!(record.is_fix_valid);
            assert_eq!(record.quality.as_byte(), quality as u8);
        } else {
            assert_eq!(result, Err(Error::NoFix(quality as u8)), "quality {quality}");
            assert_eq!(result.unwrap_err().code(), 3);
            assert!(!record.is_fix_valid);
        }
    }
}

#[test]
fn test_gga_no_fix_keeps_previous_values() {
    let mut day_shift = DayShift::default();
    let mut record = decoded("123519", GmtOffset::UTC, &mut day_shift);
    let previous = record;

    let input = sentence("235959", '0', "1.0");
    let result = decode_gga(input.as_bytes(), offset(200), &mut day_shift, &mut record);

    assert_eq!(result, Err(Error::NoFix(b'0')));
    assert!(!record.is_fix_valid);
    assert_eq!(
        FixRecord {
            is_fix_valid: true,
            ..record
        },
        previous
    );
    assert_eq!(day_shift, DayShift::default());
}

#[test]
fn test_gga_positive_offset_rolls_over() {
    let mut day_shift = DayShift::default();

    let record = decoded("230000", offset(200), &mut day_shift);
    assert_eq!(
        record.time,
        TimeOfDay {
            hour: 1,
            minute: 0,
            second: 0
        }
    );
    assert_eq!(day_shift.days(), 1);

    // the counter accumulates until reset
    decoded("235000", offset(200), &mut day_shift);
    assert_eq!(day_shift.days(), 2);

    day_shift.reset();
    assert_eq!(day_shift.days(), 0);
}

#[test]
fn test_gga_negative_offset_rolls_back() {
    let mut day_shift = DayShift::default();

    let record = decoded("003000", offset(-100), &mut day_shift);
    assert_eq!(
        record.time,
        TimeOfDay {
            hour: 23,
            minute: 30,
            second: 0
        }
    );
    assert_eq!(day_shift.days(), -1);
}

#[test]
fn test_gga_negative_offset_same_day() {
    let mut day_shift = DayShift::default();

    let record = decoded("235959", offset(-100), &mut day_shift);
    assert_eq!(
        record.time,
        TimeOfDay {
            hour: 22,
            minute: 59,
            second: 59
        }
    );
    assert_eq!(day_shift.days(), 0);
}

#[test]
fn test_gga_offset_minutes() {
    let mut day_shift = DayShift::default();

    // 12:35 + 5:30 carries into the hour
    let record = decoded("123519", offset(530), &mut day_shift);
    assert_eq!((record.time.hour, record.time.minute), (18, 5));

    // 00:10 - 0:45 borrows from the hour and the day
    let record = decoded("001000", offset(-45), &mut day_shift);
    assert_eq!((record.time.hour, record.time.minute), (23, 25));
    assert_eq!(day_shift.days(), -1);
}

#[test]
fn test_gga_time_fraction_is_ignored() {
    let record = decoded("123519.50", GmtOffset::UTC, &mut DayShift::default());
    assert_eq!(
        record.time,
        TimeOfDay {
            hour: 12,
            minute: 35,
            second: 19
        }
    );
}

#[test]
fn test_gga_negative_altitude() {
    let input = sentence("123519", '1', "-0.5");
    let mut record = FixRecord::default();

    let result = decode_gga(input.as_bytes(), GmtOffset::UTC, &mut DayShift::default(), &mut record);
    assert_eq!(result, Ok(()));
    assert_eq!(
        record.altitude,
        Altitude {
            altitude: -0.5,
            unit: 'M'
        }
    );
}

#[test]
fn test_gga_location() {
    let input = b"GPGGA,123519,3352.128,S,15112.558,W,2,11,0.9,12.0,M,46.9,M,,*47";
    let mut record = FixRecord::default();

    let result = decode_gga(input, GmtOffset::UTC, &mut DayShift::default(), &mut record);
    assert_eq!(result, Ok(()));
    assert_eq!(record.quality, Quality::DGPSFix);
    assert_eq!(record.satellite_count, 11);

    let Location {
        latitude,
        ns,
        longitude,
        ew,
    } = record.location;
    assert!((latitude - 33.8688).abs() < 1e-6);
    assert!((longitude - 151.209_3).abs() < 1e-6);
    assert_eq!((ns, ew), ('S', 'W'));
    assert!((record.location.signed_latitude() + 33.8688).abs() < 1e-6);
    assert!((record.location.signed_longitude() + 151.209_3).abs() < 1e-6);
}

#[test]
fn test_gga_empty_hemisphere() {
    let input = b"GPGGA,123519,4807.038,,01131.000,,1,08,0.9,545.4,M,46.9,M,,*47";
    let mut record = FixRecord::default();

    let result = decode_gga(input, GmtOffset::UTC, &mut DayShift::default(), &mut record);
    assert_eq!(result, Ok(()));
    assert_eq!((record.location.ns, record.location.ew), ('\0', '\0'));
}

#[test]
fn test_gga_malformed_fields() {
    let cases: [(&[u8], Error<&[u8]>); 7] = [
        (
            b"GPGGA,123519,4807038,N,01131.000,E,1,08,0.9,545.4,M",
            Error::MissingDecimalPoint(&b"4807038"[..]),
        ),
        (
            b"GPGGA,123519,4807.038,N,131.0,E,1,08,0.9,545.4,M",
            Error::FieldTooShort(&b"131.0"[..]),
        ),
        (
            b"GPGGA,123519,-3352.128,S,01131.000,E,1,08,0.9,545.4,M",
            Error::InvalidField(&b"-3352.128"[..]),
        ),
        (
            b"GPGGA,123519,4807.038,N,01131.000,E,1,,0.9,545.4,M",
            Error::InvalidField(&b""[..]),
        ),
        (
            b"GPGGA,256000,4807.038,N,01131.000,E,1,08,0.9,545.4,M",
            Error::InvalidField(&b"256000"[..]),
        ),
        (
            b"GPGGA,12a519,4807.038,N,01131.000,E,1,08,0.9,545.4,M",
            Error::InvalidField(&b"12a519"[..]),
        ),
        (
            b"GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545,M",
            Error::MissingDecimalPoint(&b"545"[..]),
        ),
    ];

    for (input, expected) in cases {
        let mut record = FixRecord::default();
        let mut day_shift = DayShift::new(4);

        let result = decode_gga(input, offset(300), &mut day_shift, &mut record);
        assert_eq!(result, Err(expected), "input: {:?}", String::from_utf8_lossy(input));
        assert_eq!(record, FixRecord::default());
        assert_eq!(day_shift, DayShift::new(4));
    }
}
