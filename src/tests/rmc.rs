use crate::{Date, DayShift, Error, MotionRecord, decode_rmc};

const SENTENCE: &[u8] = b"GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A";

#[test]
fn test_rmc_invalid_status() {
    let mut record = MotionRecord::default();
    assert_eq!(decode_rmc(SENTENCE, DayShift::default(), &mut record), Ok(()));
    let previous = record;

    let input = b"GPRMC,123520,V,4807.038,N,01131.000,E,0.0,0.0,240394,003.1,W*6A";
    let result = decode_rmc(input, DayShift::default(), &mut record);

    assert_eq!(result, Err(Error::InvalidData(b'V')));
    assert!(result.is_err_and(|error| error.is_status() && error.code() == 3));
    assert!(!record.is_valid);
    assert_eq!(
        MotionRecord {
            is_valid: true,
            ..record
        },
        previous
    );
}

#[test]
fn test_rmc_unknown_status() {
    let mut record = MotionRecord::default();

    let input = b"GPRMC,123520,,4807.038,N,01131.000,E,0.0,0.0,240394,003.1,W*6A";
    let result = decode_rmc(input, DayShift::default(), &mut record);

    // an empty status field peeks the following comma
    assert_eq!(result, Err(Error::InvalidData(b',')));
}

#[test]
fn test_rmc_empty_speed_and_course() {
    let mut record = MotionRecord {
        speed: 5.0,
        course: 90.0,
        ..Default::default()
    };

    let input = b"GPRMC,123519,A,4807.038,N,01131.000,E,,,230394,003.1,W*6A";
    assert_eq!(decode_rmc(input, DayShift::default(), &mut record), Ok(()));

    assert_eq!((record.speed, record.course), (0.0, 0.0));
    assert!(record.is_valid);
}

#[test]
fn test_rmc_day_shift_past_month_end() {
    let mut record = MotionRecord::default();

    let input = b"GPRMC,003000,A,4807.038,N,01131.000,E,0.0,0.0,310394,003.1,W*6A";
    assert_eq!(decode_rmc(input, DayShift::new(1), &mut record), Ok(()));

    assert_eq!(
        record.date,
        Date {
            day: 32,
            month: 3,
            year: 94
        }
    );
    assert!(!record.date.is_calendar_day());
    assert_eq!(record.date.full_year(), 1994);
}

#[test]
fn test_rmc_day_shift_before_month_start() {
    let mut record = MotionRecord::default();

    let input = b"GPRMC,233000,A,4807.038,N,01131.000,E,0.0,0.0,010125,003.1,W*6A";
    assert_eq!(decode_rmc(input, DayShift::new(-1), &mut record), Ok(()));

    assert_eq!(record.date.day, 0);
    assert!(!record.date.is_calendar_day());
    assert_eq!(record.date.full_year(), 2025);
}

#[cfg(feature = "time")]
#[test]
fn test_rmc_date_rollover() {
    use time::{Date as CalendarDate, Month};

    let mut record = MotionRecord::default();

    let input = b"GPRMC,003000,A,4807.038,N,01131.000,E,0.0,0.0,311224,003.1,W*6A";
    assert_eq!(decode_rmc(input, DayShift::new(1), &mut record), Ok(()));

    assert_eq!(record.date.to_date(), None);
    assert_eq!(
        record.date.to_date_rolled_over(),
        CalendarDate::from_calendar_date(2025, Month::January, 1).ok()
    );

    let input = b"GPRMC,233000,A,4807.038,N,01131.000,E,0.0,0.0,010324,003.1,W*6A";
    assert_eq!(decode_rmc(input, DayShift::new(-1), &mut record), Ok(()));
    assert_eq!(
        record.date.to_date_rolled_over(),
        CalendarDate::from_calendar_date(2024, Month::February, 29).ok()
    );
}

#[test]
fn test_rmc_malformed_fields() {
    let cases: [(&[u8], Error<&[u8]>); 3] = [
        (
            b"GPRMC,123519,A,4807.038,N,01131.000,E,22,084.4,230394,",
            Error::MissingDecimalPoint(&b"22"[..]),
        ),
        (
            b"GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,23034,",
            Error::InvalidField(&b"23034"[..]),
        ),
        (
            b"GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,2303941,",
            Error::InvalidField(&b"2303941"[..]),
        ),
    ];

    for (input, expected) in cases {
        let mut record = MotionRecord::default();
        let result = decode_rmc(input, DayShift::new(2), &mut record);
        assert_eq!(result.as_ref().map_err(|error| error.code()), Err(expected.code()));
        assert_eq!(result, Err(expected), "input: {:?}", String::from_utf8_lossy(input));
        assert_eq!(record, MotionRecord::default());
    }
}
