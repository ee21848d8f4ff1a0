use std::io::{IsTerminal, Read};

use neo7_nmea::{DecoderConfig, GmtOffset, GpsData, GpsDecoder};

const CAPTURE: &str = "\
$GPRMC,235944,A,4807.038,N,01131.000,E,022.4,084.4,310394,003.1,W*6A\r\n\
$GPGGA,235945,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n\
$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39\r\n\
$GPRMC,235945,A,4807.038,N,01131.000,E,022.4,084.4,310394,003.1,W*6A\r\n\
$GPGGA,235946,4807.038,N,01131.000,E,0,00,99.9,,M,,M,,*47\r\n\
$GPRMC,235946,V,,,,,,,310394,,*6A\r\n";

fn print(data: &GpsData) {
    let fix = &data.fix;
    let motion = &data.motion;

    if fix.is_fix_valid {
        println!(
            "{:02}:{:02}:{:02}  {:.5}{} {:.5}{}  {:.1}{}  {} satellites",
            fix.time.hour,
            fix.time.minute,
            fix.time.second,
            fix.location.latitude,
            fix.location.ns,
            fix.location.longitude,
            fix.location.ew,
            fix.altitude.altitude,
            fix.altitude.unit,
            fix.satellite_count,
        );
    } else {
        println!("no fix ({:?})", fix.quality);
    }

    if motion.is_valid {
        println!(
            "  {:02}/{:02}/{}  {:.1} kn  {:.1} deg",
            motion.date.day,
            motion.date.month,
            motion.date.full_year(),
            motion.speed,
            motion.course,
        );
    } else {
        println!("  no valid motion data");
    }
}

/// Decodes a receiver capture piped into stdin, or a built-in one. The first
/// argument is the GMT offset as `[-]hhmm`.
///
/// ```text
/// RUST_LOG=debug cargo run --example decode -- 200 < capture.nmea
/// ```
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let gmt_offset = match std::env::args().nth(1) {
        Some(arg) => GmtOffset::try_from(arg.parse::<i16>()?)?,
        None => GmtOffset::UTC,
    };

    let mut input = Vec::new();
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        stdin.lock().read_to_end(&mut input)?;
    }
    if input.is_empty() {
        input.extend_from_slice(CAPTURE.as_bytes());
    }

    let mut decoder = GpsDecoder::new(DecoderConfig { gmt_offset });
    let mut bytes = input.into_iter().peekable();

    while bytes.peek().is_some() {
        print(decoder.receive_and_decode(&mut bytes));
    }

    println!("day shift: {:+}", decoder.day_shift().days());
    Ok(())
}
