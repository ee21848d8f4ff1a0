//! # Receiver Front-End
//!
//! [`GpsDecoder`] owns everything that has to survive between sentences: the
//! configured GMT offset, the running [`DayShift`] and the last good records.

use log::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    nmea_content::{DayShift, FixRecord, GmtOffset, MotionRecord, decode_gga, decode_rmc},
    nmea0183::{SentenceKind, frame},
};

/// Decoder settings.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Offset applied to every GGA fix time
    pub gmt_offset: GmtOffset,
}

/// The most recent fix and motion records.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GpsData {
    /// Last GGA record
    pub fix: FixRecord,
    /// Last RMC record
    pub motion: MotionRecord,
}

/// Stateful GGA + RMC decoder.
///
/// # Examples
///
/// ```rust
/// use neo7_nmea::{DecoderConfig, GmtOffset, GpsDecoder};
///
/// let config = DecoderConfig {
///     gmt_offset: GmtOffset::try_from(-100i16).unwrap(),
/// };
/// let mut decoder = GpsDecoder::new(config);
///
/// let mut stream = concat!(
///     "$GPGGA,003000,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n",
///     "$GPRMC,003000,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n",
/// )
/// .bytes();
///
/// let data = decoder.receive_and_decode(&mut stream);
///
/// assert_eq!((data.fix.time.hour, data.fix.time.minute), (23, 30));
/// assert_eq!(data.motion.date.day, 22);
/// ```
#[derive(Debug, Default, Clone)]
pub struct GpsDecoder {
    config: DecoderConfig,
    day_shift: DayShift,
    data: GpsData,
}

impl GpsDecoder {
    /// Creates a decoder with an empty day correction and default records.
    pub fn new(config: DecoderConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Settings the decoder was created with.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Last decoded records. Fields of a failed decode keep their previous values.
    pub fn data(&self) -> &GpsData {
        &self.data
    }

    /// Day correction accumulated from GMT offset rollovers.
    pub fn day_shift(&self) -> DayShift {
        self.day_shift
    }

    /// Forgets accumulated rollovers.
    pub fn reset_day_shift(&mut self) {
        self.day_shift.reset();
    }

    /// Decodes one GGA sentence body into the fix record.
    pub fn decode_gga<'a>(&mut self, sentence: &'a [u8]) -> Result<(), Error<&'a [u8]>> {
        decode_gga(
            sentence,
            self.config.gmt_offset,
            &mut self.day_shift,
            &mut self.data.fix,
        )
    }

    /// Decodes one RMC sentence body into the motion record.
    pub fn decode_rmc<'a>(&mut self, sentence: &'a [u8]) -> Result<(), Error<&'a [u8]>> {
        decode_rmc(sentence, self.day_shift, &mut self.data.motion)
    }

    /// Frames and decodes one GGA sentence, then one RMC sentence, from `bytes`.
    ///
    /// Framing and decoding failures are logged and otherwise ignored; the
    /// returned records are whatever the two decodes left behind. Bytes past
    /// the RMC sentence stay in the iterator.
    pub fn receive_and_decode<I>(&mut self, bytes: &mut I) -> &GpsData
    where
        I: Iterator<Item = u8>,
    {
        match frame(SentenceKind::Gga, &mut *bytes) {
            Ok(sentence) => {
                if let Err(error) = self.decode_gga(&sentence) {
                    warn!("GGA decode failed (code {}): {error}", error.code());
                }
            }
            Err(error) => warn!("GGA framing failed: {error}"),
        }

        match frame(SentenceKind::Rmc, &mut *bytes) {
            Ok(sentence) => {
                if let Err(error) = self.decode_rmc(&sentence) {
                    warn!("RMC decode failed (code {}): {error}", error.code());
                }
            }
            Err(error) => warn!("RMC framing failed: {error}"),
        }

        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_updates_only_its_record() {
        let mut decoder = GpsDecoder::default();

        let result =
            decoder.decode_gga(b"GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47");
        assert_eq!(result, Ok(()));
        assert!(decoder.data().fix.is_fix_valid);
        assert_eq!(decoder.data().motion, MotionRecord::default());
    }

    #[test]
    fn test_reset_day_shift() {
        let mut decoder = GpsDecoder::new(DecoderConfig {
            gmt_offset: GmtOffset::try_from(200i16).unwrap(),
        });

        let result =
            decoder.decode_gga(b"GPGGA,230000,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47");
        assert_eq!(result, Ok(()));
        assert_eq!(decoder.day_shift().days(), 1);

        decoder.reset_day_shift();
        assert_eq!(decoder.day_shift(), DayShift::default());
    }
}
