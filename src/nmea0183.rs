//! # NMEA 0183 Sentence Framing
//!
//! Receivers emit a continuous stream of `$ttSSS,D1,D2,...,Dn*CC\r\n` sentences.
//! The decoders in [`nmea_content`](crate::nmea_content) want one sentence body
//! in a fixed buffer, so this module hunts the stream for a sentence-type token
//! and collects what follows it.
//!
//! The framer does no I/O. Bytes are pushed into it one at a time (from a UART
//! interrupt, a serial port reader, a log file...) or handed over as an
//! iterator through [`frame`].

use log::trace;
use std::fmt;

/// Capacity of a framed sentence body.
pub const SENTENCE_BUFFER_SIZE: usize = 100;

/// Bytes the framer inspects while hunting for a sentence type before giving up.
pub const SYNC_ATTEMPTS: usize = 400;

/// A framed sentence body: the bytes following the sentence-type token, up to
/// (excluding) the line ending or [`SENTENCE_BUFFER_SIZE`] bytes.
pub type SentenceBuffer = heapless::Vec<u8, SENTENCE_BUFFER_SIZE>;

/// Sentence types the framer can hunt for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceKind {
    /// Global Positioning System Fix Data
    Gga,
    /// Recommended Minimum Navigation Information
    Rmc,
}

impl SentenceKind {
    /// The three-letter sentence type following the talker ID.
    pub fn sentence_type(self) -> &'static [u8; 3] {
        match self {
            SentenceKind::Gga => b"GGA",
            SentenceKind::Rmc => b"RMC",
        }
    }
}

/// Reasons framing can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramingError {
    /// No sentence-type token within [`SYNC_ATTEMPTS`] bytes.
    SyncLost,
    /// The byte source ran dry before a sentence-type token was found.
    StreamEnded,
}

impl fmt::Display for FramingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FramingError::SyncLost => {
                write!(f, "no sentence found within {SYNC_ATTEMPTS} bytes")
            }
            FramingError::StreamEnded => write!(f, "byte stream ended before a sentence was found"),
        }
    }
}

impl std::error::Error for FramingError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// `matched` bytes of the sentence type seen so far.
    Hunting { matched: usize },
    Collecting,
}

/// Incremental sentence framer.
///
/// # Examples
///
/// ```rust
/// use neo7_nmea::nmea0183::{Framer, SentenceKind};
///
/// let mut framer = Framer::new(SentenceKind::Rmc);
/// let mut framed = None;
///
/// for &byte in b"$GPGGA,1*00\r\n$GPRMC,123519,A,*6A\r\n" {
///     if let Some(sentence) = framer.push(byte).unwrap() {
///         framed = Some(sentence);
///         break;
///     }
/// }
///
/// assert_eq!(framed.unwrap().as_slice(), b",123519,A,*6A");
/// ```
#[derive(Debug, Clone)]
pub struct Framer {
    kind: SentenceKind,
    state: State,
    attempts: usize,
    buffer: SentenceBuffer,
}

impl Framer {
    /// Creates a framer hunting for `kind`.
    pub fn new(kind: SentenceKind) -> Self {
        Self {
            kind,
            state: State::Hunting { matched: 0 },
            attempts: 0,
            buffer: SentenceBuffer::new(),
        }
    }

    /// The sentence type this framer hunts for.
    pub fn kind(&self) -> SentenceKind {
        self.kind
    }

    /// Drops any partial sentence and starts hunting again.
    pub fn reset(&mut self) {
        self.state = State::Hunting { matched: 0 };
        self.attempts = 0;
        self.buffer.clear();
    }

    /// Feeds one byte.
    ///
    /// Returns the sentence body once it is complete. Fails with
    /// [`FramingError::SyncLost`] after [`SYNC_ATTEMPTS`] bytes without a
    /// sentence-type token; the framer is reset and can be fed again.
    pub fn push(&mut self, byte: u8) -> Result<Option<SentenceBuffer>, FramingError> {
        match self.state {
            State::Hunting { matched } => {
                let token = self.kind.sentence_type();
                let matched = advance_match(token, matched, byte);

                if matched == token.len() {
                    trace!("found {:?} sentence after {} bytes", self.kind, self.attempts);
                    self.state = State::Collecting;
                    self.attempts = 0;
                    return Ok(None);
                }

                self.attempts += 1;
                if self.attempts >= SYNC_ATTEMPTS {
                    self.reset();
                    return Err(FramingError::SyncLost);
                }

                self.state = State::Hunting { matched };
                Ok(None)
            }
            State::Collecting => {
                if matches!(byte, b'\r' | b'\n' | b'$') {
                    return Ok(Some(self.take()));
                }

                if self.buffer.push(byte).is_err() || self.buffer.is_full() {
                    return Ok(Some(self.take()));
                }

                Ok(None)
            }
        }
    }

    /// Ends the stream: returns the partial sentence body if one was being
    /// collected.
    ///
    /// A partial body is still handed over so the decoder can report exactly
    /// which field is missing.
    pub fn finish(&mut self) -> Result<SentenceBuffer, FramingError> {
        match self.state {
            State::Collecting => Ok(self.take()),
            State::Hunting { .. } => {
                self.reset();
                Err(FramingError::StreamEnded)
            }
        }
    }

    fn take(&mut self) -> SentenceBuffer {
        let sentence = core::mem::take(&mut self.buffer);
        self.reset();
        sentence
    }
}

/// Length of the longest prefix of `token` that ends the hunted bytes once
/// `byte` follows `token[..matched]`.
fn advance_match(token: &[u8], matched: usize, byte: u8) -> usize {
    if token.get(matched) == Some(&byte) {
        return matched + 1;
    }

    (0..matched)
        .rev()
        .find(|&len| token[len] == byte && token[..len] == token[matched - len..matched])
        .map_or(0, |len| len + 1)
}

/// Pulls bytes from `bytes` until one `kind` sentence is framed.
///
/// Bytes after the sentence are left in the iterator, so a GGA and an RMC
/// sentence can be framed one after the other from the same stream.
///
/// # Examples
///
/// ```rust
/// use neo7_nmea::nmea0183::{FramingError, SentenceKind, frame};
///
/// let mut stream = b"$GPGGA,123519,A*00\r\n$GPRMC,123519,A*00\r\n".iter().copied();
///
/// let gga = frame(SentenceKind::Gga, &mut stream).unwrap();
/// assert_eq!(gga.as_slice(), b",123519,A*00");
///
/// let rmc = frame(SentenceKind::Rmc, &mut stream).unwrap();
/// assert_eq!(rmc.as_slice(), b",123519,A*00");
///
/// assert_eq!(frame(SentenceKind::Gga, &mut stream), Err(FramingError::StreamEnded));
/// ```
pub fn frame<I>(kind: SentenceKind, bytes: I) -> Result<SentenceBuffer, FramingError>
where
    I: IntoIterator<Item = u8>,
{
    let mut framer = Framer::new(kind);

    for byte in bytes {
        if let Some(sentence) = framer.push(byte)? {
            return Ok(sentence);
        }
    }

    framer.finish()
}
