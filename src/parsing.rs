//! # Field Tokenizer
//!
//! NMEA sentence bodies are comma-delimited and positional. This module splits a
//! fixed buffer into fields, one comma at a time, and never looks past the end
//! of the buffer: a field without its closing comma is reported as
//! [`Error::BoundExceeded`].

use nom::{Parser, bytes::complete::take_till};

use crate::{Error, IResult};

/// Parses one comma-terminated field.
///
/// Returns the field (without the comma) and the input just past the comma.
/// Empty fields are valid. Fails with [`Error::BoundExceeded`] as a
/// `nom::Err::Failure` when the input ends before a comma is found.
///
/// # Examples
///
/// ```rust
/// use neo7_nmea::{Error, IResult, parsing::field};
///
/// let result: IResult<_, _> = field(b"4807.038,N,");
/// assert_eq!(result, Ok((&b"N,"[..], &b"4807.038"[..])));
///
/// let result: IResult<_, _> = field(b",N,");
/// assert_eq!(result, Ok((&b"N,"[..], &b""[..])));
///
/// let result: IResult<_, _> = field(b"4807.038");
/// assert_eq!(result, Err(nom::Err::Failure(Error::BoundExceeded)));
/// ```
pub fn field(i: &[u8]) -> IResult<&[u8], &[u8]> {
    let (i, token) = take_till(|b: u8| b == b',').parse(i)?;

    match i.split_first() {
        Some((_, rest)) => Ok((rest, token)),
        None => Err(nom::Err::Failure(Error::BoundExceeded)),
    }
}

/// Runs `f` over a complete field, rejecting leftover bytes.
///
/// Errors produced by nom combinators inside `f` are reported as
/// [`Error::InvalidField`] carrying the whole field, so callers always learn
/// which field was malformed. Errors raised explicitly by `f` (such as
/// [`Error::MissingDecimalPoint`]) are passed through unchanged.
pub fn parse_field<'a, O, F>(token: &'a [u8], mut f: F) -> Result<O, Error<&'a [u8]>>
where
    F: Parser<&'a [u8], Output = O, Error = Error<&'a [u8]>>,
{
    match f.parse(token) {
        Ok((rest, value)) if rest.is_empty() => Ok(value),
        Ok(_) => Err(Error::InvalidField(token)),
        Err(nom::Err::Error(Error::ParsingError(_)) | nom::Err::Failure(Error::ParsingError(_))) => {
            Err(Error::InvalidField(token))
        }
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(e),
        Err(nom::Err::Incomplete(_)) => Err(Error::InvalidField(token)),
    }
}

/// A cursor over a fixed sentence buffer.
///
/// The cursor always sits at the start of a field: just past the comma that
/// closed the previous one, or at `0`. Every call either advances past exactly
/// one comma or fails with [`Error::BoundExceeded`] and leaves the cursor where
/// it was, so successive calls compose.
///
/// The tokenizer borrows the caller's buffer and holds no other state, so each
/// decode call owns its own cursor.
///
/// # Examples
///
/// ```rust
/// use neo7_nmea::{Error, parsing::Tokenizer};
///
/// let mut fields = Tokenizer::new(b"GPGGA,123519,4807.038,N,");
/// fields.skip_fields(2)?;
/// assert_eq!(fields.next_field()?, b"4807.038");
/// assert_eq!(fields.peek()?, b'N');
/// assert_eq!(fields.next_field()?, b"N");
/// assert_eq!(fields.next_field(), Err(Error::BoundExceeded));
/// # Ok::<(), Error<&'static [u8]>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    buffer: &'a [u8],
    cursor: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer positioned at the start of `buffer`.
    ///
    /// The length of `buffer` is the bound no field walk may cross.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, cursor: 0 }
    }

    /// Index of the next unread byte.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor back to the start of the buffer.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Returns the field at the cursor and moves past its closing comma.
    pub fn next_field(&mut self) -> Result<&'a [u8], Error<&'a [u8]>> {
        match field(self.remaining()) {
            Ok((rest, token)) => {
                self.cursor = self.buffer.len() - rest.len();
                Ok(token)
            }
            Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(e),
            Err(nom::Err::Incomplete(_)) => Err(Error::BoundExceeded),
        }
    }

    /// Moves past the field at the cursor without looking at it.
    pub fn skip(&mut self) -> Result<(), Error<&'a [u8]>> {
        self.next_field().map(|_| ())
    }

    /// Moves past `count` fields.
    pub fn skip_fields(&mut self, count: usize) -> Result<(), Error<&'a [u8]>> {
        for _ in 0..count {
            self.skip()?;
        }

        Ok(())
    }

    /// Returns the byte at the cursor without moving.
    pub fn peek(&self) -> Result<u8, Error<&'a [u8]>> {
        self.buffer
            .get(self.cursor)
            .copied()
            .ok_or(Error::BoundExceeded)
    }

    fn remaining(&self) -> &'a [u8] {
        self.buffer.get(self.cursor..).unwrap_or_default()
    }
}
