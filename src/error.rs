//! # Error Types
//!
//! This module defines the error types returned by the tokenizer, the field
//! parsers and the GGA/RMC decoders.

use nom::error::{ErrorKind, ParseError};
use std::fmt;

/// Holds the result of parsing functions.
///
/// It depends on the input type `I`, the output type `O`, and the error type `E`
/// (by default `nom::error::Error<I>`).
///
/// The `Ok` side is a pair containing the remainder of the input and the produced
/// value. The `Err` side contains an instance of `nom::Err` wrapping [`Error`].
pub type IResult<I, O, E = nom::error::Error<I>> = nom::IResult<I, O, Error<I, E>>;

/// Represents every way a sentence can fail to decode.
///
/// Framing errors ([`Error::BoundExceeded`]) and field-content errors
/// ([`Error::FieldTooShort`], [`Error::MissingDecimalPoint`],
/// [`Error::InvalidField`]) mean the input is malformed. [`Error::NoFix`] and
/// [`Error::InvalidData`] mean the sentence is well formed but the receiver
/// declared its data unusable; see [`Error::is_status`].
#[derive(Debug, PartialEq)]
pub enum Error<I, E = nom::error::Error<I>> {
    /// A required comma delimiter was not found before the end of the buffer.
    ///
    /// The sentence was truncated or corrupted. Nothing decoded from it is kept.
    BoundExceeded,

    /// The GGA fix-quality indicator is not one of `1`, `2` or `6`.
    ///
    /// Contains the indicator byte found in the sentence.
    NoFix(u8),

    /// The RMC status indicator is not `A`.
    ///
    /// Contains the indicator byte found in the sentence (canonically `V`).
    InvalidData(u8),

    /// A latitude or longitude field is shorter than six characters.
    ///
    /// Contains the offending field.
    FieldTooShort(I),

    /// A fixed-point field has no decimal point.
    ///
    /// Contains the offending field.
    MissingDecimalPoint(I),

    /// A field does not have the expected format or value range.
    ///
    /// Contains the offending field.
    InvalidField(I),

    /// A nom combinator failed.
    ParsingError(E),
}

impl<I, E> Error<I, E> {
    /// Returns the decode-result code of this error.
    ///
    /// `0` is reserved for a successful decode, so every error maps to a
    /// non-zero code:
    ///
    /// | Code | Error                                          |
    /// |------|------------------------------------------------|
    /// | 1    | [`Error::BoundExceeded`]                       |
    /// | 2    | [`Error::FieldTooShort`]                       |
    /// | 3    | [`Error::NoFix`], [`Error::InvalidData`]       |
    /// | 4    | [`Error::MissingDecimalPoint`]                 |
    /// | 5    | [`Error::InvalidField`], [`Error::ParsingError`] |
    pub fn code(&self) -> u8 {
        match self {
            Error::BoundExceeded => 1,
            Error::FieldTooShort(_) => 2,
            Error::NoFix(_) | Error::InvalidData(_) => 3,
            Error::MissingDecimalPoint(_) => 4,
            Error::InvalidField(_) | Error::ParsingError(_) => 5,
        }
    }

    /// Returns `true` when the sentence was well formed but flagged its data as
    /// unusable (no fix, or status `V`).
    pub fn is_status(&self) -> bool {
        matches!(self, Error::NoFix(_) | Error::InvalidData(_))
    }
}

impl<I, E> ParseError<I> for Error<I, E>
where
    E: ParseError<I>,
{
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        Error::ParsingError(E::from_error_kind(input, kind))
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<E> fmt::Display for Error<&[u8], E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BoundExceeded => write!(f, "delimiter not found before end of buffer"),
            Error::NoFix(quality) => write!(f, "no fix (quality indicator {:?})", *quality as char),
            Error::InvalidData(status) => write!(f, "data not valid (status {:?})", *status as char),
            Error::FieldTooShort(field) => {
                write!(f, "field too short: {:?}", String::from_utf8_lossy(field))
            }
            Error::MissingDecimalPoint(field) => {
                write!(f, "no decimal point in field {:?}", String::from_utf8_lossy(field))
            }
            Error::InvalidField(field) => {
                write!(f, "invalid field {:?}", String::from_utf8_lossy(field))
            }
            Error::ParsingError(e) => write!(f, "parsing error: {e:?}"),
        }
    }
}

impl<E> std::error::Error for Error<&[u8], E> where E: fmt::Debug {}
