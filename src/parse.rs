//! Parsing of the canonical 8-4-4-4-12 text representation

#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, str};

use crate::Uuid;

/// Identifies one of the six fixed-width fields of the canonical text layout.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Section {
    /// Characters 0-7 (bytes 0-3)
    TimeLow,
    /// Characters 9-12 (bytes 4-5)
    TimeMid,
    /// Characters 14-17 (bytes 6-7)
    VersionAndTimeHigh,
    /// Characters 19-20 (byte 8)
    ClockSeqHiAndReserved,
    /// Characters 21-22 (byte 9)
    ClockSeqLow,
    /// Characters 24-35 (bytes 10-15)
    Node,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Section::TimeLow => "time-low",
            Section::TimeMid => "time-mid",
            Section::VersionAndTimeHigh => "version-and-time-high",
            Section::ClockSeqHiAndReserved => "clock-seq-hi-and-reserved",
            Section::ClockSeqLow => "clock-seq-low",
            Section::Node => "node",
        })
    }
}

/// Error parsing an invalid string representation of UUID.
///
/// Each variant classifies a distinct failure category so callers can branch
/// on the kind of malformed input.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParseError {
    /// The input is not exactly 36 bytes long.
    InvalidLength {
        /// The required length (always 36).
        expected: usize,
        /// The length of the rejected input.
        actual: usize,
    },
    /// A fixed-width field yielded fewer characters than its width, which can
    /// happen when a 36-byte input contains multi-byte characters.
    InvalidFormat {
        /// The field that came up short.
        section: Section,
        /// The number of characters the field requires.
        expected: usize,
        /// The number of characters available.
        actual: usize,
    },
    /// The version nibble did not match the one required by a strict parse
    /// (see [`Uuid::parse_v4()`]); never produced by [`Uuid::parse()`].
    InvalidVersion {
        /// The required version number.
        expected: u8,
        /// The version number found in the input.
        actual: u8,
    },
    /// The input ran out of characters at a separator position.
    UnexpectedEnd,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidLength { expected, actual } => {
                write!(f, "invalid length: expected {} bytes, got {}", expected, actual)
            }
            ParseError::InvalidFormat {
                section,
                expected,
                actual,
            } => write!(
                f,
                "truncated {} field: expected {} characters, got {}",
                section, expected, actual
            ),
            ParseError::InvalidVersion { expected, actual } => {
                write!(f, "invalid version: expected {}, got {}", expected, actual)
            }
            ParseError::UnexpectedEnd => write!(f, "unexpected end of input"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Returns the numeric value of a hexadecimal digit character.
///
/// Both cases are accepted. Any character that is not a hexadecimal digit
/// maps to 0 rather than raising an error; see [`Uuid::parse()`] for the
/// rationale of this leniency.
const fn hex_value(c: char) -> u8 {
    match c {
        '0'..='9' => c as u8 - b'0',
        'a'..='f' => c as u8 - b'a' + 10,
        'A'..='F' => c as u8 - b'A' + 10,
        _ => 0,
    }
}

/// Decodes one fixed-width field into `dst`, two characters per byte.
fn read_section(
    chars: &mut str::Chars<'_>,
    section: Section,
    dst: &mut [u8],
) -> Result<(), ParseError> {
    let expected = dst.len() * 2;
    let mut actual = 0;
    for b in dst.iter_mut() {
        match (chars.next(), chars.next()) {
            (Some(hi), Some(lo)) => {
                actual += 2;
                *b = (hex_value(hi) << 4) | hex_value(lo);
            }
            (Some(_), None) => {
                return Err(ParseError::InvalidFormat {
                    section,
                    expected,
                    actual: actual + 1,
                })
            }
            _ => {
                return Err(ParseError::InvalidFormat {
                    section,
                    expected,
                    actual,
                })
            }
        }
    }
    Ok(())
}

/// Consumes one character at a separator position without inspecting it.
fn skip_separator(chars: &mut str::Chars<'_>) -> Result<(), ParseError> {
    chars.next().ok_or(ParseError::UnexpectedEnd).map(drop)
}

impl Uuid {
    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// The input must be exactly 36 bytes long; the six fields are then read
    /// positionally at their fixed offsets. Two deliberate leniencies apply:
    ///
    /// - The character at each separator position is consumed without checking
    ///   that it is `-`.
    /// - Hexadecimal digits are case-insensitive, and a character that is not
    ///   a hexadecimal digit at all decodes to 0 silently.
    ///
    /// Callers that require the separators and digits to be strictly
    /// well-formed should pre-validate the input, e.g. against
    /// `^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$`.
    ///
    /// No version validation is performed; use [`Uuid::parse_v4()`] to
    /// additionally require version 4.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4::Uuid;
    ///
    /// let x = Uuid::parse("d20a21dc-d2bc-4219-ae33-7d8b90e76920")?;
    /// assert_eq!(x.as_bytes()[0], 0xd2);
    /// # Ok::<(), uuid4::ParseError>(())
    /// ```
    pub fn parse(src: &str) -> Result<Self, ParseError> {
        if src.len() != 36 {
            return Err(ParseError::InvalidLength {
                expected: 36,
                actual: src.len(),
            });
        }

        let mut chars = src.chars();
        let mut dst = [0u8; 16];
        read_section(&mut chars, Section::TimeLow, &mut dst[0..4])?;
        skip_separator(&mut chars)?;
        read_section(&mut chars, Section::TimeMid, &mut dst[4..6])?;
        skip_separator(&mut chars)?;
        read_section(&mut chars, Section::VersionAndTimeHigh, &mut dst[6..8])?;
        skip_separator(&mut chars)?;
        read_section(&mut chars, Section::ClockSeqHiAndReserved, &mut dst[8..9])?;
        read_section(&mut chars, Section::ClockSeqLow, &mut dst[9..10])?;
        skip_separator(&mut chars)?;
        read_section(&mut chars, Section::Node, &mut dst[10..16])?;
        Ok(Self::from(dst))
    }

    /// Creates an object from the 8-4-4-4-12 hexadecimal string
    /// representation, requiring the version nibble to be 4.
    ///
    /// This is the strict companion of [`Uuid::parse()`]: the same decoding
    /// rules apply, followed by a version check that fails with
    /// [`ParseError::InvalidVersion`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4::{ParseError, Uuid};
    ///
    /// assert!(Uuid::parse_v4("d20a21dc-d2bc-4219-ae33-7d8b90e76920").is_ok());
    /// assert_eq!(
    ///     Uuid::parse_v4("01809424-3e59-7c05-9219-566f82fff672"),
    ///     Err(ParseError::InvalidVersion { expected: 4, actual: 7 })
    /// );
    /// ```
    pub fn parse_v4(src: &str) -> Result<Self, ParseError> {
        let parsed = Self::parse(src)?;
        if parsed.version() != 4 {
            return Err(ParseError::InvalidVersion {
                expected: 4,
                actual: parsed.version(),
            });
        }
        Ok(parsed)
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// Equivalent to [`Uuid::parse()`].
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse(src)
    }
}
