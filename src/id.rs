//! The identifier value type and its canonical text formatter

#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, ops, str};

/// Represents a Universally Unique IDentifier.
///
/// The content is an opaque 16-byte array; no structure is enforced on it
/// beyond the field widths used by the canonical text codec. Version-4 bit
/// patterns are guaranteed only for identifiers produced by the generator.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the version number stored in the high nibble of byte 6.
    ///
    /// This is pure bit extraction: the result ranges over 0-15 and is not
    /// checked against the set of defined UUID versions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4::Uuid;
    ///
    /// let x = "d20a21dc-d2bc-4219-ae33-7d8b90e76920".parse::<Uuid>()?;
    /// assert_eq!(x.version(), 4);
    /// # Ok::<(), uuid4::ParseError>(())
    /// ```
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Writes the 8-4-4-4-12 canonical lowercase hexadecimal representation
    /// into a caller-supplied buffer and returns it as `&str`.
    ///
    /// Multi-byte fields are rendered big-endian: byte 0 contributes the
    /// most significant hex pair of the first group.
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is not exactly 36 bytes long. Buffer sizing is the
    /// caller's contract, not a recoverable condition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4::Uuid;
    ///
    /// let x = Uuid::from([0xd2, 0x0a, 0x21, 0xdc, 0xd2, 0xbc, 0x42, 0x19,
    ///                     0xae, 0x33, 0x7d, 0x8b, 0x90, 0xe7, 0x69, 0x20]);
    /// let mut buffer = [0u8; 36];
    /// assert_eq!(x.encode_to(&mut buffer), "d20a21dc-d2bc-4219-ae33-7d8b90e76920");
    /// ```
    pub fn encode_to<'a>(&self, buffer: &'a mut [u8]) -> &'a str {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        assert_eq!(buffer.len(), 36, "destination buffer must be 36 bytes");
        let mut buf_iter = buffer.iter_mut();
        for i in 0..16 {
            let e = self.0[i] as usize;
            *buf_iter.next().unwrap() = DIGITS[e >> 4];
            *buf_iter.next().unwrap() = DIGITS[e & 15];
            if i == 3 || i == 5 || i == 7 || i == 9 {
                *buf_iter.next().unwrap() = b'-';
            }
        }
        debug_assert!(buffer.is_ascii());
        unsafe { str::from_utf8_unchecked(buffer) }
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// This method is primarily for `no_std` environments where heap-allocated string types are
    /// not readily available. Use the [`fmt::Display`] trait usually to get the 8-4-4-4-12
    /// canonical hexadecimal string representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4::Uuid;
    ///
    /// let x = "d20a21dc-d2bc-4219-ae33-7d8b90e76920".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "d20a21dc-d2bc-4219-ae33-7d8b90e76920");
    /// assert_eq!(format!("{}", y), "d20a21dc-d2bc-4219-ae33-7d8b90e76920");
    /// # Ok::<(), uuid4::ParseError>(())
    /// ```
    pub fn encode(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        let mut buffer = [0u8; 36];
        self.encode_to(&mut buffer);
        UuidStr(buffer)
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

/// Concrete return type of [`Uuid::encode()`] containing the stack-allocated 8-4-4-4-12 string
/// representation.
struct UuidStr([u8; 36]);

impl ops::Deref for UuidStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        debug_assert!(self.0.is_ascii());
        unsafe { str::from_utf8_unchecked(&self.0) }
    }
}

impl fmt::Display for UuidStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

#[cfg(feature = "std")]
mod std_ext {
    use super::Uuid;
    use crate::ParseError;

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = ParseError;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }
}

#[cfg(feature = "uuid")]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Uuid;
        use serde_test::{assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases: &[(&str, &[u8; 16])] = &[
                ("00000000-0000-0000-0000-000000000000", &[0u8; 16]),
                (
                    "d20a21dc-d2bc-4219-ae33-7d8b90e76920",
                    &[
                        0xd2, 0x0a, 0x21, 0xdc, 0xd2, 0xbc, 0x42, 0x19, 0xae, 0x33, 0x7d, 0x8b,
                        0x90, 0xe7, 0x69, 0x20,
                    ],
                ),
                (
                    "2ca4b2ce-6c13-40d4-bccf-37d222820f6f",
                    &[
                        0x2c, 0xa4, 0xb2, 0xce, 0x6c, 0x13, 0x40, 0xd4, 0xbc, 0xcf, 0x37, 0xd2,
                        0x22, 0x82, 0x0f, 0x6f,
                    ],
                ),
                ("ffffffff-ffff-ffff-ffff-ffffffffffff", &[0xffu8; 16]),
            ];

            for &(text, bytes) in cases {
                let e = text.parse::<Uuid>().unwrap();
                assert_tokens(&e.readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }
    }
}
