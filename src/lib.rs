//! A compact UUID version 4 value type with a canonical string codec
//!
//! ```rust
//! use uuid4::uuid4;
//!
//! let uuid = uuid4();
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//! ```
//!
//! # Field and bit layout
//!
//! Generated identifiers have the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |             rand              |  ver  |         rand          |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                         rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 4-bit `ver` field is set at `0100`.
//! - The 2-bit `var` field is set at `10`.
//! - The remaining 122 `rand` bits are filled by the random number generator.
//!
//! # Parsing
//!
//! [`Uuid`] parses from and formats to the 8-4-4-4-12 canonical hexadecimal
//! representation, with parse failures classified by [`ParseError`] kind:
//!
//! ```rust
//! use uuid4::{ParseError, Uuid};
//!
//! let uuid = "d20a21dc-d2bc-4219-ae33-7d8b90e76920".parse::<Uuid>()?;
//! assert_eq!(uuid.version(), 4);
//!
//! assert_eq!(
//!     Uuid::parse("d20a21dc"),
//!     Err(ParseError::InvalidLength { expected: 36, actual: 8 })
//! );
//! # Ok::<(), uuid4::ParseError>(())
//! ```
//!
//! # Crate features
//!
//! - `std` (default): enables the [`uuid4()`] entry point backed by a
//!   thread-local random number generator, `String` conversions, and
//!   `std::error::Error` for [`ParseError`]. Without it, the crate is `no_std`
//!   and generation requires an explicit [`V4Generator`].
//! - `serde`: string/bytes serialization support.
//! - `uuid`: conversions to and from the `uuid` crate's type.

#![cfg_attr(not(feature = "std"), no_std)]

mod id;
pub use id::Uuid;

mod parse;
pub use parse::{ParseError, Section};

mod generator;
pub use generator::V4Generator;

mod entry;
#[cfg(feature = "std")]
pub use entry::uuid4;
