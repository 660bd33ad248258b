//! rlpar: Recursive Length Prefix codec with a parallel tree decoder
//!
//! RLP encodes arbitrarily nested lists of byte-strings into a flat buffer.
//! This crate decodes such buffers into a [`Value`] tree with strict bounds
//! checking, decoding sibling list elements concurrently while preserving
//! their order, and encodes scalars and lists canonically.
//!
//! # Wire Format
//!
//! ```text
//! +-------------+---------------------------------------------------+
//! | 0x00..=0x7f | the byte itself                                   |
//! | 0x80..=0xb7 | byte-string, payload length = prefix - 0x80       |
//! | 0xb8..=0xbf | byte-string, (prefix - 0xb7) big-endian len bytes |
//! | 0xc0..=0xf7 | list, payload length = prefix - 0xc0              |
//! | 0xf8..=0xff | list, (prefix - 0xf7) big-endian len bytes        |
//! +-------------+---------------------------------------------------+
//! ```
//!
//! # Features
//!
//! - Bounds-checked decoding; malformed input yields a typed [`Error`]
//! - List elements decoded in parallel on rayon, results reassembled in order
//! - Sibling work cancelled once an earlier element fails
//! - Canonical encoding for bytes, strings, booleans and integers
//! - `no_std` support with `alloc` (sequential decoding)
//!
//! Lists are encoded bottom-up: encode every child first, then pass the
//! encoded children to [`encode_array`].
//!
//! # Example
//!
//! ```rust
//! use rlpar::*;
//!
//! let encoded = encode_array(&[
//!     encode_string("cat"),
//!     encode_array(&[encode_uint(1024)]),
//!     encode_bool(true),
//! ]);
//!
//! let value = decode(&encoded)?;
//! let items = value.as_list().unwrap();
//! assert_eq!(items[0].to_utf8(), Some("cat"));
//! assert_eq!(items[1].as_list().unwrap()[0].to_u64(), Some(1024));
//! assert_eq!(items[2].to_bool(), Some(true));
//! # Ok::<(), rlpar::Error>(())
//! ```

#![no_std]
#![deny(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod header;
pub mod length;
pub mod pool;
pub mod value;

// Re-export main types
pub use config::DecoderConfig;
pub use decoder::{decode, decode_with, Decoder};
#[cfg(feature = "bigint")]
pub use encoder::encode_bigint;
pub use encoder::{
    encode_array, encode_bool, encode_byte, encode_byte_strings, encode_bytes, encode_int,
    encode_string, encode_uint,
};
pub use error::{Error, Result};
pub use header::{Header, Kind};
pub use value::{Value, ValueKind};

/// Encoding of the empty byte-string
pub const EMPTY_STRING_CODE: u8 = 0x80;

/// Encoding of the empty list
pub const EMPTY_LIST_CODE: u8 = 0xc0;
