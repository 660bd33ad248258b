//! Big-endian length encoding
//!
//! Long-form RLP prefixes carry the payload length as 1..=8 big-endian bytes
//! with no leading zeros. This module converts between that representation
//! and native integers.

use crate::error::{Error, Result};

/// Maximum number of length bytes a long-form prefix can announce
pub const MAX_LENGTH_BYTES: usize = 8;

/// Decode a big-endian length field
///
/// Returns Error::LengthOverflow if the value cannot be represented as `usize`.
/// An empty field decodes to zero.
#[inline]
pub fn decode_length(buf: &[u8]) -> Result<usize> {
    if buf.len() > MAX_LENGTH_BYTES {
        return Err(Error::LengthOverflow);
    }

    let mut value = 0u64;
    for &byte in buf {
        value = (value << 8) | u64::from(byte);
    }

    usize::try_from(value).map_err(|_| Error::LengthOverflow)
}

/// Encode a length as minimal big-endian bytes
///
/// Returns the backing array and the number of significant trailing bytes;
/// the encoding is `buf[MAX_LENGTH_BYTES - len..]`. Zero encodes to no bytes.
#[inline]
pub fn encode_length(value: u64) -> ([u8; MAX_LENGTH_BYTES], usize) {
    let buf = value.to_be_bytes();
    let len = MAX_LENGTH_BYTES - (value.leading_zeros() as usize / 8);
    (buf, len)
}

/// Minimal big-endian bytes of `value` as a slice view over `buf`
#[inline]
pub(crate) fn minimal_be(buf: &[u8; MAX_LENGTH_BYTES], len: usize) -> &[u8] {
    &buf[MAX_LENGTH_BYTES - len..]
}
