//! Item header classification
//!
//! Every RLP item starts with a prefix byte that determines its kind. Long
//! forms are followed by a big-endian length-of-length field. Classification
//! only inspects the prefix and never slices past the end of the buffer.

use core::ops::Range;

use crate::error::{Error, Result};
use crate::length;

/// Base prefix for byte-strings up to 55 bytes
pub const SHORT_STRING_BASE: u8 = 0x80;
/// Base prefix for long-form byte-strings
pub const LONG_STRING_BASE: u8 = 0xb7;
/// Base prefix for lists whose payload is up to 55 bytes
pub const SHORT_LIST_BASE: u8 = 0xc0;
/// Base prefix for long-form lists
pub const LONG_LIST_BASE: u8 = 0xf7;
/// Largest payload that still fits a short-form prefix
pub const MAX_SHORT_PAYLOAD: usize = 55;

/// Kind of the item at the start of a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// The buffer was empty
    Empty,
    /// A byte in `0x00..=0x7f` that is its own encoding
    SingleByte,
    /// Byte-string with a 0..=55 byte payload
    ShortBytes,
    /// Byte-string with a length-of-length field
    LongBytes,
    /// List with a 0..=55 byte payload
    ShortList,
    /// List with a length-of-length field
    LongList,
}

impl Kind {
    /// True for the two list kinds
    #[inline]
    pub const fn is_list(self) -> bool {
        matches!(self, Kind::ShortList | Kind::LongList)
    }
}

/// Metadata of a single RLP item
///
/// `length` counts everything after the prefix byte, including the `offset`
/// length-of-length bytes of long forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Item kind
    pub kind: Kind,
    /// Number of length-of-length bytes after the prefix (0 for short forms)
    pub offset: usize,
    /// Bytes after the prefix byte, `offset` included
    pub length: usize,
}

impl Header {
    /// Classify the item at the start of `buf`
    ///
    /// Fails with `TruncatedInput` when the prefix declares more bytes than the
    /// buffer holds. For long forms the check happens twice, once for the
    /// length-of-length field and once for the payload it announces.
    pub fn classify(buf: &[u8]) -> Result<Self> {
        let Some(&prefix) = buf.first() else {
            return Ok(Self {
                kind: Kind::Empty,
                offset: 0,
                length: 0,
            });
        };
        let available = buf.len() - 1;

        let header = match prefix {
            0x00..=0x7f => Self {
                kind: Kind::SingleByte,
                offset: 0,
                length: 1,
            },
            0x80..=0xb7 => Self::short(Kind::ShortBytes, prefix - SHORT_STRING_BASE, available)?,
            0xb8..=0xbf => Self::long(Kind::LongBytes, prefix - LONG_STRING_BASE, buf)?,
            0xc0..=0xf7 => Self::short(Kind::ShortList, prefix - SHORT_LIST_BASE, available)?,
            0xf8..=0xff => Self::long(Kind::LongList, prefix - LONG_LIST_BASE, buf)?,
        };

        tracing::trace!(
            kind = ?header.kind,
            offset = header.offset,
            length = header.length,
            "classified item"
        );
        Ok(header)
    }

    fn short(kind: Kind, length: u8, available: usize) -> Result<Self> {
        let length = usize::from(length);
        if length > available {
            return Err(Error::truncated(length, available));
        }
        Ok(Self {
            kind,
            offset: 0,
            length,
        })
    }

    fn long(kind: Kind, length_bytes: u8, buf: &[u8]) -> Result<Self> {
        let offset = usize::from(length_bytes);
        let available = buf.len() - 1;
        if offset > available {
            return Err(Error::truncated(offset, available));
        }

        let payload_len = length::decode_length(&buf[1..1 + offset])?;
        let remaining = available - offset;
        if payload_len > remaining {
            return Err(Error::truncated(payload_len, remaining));
        }

        Ok(Self {
            kind,
            offset,
            length: offset + payload_len,
        })
    }

    /// Bytes occupied on the wire by this item, prefix included
    #[inline]
    pub const fn encoded_len(&self) -> usize {
        match self.kind {
            Kind::Empty => 0,
            Kind::SingleByte => 1,
            _ => 1 + self.length,
        }
    }

    /// Length of the payload alone (list body or string contents)
    #[inline]
    pub const fn payload_len(&self) -> usize {
        match self.kind {
            Kind::SingleByte => 1,
            _ => self.length - self.offset,
        }
    }

    /// Range of the payload inside the buffer that was classified
    #[inline]
    pub const fn payload_range(&self) -> Range<usize> {
        match self.kind {
            Kind::Empty => 0..0,
            Kind::SingleByte => 0..1,
            _ => self.offset + 1..self.length + 1,
        }
    }
}
