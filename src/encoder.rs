//! Canonical RLP encoder
//!
//! Scalars are encoded as byte-strings of their minimal big-endian
//! representation. Lists are built bottom-up: `encode_array` takes children
//! that are already RLP encoded and only adds the list prefix.

use alloc::vec::Vec;
use core::convert::Infallible;

use crate::error::{Error, Result};
use crate::header::{
    LONG_LIST_BASE, LONG_STRING_BASE, MAX_SHORT_PAYLOAD, SHORT_LIST_BASE, SHORT_STRING_BASE,
};
use crate::length;
use crate::pool::TaskPool;
use crate::{EMPTY_LIST_CODE, EMPTY_STRING_CODE};

/// Write the prefix for a payload of `len` bytes
///
/// `short_base` is `0x80` for byte-strings and `0xc0` for lists; the long-form
/// base is `short_base + 55`.
#[inline]
fn put_header(out: &mut Vec<u8>, short_base: u8, long_base: u8, len: usize) {
    if len <= MAX_SHORT_PAYLOAD {
        out.push(short_base + len as u8);
        return;
    }

    let (buf, len_bytes) = length::encode_length(len as u64);
    out.push(long_base + len_bytes as u8);
    out.extend_from_slice(length::minimal_be(&buf, len_bytes));
}

/// Size of the prefix for a payload of `len` bytes
#[inline]
pub fn header_len(len: usize) -> usize {
    if len <= MAX_SHORT_PAYLOAD {
        1
    } else {
        1 + length::encode_length(len as u64).1
    }
}

/// Encode a single byte
#[inline]
pub fn encode_byte(byte: u8) -> Vec<u8> {
    if byte < SHORT_STRING_BASE {
        alloc::vec![byte]
    } else {
        alloc::vec![SHORT_STRING_BASE + 1, byte]
    }
}

/// Encode a byte-string
pub fn encode_bytes(bytes: &[u8]) -> Vec<u8> {
    match bytes {
        [] => alloc::vec![EMPTY_STRING_CODE],
        [byte] => encode_byte(*byte),
        _ => {
            let mut out = Vec::with_capacity(header_len(bytes.len()) + bytes.len());
            put_header(&mut out, SHORT_STRING_BASE, LONG_STRING_BASE, bytes.len());
            out.extend_from_slice(bytes);
            out
        }
    }
}

/// Encode UTF-8 text as a byte-string
#[inline]
pub fn encode_string(text: &str) -> Vec<u8> {
    encode_bytes(text.as_bytes())
}

/// Encode a boolean: `0x01` for true, the empty string for false
#[inline]
pub fn encode_bool(flag: bool) -> Vec<u8> {
    if flag {
        alloc::vec![0x01]
    } else {
        alloc::vec![EMPTY_STRING_CODE]
    }
}

/// Encode an unsigned integer with no leading zero bytes
#[inline]
pub fn encode_uint(value: u64) -> Vec<u8> {
    let (buf, len) = length::encode_length(value);
    encode_bytes(length::minimal_be(&buf, len))
}

/// Encode a signed integer
///
/// Fails with `NegativeInteger` for values below zero.
pub fn encode_int(value: i64) -> Result<Vec<u8>> {
    u64::try_from(value)
        .map(encode_uint)
        .map_err(|_| Error::NegativeInteger(value))
}

/// Encode an arbitrary precision unsigned integer
#[cfg(feature = "bigint")]
pub fn encode_bigint(value: &num_bigint::BigUint) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    // BigUint renders zero as a single 0x00 byte
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    encode_bytes(&bytes[start..])
}

/// Wrap already-encoded children in a list prefix
///
/// Children are concatenated as given; they are not validated.
pub fn encode_array<B: AsRef<[u8]>>(children: &[B]) -> Vec<u8> {
    if children.is_empty() {
        return alloc::vec![EMPTY_LIST_CODE];
    }

    let payload_len: usize = children.iter().map(|child| child.as_ref().len()).sum();
    let mut out = Vec::with_capacity(header_len(payload_len) + payload_len);
    put_header(&mut out, SHORT_LIST_BASE, LONG_LIST_BASE, payload_len);
    for child in children {
        out.extend_from_slice(child.as_ref());
    }
    out
}

/// Encode each raw item as a byte-string, in parallel, and wrap them in a list
pub fn encode_byte_strings<B: AsRef<[u8]> + Sync>(items: &[B]) -> Vec<u8> {
    let inputs: Vec<&[u8]> = items.iter().map(AsRef::as_ref).collect();

    let pool = TaskPool::new();
    // Infallible jobs on a top-level pool never interrupt.
    let children = pool
        .run(inputs, |_, item| Ok::<_, Infallible>(encode_bytes(item)))
        .unwrap_or_else(|_| items.iter().map(|item| encode_bytes(item.as_ref())).collect());

    encode_array(&children)
}
