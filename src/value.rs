//! Decoded RLP values

use alloc::string::String;
use alloc::vec::Vec;

use crate::encoder;

/// Variant tag of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Leaf byte-string
    ByteString,
    /// Ordered list of values
    List,
}

/// A decoded RLP item
///
/// Equality is structural: same variant, same bytes, same children in the
/// same order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Raw byte-string, possibly empty
    ByteString(Vec<u8>),
    /// Ordered children
    List(Vec<Value>),
}

impl Value {
    /// Variant tag
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::ByteString(_) => ValueKind::ByteString,
            Value::List(_) => ValueKind::List,
        }
    }

    /// Bytes of a byte-string, `None` for lists
    #[inline]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::ByteString(bytes) => Some(bytes),
            Value::List(_) => None,
        }
    }

    /// Children of a list, `None` for byte-strings
    #[inline]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::ByteString(_) => None,
            Value::List(items) => Some(items),
        }
    }

    /// Take the bytes of a byte-string
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Value::ByteString(bytes) => Some(bytes),
            Value::List(_) => None,
        }
    }

    /// Take the children of a list
    pub fn into_list(self) -> Option<Vec<Value>> {
        match self {
            Value::ByteString(_) => None,
            Value::List(items) => Some(items),
        }
    }

    /// Interpret a byte-string as a big-endian unsigned integer
    ///
    /// The empty string is zero. Returns `None` for lists and for values wider
    /// than 8 bytes.
    pub fn to_u64(&self) -> Option<u64> {
        let bytes = self.as_bytes()?;
        if bytes.len() > 8 {
            return None;
        }
        Some(bytes.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b)))
    }

    /// Interpret a byte-string as a boolean (`0x01` true, empty false)
    pub fn to_bool(&self) -> Option<bool> {
        match self.as_bytes()? {
            [] => Some(false),
            [0x01] => Some(true),
            _ => None,
        }
    }

    /// Borrow a byte-string as UTF-8 text
    pub fn to_utf8(&self) -> Option<&str> {
        core::str::from_utf8(self.as_bytes()?).ok()
    }

    /// Copy a byte-string into an owned `String`
    pub fn to_string_lossy(&self) -> Option<String> {
        self.as_bytes()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Interpret a byte-string as an arbitrary precision unsigned integer
    #[cfg(feature = "bigint")]
    pub fn to_biguint(&self) -> Option<num_bigint::BigUint> {
        self.as_bytes().map(num_bigint::BigUint::from_bytes_be)
    }

    /// Canonical encoding of this tree, built bottom-up
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Value::ByteString(bytes) => encoder::encode_bytes(bytes),
            Value::List(items) => {
                let children: Vec<Vec<u8>> = items.iter().map(Value::encode).collect();
                encoder::encode_array(&children)
            }
        }
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::ByteString(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::ByteString(bytes.to_vec())
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::ByteString(text.as_bytes().to_vec())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}
