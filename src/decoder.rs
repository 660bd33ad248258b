//! Recursive RLP decoder
//!
//! The decoder classifies the top-level item, slices out its payload and, for
//! lists, partitions the body into child items before any child is decoded.
//! Children are then decoded as independent jobs on a [`TaskPool`] and
//! reassembled in their original order.

use alloc::vec::Vec;

use crate::config::DecoderConfig;
use crate::error::{Error, Result};
use crate::header::{Header, Kind};
use crate::pool::{Interrupted, Slot, TaskPool};
use crate::value::Value;

/// Decode a complete RLP buffer with the default configuration
///
/// Fails with `TrailingBytes` if the buffer continues past the top-level item.
#[inline]
pub fn decode(buf: &[u8]) -> Result<Value> {
    Decoder::new().decode(buf)
}

/// Decode a complete RLP buffer with a custom configuration
#[inline]
pub fn decode_with(buf: &[u8], config: DecoderConfig) -> Result<Value> {
    Decoder::with_config(config).decode(buf)
}

/// Bounds-checked tree decoder
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Create a decoder with the default configuration
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with the given configuration
    #[inline]
    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[inline]
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode `buf` into a value tree
    ///
    /// Decoding is all-or-nothing: on error no partial tree is returned.
    pub fn decode(&self, buf: &[u8]) -> Result<Value> {
        let header = Header::classify(buf)?;
        if header.kind == Kind::Empty {
            return Err(Error::truncated(1, 0));
        }

        let consumed = header.encoded_len();
        if consumed < buf.len() && !self.config.allow_trailing_bytes {
            return Err(Error::TrailingBytes {
                consumed,
                total: buf.len(),
            });
        }

        let item = buf.get(..consumed).ok_or(Error::truncated(consumed, buf.len()))?;
        self.decode_item(item, header, 0, None).inspect_err(|err| {
            tracing::debug!(
                error = %err,
                path = ?err.element_path(),
                len = buf.len(),
                "rlp decode failed"
            );
        })
    }

    fn decode_item(
        &self,
        item: &[u8],
        header: Header,
        depth: usize,
        parent: Option<Slot<'_>>,
    ) -> Result<Value> {
        let payload = item
            .get(header.payload_range())
            .ok_or(Error::truncated(header.length, item.len().saturating_sub(1)))?;

        match header.kind {
            Kind::Empty => Err(Error::truncated(1, 0)),
            Kind::SingleByte | Kind::ShortBytes | Kind::LongBytes => {
                Ok(Value::ByteString(payload.to_vec()))
            }
            Kind::ShortList | Kind::LongList => self.decode_list(payload, depth, parent),
        }
    }

    fn decode_list(&self, body: &[u8], depth: usize, parent: Option<Slot<'_>>) -> Result<Value> {
        if depth >= self.config.max_depth {
            return Err(Error::DepthLimitExceeded {
                limit: self.config.max_depth,
            });
        }

        let children = split_children(body)?;
        tracing::trace!(depth, children = children.len(), "decoding list");

        let pool = match parent {
            Some(slot) => TaskPool::nested(slot),
            None => TaskPool::new(),
        };

        pool.run(children, |slot, (header, item)| {
            self.decode_item(item, header, depth + 1, Some(slot))
        })
        .map(Value::List)
        .map_err(|interrupted| match interrupted {
            Interrupted::Failed {
                error: Error::Cancelled,
                ..
            }
            | Interrupted::Cancelled => Error::Cancelled,
            Interrupted::Failed { index, error } => Error::element(index, error),
        })
    }
}

/// Partition a list body into contiguous child items
///
/// The whole body is walked before anything is decoded, so a boundary error
/// in a late child aborts the list without dispatching any work.
fn split_children(body: &[u8]) -> Result<Vec<(Header, &[u8])>> {
    let mut children = Vec::new();
    let mut cursor = 0;

    while let Some(rest) = body.get(cursor..).filter(|rest| !rest.is_empty()) {
        let header = Header::classify(rest)?;
        let size = header.encoded_len();
        if size > rest.len() {
            return Err(Error::truncated(size, rest.len()));
        }

        children.push((header, &rest[..size]));
        cursor += size;
    }

    Ok(children)
}
