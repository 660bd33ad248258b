//! Error types for the RLP codec

use alloc::boxed::Box;

/// Errors that can occur while decoding (and, for signed integers, encoding) RLP
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A declared length or length-of-length claims more bytes than the buffer holds
    #[error("truncated input: expected {expected}B, got {available}B")]
    TruncatedInput {
        /// Bytes the prefix declared
        expected: usize,
        /// Bytes actually present after the prefix
        available: usize,
    },
    /// A length-of-length field decodes to a value that does not fit in `usize`
    #[error("encoded item length exceeds the representable range")]
    LengthOverflow,
    /// A list element failed to decode
    #[error("unable to decode element {position}: {cause}")]
    MalformedElement {
        /// Position of the element inside its list
        position: usize,
        /// Why the element failed
        cause: Box<Error>,
    },
    /// The buffer continues past the end of the top-level item
    #[error("trailing bytes: item ends at {consumed}B, buffer is {total}B")]
    TrailingBytes {
        /// Bytes covered by the top-level item
        consumed: usize,
        /// Total buffer length
        total: usize,
    },
    /// Lists are nested deeper than the configured limit
    #[error("list nesting exceeds depth limit {limit}")]
    DepthLimitExceeded {
        /// Configured maximum depth
        limit: usize,
    },
    /// Negative integers have no RLP representation
    #[error("negative integer {0} cannot be encoded")]
    NegativeInteger(i64),
    /// Work was abandoned because an earlier sibling already failed.
    ///
    /// Never returned from the top-level decode entry points.
    #[error("decode cancelled after a sibling element failed")]
    Cancelled,
}

impl Error {
    /// Returns a human-readable description of the error kind
    pub const fn description(&self) -> &'static str {
        match self {
            Error::TruncatedInput { .. } => "declared length exceeds available input",
            Error::LengthOverflow => "item length overflows usize",
            Error::MalformedElement { .. } => "list element failed to decode",
            Error::TrailingBytes { .. } => "unexpected bytes after top-level item",
            Error::DepthLimitExceeded { .. } => "list nesting too deep",
            Error::NegativeInteger(_) => "negative integer is not representable",
            Error::Cancelled => "cancelled after sibling failure",
        }
    }

    /// Follows `MalformedElement` wrappers down to the innermost cause
    pub fn root_cause(&self) -> &Error {
        let mut current = self;
        while let Error::MalformedElement { cause, .. } = current {
            current = cause;
        }
        current
    }

    /// Positions of the nested elements leading to the root cause, outermost first
    pub fn element_path(&self) -> alloc::vec::Vec<usize> {
        let mut path = alloc::vec::Vec::new();
        let mut current = self;
        while let Error::MalformedElement { position, cause } = current {
            path.push(*position);
            current = cause;
        }
        path
    }

    /// True when the failure means the input ended early, at any depth
    pub fn is_truncated(&self) -> bool {
        matches!(self.root_cause(), Error::TruncatedInput { .. })
    }

    pub(crate) fn truncated(expected: usize, available: usize) -> Self {
        Error::TruncatedInput {
            expected,
            available,
        }
    }

    pub(crate) fn element(position: usize, cause: Error) -> Self {
        Error::MalformedElement {
            position,
            cause: Box::new(cause),
        }
    }
}

/// Result type alias for RLP operations
pub type Result<T> = core::result::Result<T, Error>;
