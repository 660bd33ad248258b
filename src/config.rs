//! Decoder configuration

/// Default limit on list nesting
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Policies applied by [`Decoder`](crate::Decoder)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Maximum list nesting depth; the top-level item is depth 0
    pub max_depth: usize,
    /// Accept bytes after the top-level item instead of failing with `TrailingBytes`
    pub allow_trailing_bytes: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_trailing_bytes: false,
        }
    }
}

impl DecoderConfig {
    /// Set the maximum list nesting depth
    #[inline]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Choose whether trailing bytes after the top-level item are ignored
    #[inline]
    pub fn with_trailing_bytes(mut self, allow: bool) -> Self {
        self.allow_trailing_bytes = allow;
        self
    }
}
