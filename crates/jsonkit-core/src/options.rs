//! Limits applied by the encoder and decoder.

/// Container nesting accepted by [`decode`](crate::decode) before it fails
/// with [`ErrorKind::DepthExceeded`](crate::ErrorKind::DepthExceeded).
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Settings for [`decode_with`](crate::decode_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Deepest container nesting accepted; a top-level array or object is depth 1.
    pub max_depth: usize,
}

impl DecodeOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Settings for [`encode_with`](crate::encode_with).
///
/// The default places no limit on nesting, matching [`encode`](crate::encode).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    pub max_depth: Option<usize>,
}

impl EncodeOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}
