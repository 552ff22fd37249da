//! This module defines `InlineValue`, the small-string representation used
//! for decoded results.
//!
//! Every width class reconstructs at most `MAX_WIDTH - 1` content bytes, so a
//! decoded value always fits inline; callers that need heap-backed storage
//! (e.g. a columnar builder) copy out of it through a `ValueSink`.

use std::fmt;

use crate::traits::StringValue;
use crate::types::MAX_WIDTH;

/// A decoded string held entirely in an inline fixed buffer.
///
/// Bytes past `len` are always zero, which keeps the derived equality and
/// hash impls consistent.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct InlineValue {
    len: u8,
    data: [u8; MAX_WIDTH - 1],
}

impl InlineValue {
    /// The longest value any width class can reconstruct.
    pub const CAPACITY: usize = MAX_WIDTH - 1;

    /// The empty value.
    pub const fn empty() -> Self {
        Self {
            len: 0,
            data: [0; Self::CAPACITY],
        }
    }

    /// Builds an inline value from `bytes`. The kernels only ever pass at
    /// most `width - 1` bytes here.
    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        debug_assert!(bytes.len() <= Self::CAPACITY);
        let mut data = [0u8; Self::CAPACITY];
        data[..bytes.len()].copy_from_slice(bytes);
        Self {
            len: bytes.len() as u8,
            data,
        }
    }

    /// The content bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl StringValue for InlineValue {
    fn size(&self) -> usize {
        self.len()
    }
    fn bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for InlineValue {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for InlineValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InlineValue({:?})", self.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value() {
        let value = InlineValue::empty();
        assert!(value.is_empty());
        assert_eq!(value.as_bytes(), b"");
    }

    #[test]
    fn test_from_bytes_preserves_content() {
        let value = InlineValue::from_bytes(b"hello");
        assert_eq!(value.len(), 5);
        assert_eq!(value.as_bytes(), b"hello");
    }

    #[test]
    fn test_equality_ignores_nothing_past_len() {
        // Two values with the same content built from different slices
        // (tail bytes are always zeroed) must compare equal.
        let a = InlineValue::from_bytes(b"abc");
        let b = InlineValue::from_bytes(&b"abcdef"[..3]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_max_capacity_value() {
        let bytes = [0xABu8; InlineValue::CAPACITY];
        let value = InlineValue::from_bytes(&bytes);
        assert_eq!(value.len(), InlineValue::CAPACITY);
        assert_eq!(value.as_bytes(), &bytes[..]);
    }
}
