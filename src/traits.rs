//! This module defines the shared trait seams used across the kernels, the
//! batch adapter, and the bridge.
//!
//! The codec never touches a concrete string memory layout: everything it
//! needs from an original value comes through `StringValue`, and everything
//! it produces while decoding leaves through a `ValueSink`.

use num_traits::{PrimInt, Unsigned};

use crate::error::PackstrError;
use crate::types::InlineValue;

/// The accessor contract for an original value, regardless of whether the
/// caller stores it inline, in an arena, or in a separate heap allocation.
pub trait StringValue {
    /// Number of content bytes.
    fn size(&self) -> usize;

    /// The content bytes; `bytes().len() == size()`.
    fn bytes(&self) -> &[u8];
}

impl StringValue for [u8] {
    fn size(&self) -> usize {
        self.len()
    }
    fn bytes(&self) -> &[u8] {
        self
    }
}

impl StringValue for str {
    fn size(&self) -> usize {
        self.len()
    }
    fn bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl StringValue for Vec<u8> {
    fn size(&self) -> usize {
        self.len()
    }
    fn bytes(&self) -> &[u8] {
        self.as_slice()
    }
}

impl StringValue for String {
    fn size(&self) -> usize {
        self.len()
    }
    fn bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<V: StringValue + ?Sized> StringValue for &V {
    fn size(&self) -> usize {
        (**self).size()
    }
    fn bytes(&self) -> &[u8] {
        (**self).bytes()
    }
}

/// A destination for decoded values. The sink owns the backing storage for
/// every value it hands out, whether that storage is inline or heap-backed;
/// the codec only ever lends it a byte slice.
pub trait ValueSink {
    fn push_value(&mut self, bytes: &[u8]);
}

/// The simplest possible sink: one owned allocation per decoded value.
impl ValueSink for Vec<Vec<u8>> {
    fn push_value(&mut self, bytes: &[u8]) {
        self.push(bytes.to_vec());
    }
}

/// Glue between a backing unsigned integer and its big-endian byte buffer.
///
/// The order-preserving kernel is generic over this trait; the byte-order
/// reversal it implies on little-endian hardware is exactly what makes
/// unsigned comparison of encodings match lexicographic byte order.
pub trait BeBytes: PrimInt + Unsigned {
    /// Byte width of the backing integer.
    const WIDTH: usize;

    /// Reads `Self::WIDTH` big-endian bytes from the front of `buf`.
    fn from_be_buf(buf: &[u8]) -> Self;

    /// Writes `Self::WIDTH` big-endian bytes to the front of `buf`.
    fn to_be_buf(self, buf: &mut [u8]);
}

macro_rules! impl_be_bytes {
    ($T:ty) => {
        impl BeBytes for $T {
            const WIDTH: usize = std::mem::size_of::<$T>();

            fn from_be_buf(buf: &[u8]) -> Self {
                let mut raw = [0u8; std::mem::size_of::<$T>()];
                raw.copy_from_slice(&buf[..std::mem::size_of::<$T>()]);
                <$T>::from_be_bytes(raw)
            }

            fn to_be_buf(self, buf: &mut [u8]) {
                buf[..std::mem::size_of::<$T>()].copy_from_slice(&self.to_be_bytes());
            }
        }
    };
}

impl_be_bytes!(u32);
impl_be_bytes!(u64);
impl_be_bytes!(u128);

/// Unifies the compact and order-preserving schemes behind a single pair of
/// entry points, keyed by the backing integer type. `batch` and `registry`
/// dispatch exclusively through this trait.
pub trait FixedWidthCodec: Copy {
    /// Byte width of the class this integer backs.
    const WIDTH: usize;

    /// Encodes one value, or fails with `PackstrError::Oversize`.
    fn encode_value<V: StringValue + ?Sized>(value: &V) -> Result<Self, PackstrError>;

    /// Decodes one value. Total: defined for every bit pattern.
    fn decode_value(self) -> InlineValue;
}
