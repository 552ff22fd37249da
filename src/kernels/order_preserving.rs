//! This module contains the pure, stateless kernels for the order-preserving
//! string packing scheme used by the 4-, 8-, and 16-byte width classes.
//!
//! A value of length `< w` is packed into a `w`-byte big-endian buffer:
//! content left-aligned in the leading `w - 1` bytes (zero-filled), length in
//! the final, lowest-order byte. Converting that buffer to the native integer
//! yields an encoding whose unsigned numeric order matches the lexicographic
//! byte order of the originals: equal prefixes are resolved by the padding
//! zeros up to the shorter value's length, and the length byte breaks any
//! remaining prefix tie. This module is PURE RUST and panic-free.

use crate::error::PackstrError;
use crate::traits::{BeBytes, StringValue};
use crate::types::{InlineValue, MAX_WIDTH};

/// Encodes a single value into the backing integer `T`.
///
/// Precondition: `value.size() < T::WIDTH`. A violation fails with
/// `PackstrError::Oversize` and must abort the enclosing batch; the caller's
/// width selection is supposed to have made it impossible.
pub fn encode<T, V>(value: &V) -> Result<T, PackstrError>
where
    T: BeBytes,
    V: StringValue + ?Sized,
{
    let size = value.size();
    if size >= T::WIDTH {
        return Err(PackstrError::Oversize {
            size,
            width: T::WIDTH,
        });
    }

    let mut buf = [0u8; MAX_WIDTH];
    buf[..size].copy_from_slice(value.bytes());
    buf[T::WIDTH - 1] = size as u8;
    Ok(T::from_be_buf(&buf[..T::WIDTH]))
}

/// Decodes a single backing integer back into its value.
///
/// Total: every bit pattern decodes. The length byte of a pattern the
/// encoder never produced can exceed the class capacity; it is clamped so
/// the (meaningless but defined) result stays in bounds.
pub fn decode<T>(encoded: T) -> InlineValue
where
    T: BeBytes,
{
    let mut buf = [0u8; MAX_WIDTH];
    encoded.to_be_buf(&mut buf[..T::WIDTH]);
    let size = (buf[T::WIDTH - 1] as usize).min(T::WIDTH - 1);
    InlineValue::from_bytes(&buf[..size])
}
