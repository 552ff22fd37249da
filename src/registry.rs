//! The width registry: maps a runtime-selected `Width` to its encode/decode
//! implementation pair.
//!
//! Callers that know their width statically should use the per-width entry
//! points (`compress_u8` .. `compress_u128`) or the `FixedWidthCodec` trait
//! directly; `compress`/`decompress` exist for the planner-driven path where
//! the width only arrives at runtime, carried by `Width`/`EncodedValue`.

use crate::error::PackstrError;
use crate::traits::{FixedWidthCodec, StringValue};
use crate::types::{EncodedValue, InlineValue, Width};

/// Compresses one value at the given width class.
pub fn compress<V: StringValue + ?Sized>(
    width: Width,
    value: &V,
) -> Result<EncodedValue, PackstrError> {
    let encoded = match width {
        Width::W1 => EncodedValue::U8(u8::encode_value(value)?),
        Width::W2 => EncodedValue::U16(u16::encode_value(value)?),
        Width::W4 => EncodedValue::U32(u32::encode_value(value)?),
        Width::W8 => EncodedValue::U64(u64::encode_value(value)?),
        Width::W16 => EncodedValue::U128(u128::encode_value(value)?),
    };
    Ok(encoded)
}

/// Decompresses one value; the width class travels with the encoding.
pub fn decompress(encoded: EncodedValue) -> InlineValue {
    match encoded {
        EncodedValue::U8(e) => e.decode_value(),
        EncodedValue::U16(e) => e.decode_value(),
        EncodedValue::U32(e) => e.decode_value(),
        EncodedValue::U64(e) => e.decode_value(),
        EncodedValue::U128(e) => e.decode_value(),
    }
}

// Per-width entry points, named by backing integer type so each width class
// is individually discoverable.

pub fn compress_u8<V: StringValue + ?Sized>(value: &V) -> Result<u8, PackstrError> {
    u8::encode_value(value)
}

pub fn compress_u16<V: StringValue + ?Sized>(value: &V) -> Result<u16, PackstrError> {
    u16::encode_value(value)
}

pub fn compress_u32<V: StringValue + ?Sized>(value: &V) -> Result<u32, PackstrError> {
    u32::encode_value(value)
}

pub fn compress_u64<V: StringValue + ?Sized>(value: &V) -> Result<u64, PackstrError> {
    u64::encode_value(value)
}

pub fn compress_u128<V: StringValue + ?Sized>(value: &V) -> Result<u128, PackstrError> {
    u128::encode_value(value)
}

pub fn decompress_u8(encoded: u8) -> InlineValue {
    encoded.decode_value()
}

pub fn decompress_u16(encoded: u16) -> InlineValue {
    encoded.decode_value()
}

pub fn decompress_u32(encoded: u32) -> InlineValue {
    encoded.decode_value()
}

pub fn decompress_u64(encoded: u64) -> InlineValue {
    encoded.decode_value()
}

pub fn decompress_u128(encoded: u128) -> InlineValue {
    encoded.decode_value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_roundtrip_every_width() {
        for width in Width::ALL {
            // The longest value the class can hold.
            let value: Vec<u8> = (0..width.capacity() as u8).map(|i| b'a' + i).collect();
            let encoded = compress(width, value.as_slice()).unwrap();
            assert_eq!(encoded.width(), width);
            assert_eq!(decompress(encoded).as_bytes(), value.as_slice());
        }
    }

    #[test]
    fn test_dispatch_oversize_propagates() {
        let result = compress(Width::W4, &b"WXYZ"[..]);
        assert!(matches!(
            result,
            Err(PackstrError::Oversize { size: 4, width: 4 })
        ));
    }

    #[test]
    fn test_per_width_entry_points_agree_with_dispatch() {
        let value = &b"ab"[..];
        assert_eq!(
            EncodedValue::U32(compress_u32(value).unwrap()),
            compress(Width::W4, value).unwrap()
        );
        assert_eq!(
            EncodedValue::U64(compress_u64(value).unwrap()),
            compress(Width::W8, value).unwrap()
        );
        assert_eq!(
            decompress_u64(compress_u64(value).unwrap()).as_bytes(),
            value
        );
    }

    #[test]
    fn test_empty_value_encodes_to_zero_at_every_width() {
        for width in Width::ALL {
            let encoded = compress(width, &b""[..]).unwrap();
            assert_eq!(encoded.as_u128(), 0);
        }
    }
}
