//! This module contains the pure, stateless kernels for the compact packing
//! scheme used by the 1- and 2-byte width classes.
//!
//! These widths are reserved for very short strings where only exact
//! reconstruction matters: the arithmetic packing is cheaper than the
//! big-endian layout of the wider classes, but gives up order preservation.
//! A 1-byte encoding is entirely consumed by length metadata, so only the
//! empty string fits.

use crate::error::PackstrError;
use crate::traits::StringValue;
use crate::types::InlineValue;

/// Encodes into the 1-byte class. Only the empty value fits.
pub fn encode_u8(value: &(impl StringValue + ?Sized)) -> Result<u8, PackstrError> {
    let size = value.size();
    if size != 0 {
        return Err(PackstrError::Oversize { size, width: 1 });
    }
    Ok(0)
}

/// Decodes from the 1-byte class. Always the empty value.
pub fn decode_u8(_encoded: u8) -> InlineValue {
    InlineValue::empty()
}

/// Encodes into the 2-byte class: `length + first_byte` as plain addition.
///
/// The empty case is handled before any byte is read, so the encoding never
/// depends on what an empty value's representation happens to contain.
pub fn encode_u16(value: &(impl StringValue + ?Sized)) -> Result<u16, PackstrError> {
    match value.size() {
        0 => Ok(0),
        1 => Ok(1 + value.bytes()[0] as u16),
        size => Err(PackstrError::Oversize { size, width: 2 }),
    }
}

/// Decodes from the 2-byte class. Total: patterns above 256 are not
/// encoder-produced; their low byte is taken so the result stays defined.
pub fn decode_u16(encoded: u16) -> InlineValue {
    if encoded == 0 {
        InlineValue::empty()
    } else {
        InlineValue::from_bytes(&[(encoded - 1) as u8])
    }
}
