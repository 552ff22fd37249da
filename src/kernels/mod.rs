//! The pure, stateless encode/decode kernels.
//!
//! Two schemes exist: `order_preserving` for the 4/8/16-byte classes and
//! `compact` for the 1/2-byte classes. This module also wires both schemes
//! into the `FixedWidthCodec` trait, one impl per backing integer, which is
//! the only surface `batch` and `registry` dispatch through.

pub mod compact;
pub mod order_preserving;

use crate::error::PackstrError;
use crate::traits::{FixedWidthCodec, StringValue};
use crate::types::InlineValue;

impl FixedWidthCodec for u8 {
    const WIDTH: usize = 1;

    fn encode_value<V: StringValue + ?Sized>(value: &V) -> Result<Self, PackstrError> {
        compact::encode_u8(value)
    }

    fn decode_value(self) -> InlineValue {
        compact::decode_u8(self)
    }
}

impl FixedWidthCodec for u16 {
    const WIDTH: usize = 2;

    fn encode_value<V: StringValue + ?Sized>(value: &V) -> Result<Self, PackstrError> {
        compact::encode_u16(value)
    }

    fn decode_value(self) -> InlineValue {
        compact::decode_u16(self)
    }
}

macro_rules! impl_order_preserving_codec {
    ($T:ty) => {
        impl FixedWidthCodec for $T {
            const WIDTH: usize = std::mem::size_of::<$T>();

            fn encode_value<V: StringValue + ?Sized>(value: &V) -> Result<Self, PackstrError> {
                order_preserving::encode::<$T, _>(value)
            }

            fn decode_value(self) -> InlineValue {
                order_preserving::decode(self)
            }
        }
    };
}

impl_order_preserving_codec!(u32);
impl_order_preserving_codec!(u64);
impl_order_preserving_codec!(u128);
