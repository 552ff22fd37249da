//! Arrow adapters for the packstr codec.
//!
//! Compression accepts `Utf8` or `Binary` input and produces the width's
//! physical encoded array; decompression derives the width from the encoded
//! array's physical type and produces a `Binary` array. Null slots pass
//! through untouched in both directions; the codec only ever runs on valid
//! rows.

use std::sync::Arc;

use arrow::array::{
    Array, ArrayRef, BinaryArray, BinaryBuilder, FixedSizeBinaryArray, FixedSizeBinaryBuilder,
    PrimitiveArray, PrimitiveBuilder, StringArray,
};
use arrow::datatypes::{
    ArrowPrimitiveType, DataType, UInt16Type, UInt32Type, UInt64Type, UInt8Type,
};

use crate::error::PackstrError;
use crate::traits::{FixedWidthCodec, ValueSink};
use crate::types::Width;

/// The columnar binary builder is the heap-backed result sink: every decoded
/// value is copied into the builder's own values buffer.
impl ValueSink for BinaryBuilder {
    fn push_value(&mut self, bytes: &[u8]) {
        self.append_value(bytes);
    }
}

/// Compresses a string column into the given width class's encoded array.
///
/// Fail-fast: the first row over the class capacity aborts the whole array
/// with `PackstrError::Oversize`.
pub fn compress_array(width: Width, array: &dyn Array) -> Result<ArrayRef, PackstrError> {
    log::debug!(
        "compress_array: width={} rows={} nulls={}",
        width,
        array.len(),
        array.null_count()
    );
    match width {
        Width::W1 => compress_primitive::<UInt8Type>(array),
        Width::W2 => compress_primitive::<UInt16Type>(array),
        Width::W4 => compress_primitive::<UInt32Type>(array),
        Width::W8 => compress_primitive::<UInt64Type>(array),
        Width::W16 => compress_fixed_size_binary(array),
    }
}

/// Decompresses an encoded array back into a `Binary` array of the original
/// values. The width class is carried by the array's physical type.
pub fn decompress_array(array: &dyn Array) -> Result<ArrayRef, PackstrError> {
    let width = Width::from_arrow_type(array.data_type())?;
    log::debug!(
        "decompress_array: width={} rows={} nulls={}",
        width,
        array.len(),
        array.null_count()
    );

    let mut builder = BinaryBuilder::with_capacity(array.len(), array.len() * width.capacity());
    match width {
        Width::W1 => decompress_primitive::<UInt8Type>(array, &mut builder)?,
        Width::W2 => decompress_primitive::<UInt16Type>(array, &mut builder)?,
        Width::W4 => decompress_primitive::<UInt32Type>(array, &mut builder)?,
        Width::W8 => decompress_primitive::<UInt64Type>(array, &mut builder)?,
        Width::W16 => decompress_fixed_size_binary(array, &mut builder)?,
    }
    Ok(Arc::new(builder.finish()))
}

/// Runs `f` over every row of a `Utf8` or `Binary` array as raw bytes.
fn for_each_value<F>(array: &dyn Array, mut f: F) -> Result<(), PackstrError>
where
    F: FnMut(Option<&[u8]>) -> Result<(), PackstrError>,
{
    match array.data_type() {
        DataType::Utf8 => {
            let strings = array
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or_else(|| downcast_failure("Utf8", "StringArray"))?;
            for row in strings.iter() {
                f(row.map(str::as_bytes))?;
            }
            Ok(())
        }
        DataType::Binary => {
            let bytes = array
                .as_any()
                .downcast_ref::<BinaryArray>()
                .ok_or_else(|| downcast_failure("Binary", "BinaryArray"))?;
            for row in bytes.iter() {
                f(row)?;
            }
            Ok(())
        }
        dt => Err(PackstrError::UnsupportedType(format!(
            "Cannot compress array of type {:?}; expected Utf8 or Binary",
            dt
        ))),
    }
}

fn compress_primitive<P>(array: &dyn Array) -> Result<ArrayRef, PackstrError>
where
    P: ArrowPrimitiveType,
    P::Native: FixedWidthCodec,
{
    let mut builder = PrimitiveBuilder::<P>::with_capacity(array.len());
    for_each_value(array, |row| {
        match row {
            Some(bytes) => builder.append_value(P::Native::encode_value(bytes)?),
            None => builder.append_null(),
        }
        Ok(())
    })?;
    Ok(Arc::new(builder.finish()))
}

/// 16-byte encodings travel as `FixedSizeBinary(16)` holding the integer's
/// little-endian bytes, since Arrow has no native u128 primitive.
fn compress_fixed_size_binary(array: &dyn Array) -> Result<ArrayRef, PackstrError> {
    let mut builder = FixedSizeBinaryBuilder::with_capacity(array.len(), 16);
    for_each_value(array, |row| {
        match row {
            Some(bytes) => {
                let encoded = u128::encode_value(bytes)?;
                builder.append_value(encoded.to_le_bytes())?;
            }
            None => builder.append_null(),
        }
        Ok(())
    })?;
    Ok(Arc::new(builder.finish()))
}

fn decompress_primitive<P>(array: &dyn Array, sink: &mut BinaryBuilder) -> Result<(), PackstrError>
where
    P: ArrowPrimitiveType,
    P::Native: FixedWidthCodec,
{
    let encoded = array
        .as_any()
        .downcast_ref::<PrimitiveArray<P>>()
        .ok_or_else(|| downcast_failure(&format!("{:?}", array.data_type()), "PrimitiveArray"))?;
    for row in encoded.iter() {
        match row {
            Some(value) => sink.push_value(value.decode_value().as_bytes()),
            None => sink.append_null(),
        }
    }
    Ok(())
}

fn decompress_fixed_size_binary(
    array: &dyn Array,
    sink: &mut BinaryBuilder,
) -> Result<(), PackstrError> {
    let encoded = array
        .as_any()
        .downcast_ref::<FixedSizeBinaryArray>()
        .ok_or_else(|| downcast_failure("FixedSizeBinary(16)", "FixedSizeBinaryArray"))?;
    for row in encoded.iter() {
        match row {
            Some(bytes) => {
                let raw: [u8; 16] = bytes.try_into().map_err(|_| {
                    PackstrError::InternalError(format!(
                        "FixedSizeBinary(16) row has {} bytes",
                        bytes.len()
                    ))
                })?;
                sink.push_value(u128::from_le_bytes(raw).decode_value().as_bytes());
            }
            None => sink.append_null(),
        }
    }
    Ok(())
}

fn downcast_failure(logical: &str, concrete: &str) -> PackstrError {
    PackstrError::InternalError(format!(
        "{} array failed to downcast to {}",
        logical, concrete
    ))
}
