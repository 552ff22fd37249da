//! The batch adapter: applies a width class's encoder or decoder
//! independently to each element of a columnar batch.
//!
//! There is no cross-row state. Encoding is fail-fast: the first element
//! that violates the width's capacity precondition aborts the whole batch,
//! matching the all-or-nothing contract of the kernels. Decoding is
//! infallible and streams every reconstructed value into the caller's
//! `ValueSink`, which owns all result storage.

use crate::error::PackstrError;
use crate::traits::{FixedWidthCodec, StringValue, ValueSink};

/// Encodes every element of `values` into caller-owned `output` storage.
///
/// On error, `output` holds only the elements encoded before the failure and
/// must be discarded by the caller.
pub fn encode_batch<T, V>(values: &[V], output: &mut Vec<T>) -> Result<(), PackstrError>
where
    T: FixedWidthCodec,
    V: StringValue,
{
    output.clear();
    output.reserve(values.len());
    for value in values {
        output.push(T::encode_value(value)?);
    }
    Ok(())
}

/// Decodes every element of `encoded` into the caller-supplied sink.
pub fn decode_batch<T, S>(encoded: &[T], sink: &mut S)
where
    T: FixedWidthCodec,
    S: ValueSink,
{
    for &value in encoded {
        sink.push_value(value.decode_value().as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_roundtrip_u64() {
        let values: Vec<&[u8]> = vec![b"", b"a", b"AB", b"1234567"];

        let mut encoded: Vec<u64> = Vec::new();
        encode_batch(&values, &mut encoded).unwrap();
        assert_eq!(encoded.len(), values.len());

        let mut sink: Vec<Vec<u8>> = Vec::new();
        decode_batch(&encoded, &mut sink);
        assert_eq!(sink, values.iter().map(|v| v.to_vec()).collect::<Vec<_>>());
    }

    #[test]
    fn test_batch_is_fail_fast() {
        // The third element is over capacity for the 4-byte class.
        let values: Vec<&[u8]> = vec![b"ok", b"ok!", b"too long", b"ok"];
        let mut encoded: Vec<u32> = Vec::new();

        let result = encode_batch(&values, &mut encoded);
        assert!(matches!(
            result,
            Err(PackstrError::Oversize { size: 8, width: 4 })
        ));
        // Only the elements before the failure were produced.
        assert_eq!(encoded.len(), 2);
    }

    #[test]
    fn test_batch_no_cross_row_state() {
        // Encoding the same value twice in different neighborhoods must give
        // identical encodings.
        let a: Vec<&[u8]> = vec![b"x", b"same"];
        let b: Vec<&[u8]> = vec![b"zzzzzz", b"same", b"q"];

        let mut ea: Vec<u64> = Vec::new();
        let mut eb: Vec<u64> = Vec::new();
        encode_batch(&a, &mut ea).unwrap();
        encode_batch(&b, &mut eb).unwrap();
        assert_eq!(ea[1], eb[1]);
    }

    #[test]
    fn test_batch_compact_width() {
        let values: Vec<&[u8]> = vec![b"", b"x", b"\xff"];
        let mut encoded: Vec<u16> = Vec::new();
        encode_batch(&values, &mut encoded).unwrap();
        assert_eq!(encoded, vec![0, 1 + b'x' as u16, 256]);

        let mut sink: Vec<Vec<u8>> = Vec::new();
        decode_batch(&encoded, &mut sink);
        assert_eq!(sink, values.iter().map(|v| v.to_vec()).collect::<Vec<_>>());
    }
}
