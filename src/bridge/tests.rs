use super::*;
use crate::error::PackstrError;
use crate::types::Width;
use arrow::array::{
    Array, BinaryArray, FixedSizeBinaryArray, Int32Array, StringArray, UInt16Array, UInt64Array,
};
use arrow::datatypes::DataType;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn as_binary(array: &dyn Array) -> &BinaryArray {
    array.as_any().downcast_ref::<BinaryArray>().unwrap()
}

#[test]
fn test_utf8_roundtrip_with_nulls_w8() {
    init_logging();
    let input = StringArray::from(vec![Some("AB"), None, Some(""), Some("1234567"), None]);

    let encoded = compress_array(Width::W8, &input).unwrap();
    assert_eq!(encoded.data_type(), &DataType::UInt64);
    assert_eq!(encoded.null_count(), 2);

    let decoded = decompress_array(encoded.as_ref()).unwrap();
    let decoded = as_binary(decoded.as_ref());
    assert_eq!(decoded.value(0), b"AB");
    assert!(decoded.is_null(1));
    assert_eq!(decoded.value(2), b"");
    assert_eq!(decoded.value(3), b"1234567");
    assert!(decoded.is_null(4));
}

#[test]
fn test_binary_roundtrip_w4() {
    init_logging();
    let rows: Vec<Option<&[u8]>> = vec![Some(b"WXY"), Some(b"\x00\xff"), Some(b"")];
    let input = BinaryArray::from(rows);

    let encoded = compress_array(Width::W4, &input).unwrap();
    assert_eq!(encoded.data_type(), &DataType::UInt32);

    let decoded = decompress_array(encoded.as_ref()).unwrap();
    let decoded = as_binary(decoded.as_ref());
    assert_eq!(decoded.value(0), b"WXY");
    assert_eq!(decoded.value(1), b"\x00\xff");
    assert_eq!(decoded.value(2), b"");
}

#[test]
fn test_fixed_size_binary_carrier_w16() {
    init_logging();
    let input = StringArray::from(vec![Some("fifteen bytes!!"), None, Some("short")]);

    let encoded = compress_array(Width::W16, &input).unwrap();
    assert_eq!(encoded.data_type(), &DataType::FixedSizeBinary(16));
    let carrier = encoded
        .as_any()
        .downcast_ref::<FixedSizeBinaryArray>()
        .unwrap();
    assert!(carrier.is_null(1));

    let decoded = decompress_array(encoded.as_ref()).unwrap();
    let decoded = as_binary(decoded.as_ref());
    assert_eq!(decoded.value(0), b"fifteen bytes!!");
    assert!(decoded.is_null(1));
    assert_eq!(decoded.value(2), b"short");
}

#[test]
fn test_oversize_row_aborts_whole_array() {
    init_logging();
    let input = StringArray::from(vec!["ok", "this row is far too long", "ok"]);

    let result = compress_array(Width::W4, &input);
    assert!(matches!(
        result,
        Err(PackstrError::Oversize { size: 24, width: 4 })
    ));
}

#[test]
fn test_compress_rejects_non_string_input() {
    init_logging();
    let input = Int32Array::from(vec![1, 2, 3]);

    let result = compress_array(Width::W8, &input);
    assert!(matches!(result, Err(PackstrError::UnsupportedType(_))));
}

#[test]
fn test_decompress_rejects_unknown_carrier() {
    init_logging();
    let input = Int32Array::from(vec![1, 2, 3]);

    let result = decompress_array(&input);
    assert!(matches!(result, Err(PackstrError::UnsupportedType(_))));
}

#[test]
fn test_decompress_width_derived_from_physical_type() {
    init_logging();
    // A hand-built width-2 column: 0 is "", 1 + b is the single byte b.
    let encoded = UInt16Array::from(vec![Some(0), Some(1 + b'q' as u16), None]);

    let decoded = decompress_array(&encoded).unwrap();
    let decoded = as_binary(decoded.as_ref());
    assert_eq!(decoded.value(0), b"");
    assert_eq!(decoded.value(1), b"q");
    assert!(decoded.is_null(2));
}

#[test]
fn test_encoded_column_sorts_like_the_strings() {
    init_logging();
    let strings = vec!["", "a", "aa", "ab", "b", "zzzzzzz"];
    let shuffled = vec!["ab", "zzzzzzz", "", "b", "a", "aa"];
    let input = StringArray::from(shuffled.clone());

    let encoded = compress_array(Width::W8, &input).unwrap();
    let encoded = encoded.as_any().downcast_ref::<UInt64Array>().unwrap();

    let mut pairs: Vec<(u64, &str)> = encoded
        .iter()
        .map(Option::unwrap)
        .zip(shuffled.iter().copied())
        .collect();
    pairs.sort_by_key(|(e, _)| *e);
    let by_encoding: Vec<&str> = pairs.iter().map(|(_, s)| *s).collect();
    assert_eq!(by_encoding, strings);
}
