// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the Arrow-facing API of the packstr library. The kernels and
// the batch adapter are columnar-format-agnostic; this layer is the sole place
// where Arrow arrays are downcast, iterated, and rebuilt.
//
// Data Flow (Compression):
//
//   [compress_array(width, &dyn Array)]  -> Receives Utf8 or Binary input
//         |
//         `-> per row: null passes through, valid bytes go to the width's
//             `FixedWidthCodec` encoder (fail-fast on the first oversize row)
//         |
//         `-> Returns the width's physical array:
//             UInt8 / UInt16 / UInt32 / UInt64 / FixedSizeBinary(16)
//
// Data Flow (Decompression):
//
//   [decompress_array(&dyn Array)]       -> Width derived from the physical type
//         |
//         `-> per row: null passes through, valid encodings are decoded and
//             pushed into a `BinaryBuilder` acting as the `ValueSink`
//         |
//         `-> Returns a Binary array (decoded bytes need not be valid UTF-8)
//
// ====================================================================================
pub(crate) mod arrow_impl;

pub use arrow_impl::{compress_array, decompress_array};

#[cfg(test)]
mod tests;
