//! This module defines the canonical, type-safe representation of the width
//! classes supported by the packstr codec.

use crate::error::PackstrError;
use arrow::datatypes::DataType as ArrowDataType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of fixed output sizes a string can be materialized into.
///
/// Each class selects both the packing algorithm (compact for 1/2 bytes,
/// order-preserving for 4/8/16) and the backing unsigned integer size. A
/// planner picks one per column; this enum replaces ad-hoc byte counts with a
/// compile-time-checked set.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Width {
    W1,
    W2,
    W4,
    W8,
    W16,
}

impl Width {
    /// Every supported width class, narrowest first.
    pub const ALL: [Width; 5] = [Width::W1, Width::W2, Width::W4, Width::W8, Width::W16];

    /// Resolves a requested byte count to its width class. Any size outside
    /// the supported set is a caller-side defect.
    pub fn from_bytes(bytes: usize) -> Result<Self, PackstrError> {
        match bytes {
            1 => Ok(Self::W1),
            2 => Ok(Self::W2),
            4 => Ok(Self::W4),
            8 => Ok(Self::W8),
            16 => Ok(Self::W16),
            n => Err(PackstrError::UnsupportedWidth(n)),
        }
    }

    /// Byte count of the class.
    pub const fn bytes(self) -> usize {
        match self {
            Self::W1 => 1,
            Self::W2 => 2,
            Self::W4 => 4,
            Self::W8 => 8,
            Self::W16 => 16,
        }
    }

    /// Content capacity: the longest string the class can hold. One byte is
    /// always reserved for length metadata.
    pub const fn capacity(self) -> usize {
        self.bytes() - 1
    }

    /// Converts the Arrow physical type of an encoded column back into its
    /// width class.
    pub fn from_arrow_type(arrow_type: &ArrowDataType) -> Result<Self, PackstrError> {
        match arrow_type {
            ArrowDataType::UInt8 => Ok(Self::W1),
            ArrowDataType::UInt16 => Ok(Self::W2),
            ArrowDataType::UInt32 => Ok(Self::W4),
            ArrowDataType::UInt64 => Ok(Self::W8),
            ArrowDataType::FixedSizeBinary(16) => Ok(Self::W16),
            dt => Err(PackstrError::UnsupportedType(format!(
                "Cannot derive a compression width from Arrow type {:?}",
                dt
            ))),
        }
    }

    /// The Arrow physical type that carries this width class in a batch.
    ///
    /// Arrow has no native 128-bit unsigned primitive, so the 16-byte class
    /// travels as `FixedSizeBinary(16)` holding the integer's little-endian
    /// bytes.
    pub fn to_arrow_type(&self) -> ArrowDataType {
        match self {
            Self::W1 => ArrowDataType::UInt8,
            Self::W2 => ArrowDataType::UInt16,
            Self::W4 => ArrowDataType::UInt32,
            Self::W8 => ArrowDataType::UInt64,
            Self::W16 => ArrowDataType::FixedSizeBinary(16),
        }
    }

    /// Returns `true` if numeric comparison of encodings at this width
    /// reproduces lexicographic order of the originals.
    pub const fn is_order_preserving(self) -> bool {
        matches!(self, Self::W4 | Self::W8 | Self::W16)
    }
}

/// Provides the canonical string representation for a `Width`.
impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bytes())
    }
}

/// A width-tagged encoded integer, as exchanged with the surrounding engine
/// when the width is only known at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodedValue {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
}

impl EncodedValue {
    /// The width class this value was encoded at.
    pub const fn width(self) -> Width {
        match self {
            Self::U8(_) => Width::W1,
            Self::U16(_) => Width::W2,
            Self::U32(_) => Width::W4,
            Self::U64(_) => Width::W8,
            Self::U128(_) => Width::W16,
        }
    }

    /// The encoded bits widened to 128 bits. Comparisons are only meaningful
    /// between values of the same (order-preserving) width class.
    pub const fn as_u128(self) -> u128 {
        match self {
            Self::U8(e) => e as u128,
            Self::U16(e) => e as u128,
            Self::U32(e) => e as u128,
            Self::U64(e) => e as u128,
            Self::U128(e) => e,
        }
    }
}
