//! This module defines the core, strongly-typed data representations used
//! throughout the packstr codec.
//!
//! It includes the canonical `Width` enum (the closed set of supported width
//! classes, with its Arrow physical-type mapping), the width-tagged
//! `EncodedValue`, and the `InlineValue` small-string representation used for
//! decoded results.

pub mod inline_value;
pub mod width;

// Re-export the main types for easier access.
pub use inline_value::InlineValue;
pub use width::{EncodedValue, Width};

/// The largest supported width class, in bytes.
pub const MAX_WIDTH: usize = 16;
