// In: src/error.rs

//! This module defines the single, unified error type for the entire packstr library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackstrError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    /// The single codec-level error: the value does not fit its width class.
    /// It is never caught internally; a violation means the caller's width
    /// selection step broke its own capacity guarantee.
    #[error("String of size {size} too large to be compressed to integer of size {width}")]
    Oversize { size: usize, width: usize },

    /// A width outside the closed {1, 2, 4, 8, 16} set was requested.
    #[error("Unsupported compression width: {0} bytes (this is a bug in the caller)")]
    UnsupportedWidth(usize),

    #[error("Unsupported array type for this operation: {0}")]
    UnsupportedType(String),

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the Arrow library, surfaced by the bridge.
    #[error("Arrow operation failed: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}
