//! This file is the root of the `packstr` Rust crate.
//!
//! packstr packs variable-length strings into fixed-width unsigned integers
//! so that a query engine's intermediate structures (hash tables, sort and
//! group buffers) can hold compact integers instead of variable-length
//! string handles. Width selection belongs to the surrounding planner; this
//! crate only guarantees the packing contracts for whichever width class the
//! planner picked.
//!
//! The root's responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of the library (`kernels`,
//!     `batch`, `registry`, `bridge`).
//! 2.  Re-exporting the public surface: the width classes, the dispatch
//!     entry points, the batch adapter, and the Arrow bridge.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod batch;
pub mod bridge;
pub mod kernels;
pub mod registry;

mod error;
mod traits;
mod types;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use error::PackstrError;
pub use registry::{
    compress, compress_u128, compress_u16, compress_u32, compress_u64, compress_u8, decompress,
    decompress_u128, decompress_u16, decompress_u32, decompress_u64, decompress_u8,
};
pub use traits::{BeBytes, FixedWidthCodec, StringValue, ValueSink};
pub use types::{EncodedValue, InlineValue, Width, MAX_WIDTH};
