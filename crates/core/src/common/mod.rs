//! Common types and constants shared by every conversion stage.
//!
//! This module provides:
//! 1. **Byte sequences:** An immutable, ordered container for validated bytes.
//! 2. **Constants:** Comment markers, naming fallbacks, and word geometry.
//! 3. **Error handling:** The library error enum and its result alias.

/// Byte sequence container.
pub mod bytes;

/// Constants used by the reader, namer, emitter, and packer.
pub mod constants;

/// Error types for parsing and loading.
pub mod error;

pub use bytes::ByteSequence;
pub use error::{Error, Result};
