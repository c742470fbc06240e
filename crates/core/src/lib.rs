//! Firmware image conversion library.
//!
//! This crate turns the outputs of a firmware build into forms the hardware flow can consume.
//! It provides:
//! 1. **Hex reader:** Parses whitespace-delimited hex byte listings into a validated [`ByteSequence`].
//! 2. **Symbol naming:** Derives a C identifier from an input file name.
//! 3. **Array emitter:** Renders a byte sequence as a C array literal plus a length constant.
//! 4. **Word packer:** Regroups raw binary bytes into 4-byte hex words for memory initialisation.
//! 5. **Loader:** Reads input files from disk and reports failures as [`Error`] values.
//!
//! Every stage except the loader is a pure function of its inputs; callers own all I/O.

/// Common types and constants (byte sequences, errors, layout constants).
pub mod common;
/// Emitter configuration (defaults and serde-deserializable layout options).
pub mod config;
/// C array literal rendering.
pub mod emit;
/// Hex byte listing parser.
pub mod hexfile;
/// File loading for text and binary inputs.
pub mod loader;
/// Identifier derivation from file paths.
pub mod symbol;
/// 32-bit word packing for memory images.
pub mod words;

/// Ordered, immutable sequence of validated bytes.
pub use crate::common::ByteSequence;
/// Library error type and result alias.
pub use crate::common::error::{Error, Result};
/// Layout options for the array emitter; `EmitConfig::default()` gives the canonical output.
pub use crate::config::EmitConfig;
/// Array rendering entry points.
pub use crate::emit::{CArray, render_c_array, render_c_array_with};
/// Hex listing entry points.
pub use crate::hexfile::{parse_hex_text, read_hex_bytes};
/// Identifier derivation.
pub use crate::symbol::{SymbolName, symbol_name};
/// Word packing entry points.
pub use crate::words::{Word, pack_words, render_words};
