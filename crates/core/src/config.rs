//! Configuration for the C array emitter.
//!
//! This module defines the layout options of the rendered array. It provides:
//! 1. **Defaults:** The canonical layout (12 bytes per line, four-space indent, `const char` elements).
//! 2. **Structure:** [`EmitConfig`], deserializable from JSON or any other serde format.
//!
//! The command-line tools always use `EmitConfig::default()`; library callers may override fields.

use std::num::NonZeroUsize;

use serde::Deserialize;

/// Default layout constants for the emitter.
mod defaults {
    /// Number of byte literals written on each body line.
    pub const BYTES_PER_LINE: usize = 12;

    /// Leading whitespace of each body line.
    pub const INDENT: &str = "    ";

    /// Type and qualifiers in front of the array identifier.
    pub const ELEMENT_TYPE: &str = "const char";

    /// Type and qualifiers in front of the length constant.
    pub const LENGTH_TYPE: &str = "const size_t";
}

/// Layout options for [`CArray`](crate::emit::CArray).
///
/// Missing fields fall back to their defaults when deserializing, so `{}` is a valid document.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EmitConfig {
    /// Number of byte literals per body line; zero is rejected at deserialization.
    pub bytes_per_line: NonZeroUsize,
    /// Leading whitespace of each body line.
    pub indent: String,
    /// Declaration type of the array (e.g. `const char`, `static const uint8_t`).
    pub element_type: String,
    /// Declaration type of the `<name>_len` constant.
    pub length_type: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            bytes_per_line: NonZeroUsize::new(defaults::BYTES_PER_LINE).unwrap_or(NonZeroUsize::MIN),
            indent: defaults::INDENT.to_string(),
            element_type: defaults::ELEMENT_TYPE.to_string(),
            length_type: defaults::LENGTH_TYPE.to_string(),
        }
    }
}
