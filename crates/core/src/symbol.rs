//! Identifier derivation from file paths.
//!
//! The generated array is named after its input file: `led.hex` becomes `led`,
//! `fw/boot-rom.v1.hex` becomes `boot_rom`, `123-data.hex` becomes `data_123_data`.

use std::fmt;
use std::path::{Path, is_separator};

use crate::common::constants::{DIGIT_PREFIX, FALLBACK_SYMBOL, LENGTH_SUFFIX};

/// An identifier-safe name for the emitted array.
///
/// Always non-empty, made only of `[0-9a-zA-Z_]`, and never starting with a digit.
/// Obtained through [`symbol_name`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SymbolName(String);

impl SymbolName {
    /// Returns the identifier.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the identifier of the companion length constant (`<name>_len`).
    pub fn length_symbol(&self) -> String {
        format!("{}{LENGTH_SUFFIX}", self.0)
    }
}

impl fmt::Display for SymbolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SymbolName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Derives an array identifier from a file path.
///
/// 1. Keeps the text after the last path separator (empty for a path ending in one).
/// 2. Cuts it at the first `.`.
/// 3. Replaces every character outside `[0-9a-zA-Z_]` with `_`.
/// 4. Substitutes `data` for an empty result, and prefixes `data_` to one starting with a digit.
///
/// # Arguments
///
/// * `path` - Path of the input file; only its text is inspected, the file need not exist.
///
/// # Returns
///
/// The derived identifier. The same path always yields the same name.
pub fn symbol_name(path: impl AsRef<Path>) -> SymbolName {
    let text = path.as_ref().to_string_lossy();
    let file_name = text.rsplit(is_separator).next().unwrap_or_default();
    let stem = file_name.split('.').next().unwrap_or_default();

    let mut name: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if name.is_empty() {
        name.push_str(FALLBACK_SYMBOL);
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert_str(0, DIGIT_PREFIX);
    }
    SymbolName(name)
}
