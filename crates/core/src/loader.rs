//! Input file loading.
//!
//! Reads listings and raw binaries from disk. Failures are returned as [`Error::Io`] carrying
//! the offending path, leaving the decision to abort to the caller.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::{Error, Result};

/// Loads a binary file from disk into a byte vector.
///
/// # Arguments
///
/// * `path` - Path to the binary file.
///
/// # Returns
///
/// The raw bytes of the file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), bytes = data.len(), "loaded binary");
    Ok(data)
}

/// Loads a UTF-8 text file from disk.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read or is not valid UTF-8.
pub fn load_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), bytes = text.len(), "loaded text");
    Ok(text)
}
