//! Error definitions for the conversion library.
//!
//! Every failure is terminal for the input being processed: a listing either parses in full or
//! yields one of these errors, never a partial byte sequence.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors produced while loading or parsing an input file.
#[derive(Debug, Error)]
pub enum Error {
    /// A token is not a valid base-16 integer.
    #[error("Invalid hex byte '{token}' in {}", .path.display())]
    Parse {
        /// The offending token, exactly as it appeared in the file.
        token: String,
        /// Path of the listing that contained the token.
        path: PathBuf,
    },

    /// A token is valid hex but decodes to a value outside `0..=255`.
    #[error("Hex value out of byte range: '{token}' in {}", .path.display())]
    Range {
        /// The offending token, exactly as it appeared in the file.
        token: String,
        /// Path of the listing that contained the token.
        path: PathBuf,
    },

    /// The input file could not be read.
    #[error("could not read '{}': {source}", .path.display())]
    Io {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Wraps an I/O failure with the path it occurred on.
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns the offending token for parse and range errors.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Parse { token, .. } | Self::Range { token, .. } => Some(token),
            Self::Io { .. } => None,
        }
    }

    /// Returns the path of the input the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Parse { path, .. } | Self::Range { path, .. } | Self::Io { path, .. } => path,
        }
    }
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;
