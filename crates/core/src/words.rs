//! 32-bit word packing for memory images.
//!
//! Raw firmware bytes are regrouped into 4-byte words and written one word per line, most
//! significant byte first, as expected by `$readmemh`-style memory initialisation:
//!
//! ```text
//! bytes 01 02 03 04 05  ->  04 03 02 01
//!                           00 00 00 05
//! ```
//!
//! The word in progress is always flushed at the end of the input, zero-padded. When the input
//! length is a multiple of four this adds a trailing all-zero word.

use std::fmt::{self, Write as _};

use crate::common::constants::WORD_BYTES;

/// A memory word, stored in display order (most significant byte first).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Word([u8; WORD_BYTES]);

impl Word {
    /// Builds a word from up to four little-endian bytes, zero-padding missing high bytes.
    ///
    /// Bytes beyond the fourth are ignored.
    pub fn from_le_chunk(chunk: &[u8]) -> Self {
        let mut bytes = [0u8; WORD_BYTES];
        for (slot, &byte) in bytes.iter_mut().rev().zip(chunk) {
            *slot = byte;
        }
        Self(bytes)
    }

    /// Returns the bytes in display order.
    pub const fn to_be_bytes(self) -> [u8; WORD_BYTES] {
        self.0
    }

    /// Returns the numeric value of the word.
    pub const fn value(self) -> u32 {
        u32::from_be_bytes(self.0)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [b3, b2, b1, b0] = self.0;
        write!(f, "{b3:02X} {b2:02X} {b1:02X} {b0:02X}")
    }
}

/// Packs raw bytes into words.
///
/// # Returns
///
/// One word per started group of four bytes, followed by a zero word when the input length is
/// a multiple of four. Never empty.
pub fn pack_words(data: &[u8]) -> Vec<Word> {
    let mut words: Vec<Word> = data.chunks(WORD_BYTES).map(Word::from_le_chunk).collect();
    if data.len().is_multiple_of(WORD_BYTES) {
        words.push(Word::default());
    }
    words
}

/// Packs raw bytes into words and renders them one per line.
pub fn render_words(data: &[u8]) -> String {
    pack_words(data)
        .iter()
        .fold(String::new(), |mut out, word| {
            // Writing into a String cannot fail.
            let _ = writeln!(out, "{word}");
            out
        })
}
