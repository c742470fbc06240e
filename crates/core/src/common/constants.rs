//! Constants shared across the conversion stages.

/// Largest value a single hex token may decode to.
pub const BYTE_MAX: u32 = 0xFF;

/// Radix of every token in a hex listing.
pub const HEX_RADIX: u32 = 16;

/// A token starting with this character ends processing of its line.
pub const COMMENT_PREFIX: char = '#';

/// Identifier used when a file name yields no usable characters.
pub const FALLBACK_SYMBOL: &str = "data";

/// Prefix prepended to identifiers that would otherwise start with a digit.
pub const DIGIT_PREFIX: &str = "data_";

/// Suffix appended to the array identifier to name its length constant.
pub const LENGTH_SUFFIX: &str = "_len";

/// Number of bytes in a memory image word.
pub const WORD_BYTES: usize = 4;
