//! Hex byte listing parser.
//!
//! A listing is plain text holding zero or more whitespace-separated base-16 tokens per line.
//! Parsing rules:
//! 1. **Blank lines** are skipped.
//! 2. **Comments:** a token starting with `#` ends its line; tokens before it are kept.
//! 3. **Tokens:** tokens are separated by Unicode whitespace or the information separators
//!    `U+001C..=U+001F`. A token is an optional sign, an optional `0x`/`0X` prefix, then hex
//!    digits. Single `_` separators may sit between digits or directly after the prefix. Width
//!    is not enforced, so `a`, `0A` and `0x00a` all decode to 10. Digits are ASCII only
//!    (`0-9`, `a-f`, `A-F`); digits from other scripts such as `٣` are parse errors.
//! 4. **Range:** the decoded value must lie in `0..=255`. Oversized tokens of any length are
//!    range errors, never parse errors.
//!
//! The first invalid token aborts the whole listing.

use std::path::Path;

use tracing::{debug, trace};

use crate::common::constants::{BYTE_MAX, COMMENT_PREFIX, HEX_RADIX};
use crate::common::{ByteSequence, Error, Result};
use crate::loader;

/// Why a single token was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TokenError {
    /// Not a base-16 integer.
    Syntax,
    /// Valid integer outside the byte range.
    Range,
}

impl TokenError {
    fn into_error(self, token: &str, path: &Path) -> Error {
        let token = token.to_string();
        let path = path.to_path_buf();
        match self {
            Self::Syntax => Error::Parse { token, path },
            Self::Range => Error::Range { token, path },
        }
    }
}

/// Whether `c` separates tokens: Unicode whitespace plus the ASCII information separators
/// `U+001C..=U+001F`, which text tools conventionally treat as blanks.
fn is_token_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Decodes one token into a byte.
///
/// Digits are accumulated until the value leaves the byte range; later digits are still
/// validated so that `1FFzz` reports a syntax error rather than a range error.
fn parse_token(token: &str) -> std::result::Result<u8, TokenError> {
    let (negative, unsigned) = token.strip_prefix('-').map_or_else(
        || (false, token.strip_prefix('+').unwrap_or(token)),
        |rest| (true, rest),
    );
    let (prefixed, digits) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .map_or((false, unsigned), |rest| (true, rest));

    let mut value: u32 = 0;
    let mut overflow = false;
    let mut seen_digit = false;
    let mut after_separator = false;

    for c in digits.chars() {
        if c == '_' {
            // One separator at a time, and only after a digit or the radix prefix.
            if after_separator || (!seen_digit && !prefixed) {
                return Err(TokenError::Syntax);
            }
            after_separator = true;
            continue;
        }
        let digit = c.to_digit(HEX_RADIX).ok_or(TokenError::Syntax)?;
        seen_digit = true;
        after_separator = false;
        if !overflow {
            value = value * HEX_RADIX + digit;
            overflow = value > BYTE_MAX;
        }
    }

    if !seen_digit || after_separator {
        return Err(TokenError::Syntax);
    }
    if overflow || (negative && value != 0) {
        return Err(TokenError::Range);
    }
    u8::try_from(value).map_err(|_| TokenError::Range)
}

/// Parses the text of a hex listing into a byte sequence.
///
/// `source` only labels error messages; nothing is read from it.
///
/// # Arguments
///
/// * `text` - Contents of the listing.
/// * `source` - Path the contents came from.
///
/// # Returns
///
/// Every byte in the listing, in file order.
///
/// # Errors
///
/// * [`Error::Parse`] if a token is not valid hexadecimal.
/// * [`Error::Range`] if a token decodes to a value outside `0..=255`.
pub fn parse_hex_text(text: &str, source: &Path) -> Result<ByteSequence> {
    let mut bytes = Vec::new();

    // A lone CR is a line break too, so comments never run past one.
    for line in text.lines().flat_map(|line| line.split('\r')) {
        for token in line.split(is_token_separator).filter(|t| !t.is_empty()) {
            if token.starts_with(COMMENT_PREFIX) {
                break;
            }
            let byte = parse_token(token).map_err(|kind| kind.into_error(token, source))?;
            trace!(token, byte, "hex token");
            bytes.push(byte);
        }
    }

    debug!(path = %source.display(), bytes = bytes.len(), "parsed hex listing");
    Ok(ByteSequence::from(bytes))
}

/// Reads and parses a hex listing from disk.
///
/// # Errors
///
/// * [`Error::Io`] if the file cannot be read or is not valid UTF-8.
/// * [`Error::Parse`] or [`Error::Range`] as for [`parse_hex_text`].
pub fn read_hex_bytes(path: impl AsRef<Path>) -> Result<ByteSequence> {
    let path = path.as_ref();
    let text = loader::load_text(path)?;
    parse_hex_text(&text, path)
}
