//! Immutable byte sequence produced by the hex reader.

use std::ops::Deref;

/// Ordered list of validated bytes, in the order they appeared in the input.
///
/// The sequence is immutable once constructed; it dereferences to `[u8]` for read access.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ByteSequence(Vec<u8>);

impl ByteSequence {
    /// Returns the bytes as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the sequence and returns the underlying vector.
    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for ByteSequence {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for ByteSequence {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for ByteSequence {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl FromIterator<u8> for ByteSequence {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
