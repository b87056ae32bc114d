//! Generic validated sequence type.
//!
//! [`ValidatedSeq<A>`] is a newtype over `Vec<u8>` parameterized by an
//! [`Alphabet`] marker type. Construction uppercases and validates every byte,
//! so every transform on a constructed sequence is total. Sequences are
//! immutable; transforms return new sequences.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;

use nucleo_core::{ContentAddressable, NucleoError, Sequence, Summarizable};

use crate::alphabet::Alphabet;

/// A validated nucleotide sequence parameterized by its alphabet.
///
/// `ValidatedSeq<DnaAlphabet>` is a DNA sequence, `ValidatedSeq<RnaAlphabet>`
/// is RNA. The inner bytes are always uppercase members of the alphabet.
#[derive(Clone)]
pub struct ValidatedSeq<A: Alphabet> {
    data: Vec<u8>,
    _alphabet: PhantomData<A>,
}

impl<A: Alphabet> ValidatedSeq<A> {
    /// Create a new validated sequence from raw bytes.
    ///
    /// Input is uppercased, then every byte is checked against the alphabet.
    /// The first byte outside the alphabet is reported as
    /// [`NucleoError::InvalidSymbol`].
    pub fn new(bytes: impl AsRef<[u8]>) -> nucleo_core::Result<Self> {
        let data: Vec<u8> = bytes.as_ref().iter().map(|b| b.to_ascii_uppercase()).collect();
        if let Some(position) = data.iter().position(|&b| !A::is_valid(b)) {
            let symbol = char::from(bytes.as_ref()[position]);
            log::debug!(
                "rejecting {} sequence of length {}: {:?} at position {}",
                A::NAME,
                data.len(),
                symbol,
                position
            );
            return Err(NucleoError::InvalidSymbol {
                alphabet: A::NAME,
                symbol,
                position,
            });
        }
        Ok(Self::from_validated(data))
    }

    /// Create a sequence from pre-validated bytes, skipping validation.
    ///
    /// Caller must guarantee all bytes are valid uppercase members of `A`.
    pub(crate) fn from_validated(data: Vec<u8>) -> Self {
        Self {
            data,
            _alphabet: PhantomData,
        }
    }

    /// Return the base-pairing complement, optionally reversed.
    ///
    /// With `reverse`, output index `i` holds the complement of input index
    /// `len - 1 - i`.
    pub(crate) fn complemented(&self, reverse: bool) -> Self {
        let data: Vec<u8> = if reverse {
            self.data.iter().rev().map(|&b| A::complement(b)).collect()
        } else {
            self.data.iter().map(|&b| A::complement(b)).collect()
        };
        Self::from_validated(data)
    }

    /// Copy of the sequence with the first `offset` bases dropped.
    ///
    /// Clamped: an offset at or past the end yields an empty sequence.
    pub fn skip(&self, offset: usize) -> Self {
        let tail = self.data.get(offset..).unwrap_or_default();
        Self::from_validated(tail.to_vec())
    }

    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// The sequence as a string slice.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.data).unwrap_or("???")
    }
}

impl<A: Alphabet> Deref for ValidatedSeq<A> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> AsRef<[u8]> for ValidatedSeq<A> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> Sequence for ValidatedSeq<A> {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> ContentAddressable for ValidatedSeq<A> {
    fn content_hash(&self) -> String {
        nucleo_core::hash::sha256(&self.data)
    }
}

impl<A: Alphabet> Summarizable for ValidatedSeq<A> {
    fn summary(&self) -> String {
        let preview_len = self.data.len().min(20);
        let preview = std::str::from_utf8(&self.data[..preview_len]).unwrap_or("???");
        if self.data.len() > 20 {
            format!("{} sequence ({} bp): {}...", A::NAME, self.data.len(), preview)
        } else {
            format!("{} sequence ({} bp): {}", A::NAME, self.data.len(), preview)
        }
    }
}

impl<A: Alphabet> fmt::Debug for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(\"{}\")", A::NAME, self.as_str())
    }
}

impl<A: Alphabet> fmt::Display for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<A: Alphabet> std::str::FromStr for ValidatedSeq<A> {
    type Err = NucleoError;

    fn from_str(s: &str) -> nucleo_core::Result<Self> {
        Self::new(s)
    }
}

impl<A: Alphabet> PartialEq for ValidatedSeq<A> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<A: Alphabet> Eq for ValidatedSeq<A> {}

impl<A: Alphabet> Hash for ValidatedSeq<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

#[cfg(feature = "serde")]
impl<A: Alphabet> serde::Serialize for ValidatedSeq<A> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let s = std::str::from_utf8(&self.data).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(s)
    }
}

#[cfg(feature = "serde")]
impl<'de, A: Alphabet> serde::Deserialize<'de> for ValidatedSeq<A> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}
