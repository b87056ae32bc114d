//! Alphabet definitions for nucleotide sequence validation.
//!
//! Each alphabet is a zero-sized marker type that implements [`Alphabet`],
//! defining the set of valid bytes (uppercase) for a sequence type.

/// Trait for nucleotide alphabets.
///
/// Implementors define a fixed set of valid uppercase bytes and the
/// Watson-Crick pairing between them. Sequence constructors uppercase input
/// first, then validate against the alphabet.
pub trait Alphabet: Clone + 'static {
    /// Human-readable name (e.g. "DNA").
    const NAME: &'static str;

    /// The set of valid uppercase bytes.
    const VALID_BYTES: &'static [u8];

    /// Check whether a byte (assumed already uppercased) is valid.
    fn is_valid(b: u8) -> bool {
        Self::VALID_BYTES.contains(&b)
    }

    /// Base-pairing partner of a valid byte.
    fn complement(b: u8) -> u8;
}

/// Unambiguous DNA alphabet: `ACGT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DnaAlphabet;

impl Alphabet for DnaAlphabet {
    const NAME: &'static str = "DNA";
    const VALID_BYTES: &'static [u8] = b"ACGT";

    fn complement(b: u8) -> u8 {
        match b {
            b'A' => b'T',
            b'T' => b'A',
            b'C' => b'G',
            b'G' => b'C',
            other => other,
        }
    }
}

/// Unambiguous RNA alphabet: `ACGU`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RnaAlphabet;

impl Alphabet for RnaAlphabet {
    const NAME: &'static str = "RNA";
    const VALID_BYTES: &'static [u8] = b"ACGU";

    fn complement(b: u8) -> u8 {
        match b {
            b'A' => b'U',
            b'U' => b'A',
            b'C' => b'G',
            b'G' => b'C',
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dna_accepts_canonical_bases() {
        for &b in b"ACGT" {
            assert!(DnaAlphabet::is_valid(b), "DNA should accept {}", b as char);
        }
    }

    #[test]
    fn dna_rejects_u_and_ambiguity() {
        assert!(!DnaAlphabet::is_valid(b'U'));
        assert!(!DnaAlphabet::is_valid(b'N'));
        assert!(!DnaAlphabet::is_valid(b'a'));
    }

    #[test]
    fn rna_rejects_t() {
        assert!(!RnaAlphabet::is_valid(b'T'));
        assert!(RnaAlphabet::is_valid(b'U'));
    }

    #[test]
    fn complement_is_involution() {
        for &b in DnaAlphabet::VALID_BYTES {
            assert_eq!(DnaAlphabet::complement(DnaAlphabet::complement(b)), b);
        }
        for &b in RnaAlphabet::VALID_BYTES {
            assert_eq!(RnaAlphabet::complement(RnaAlphabet::complement(b)), b);
        }
    }

    #[test]
    fn complement_pairs() {
        assert_eq!(DnaAlphabet::complement(b'A'), b'T');
        assert_eq!(DnaAlphabet::complement(b'C'), b'G');
        assert_eq!(RnaAlphabet::complement(b'A'), b'U');
        assert_eq!(RnaAlphabet::complement(b'G'), b'C');
    }
}
