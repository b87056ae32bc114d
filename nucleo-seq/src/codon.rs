//! Codons and the standard genetic code.
//!
//! A [`Codon`] is three RNA bases. [`GeneticCode::standard`] maps each of the
//! 64 codons to an [`AminoAcid`] (NCBI Table 1), with stop codons mapped to
//! [`AminoAcid::Stop`] rather than terminating translation.

use std::fmt;
use std::str::FromStr;

use nucleo_core::{NucleoError, Result};

use crate::amino::AminoAcid;

// ---------------------------------------------------------------------------
// Base encoding: A=0, C=1, G=2, U=3
// ---------------------------------------------------------------------------

const RNA_BASES: [u8; 4] = [b'A', b'C', b'G', b'U'];

fn base_index(b: u8) -> Option<usize> {
    match b {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'U' => Some(3),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Codon
// ---------------------------------------------------------------------------

/// Three consecutive RNA bases.
///
/// Always uppercase and drawn from `ACGU`, so every codon has an entry in
/// the genetic code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codon([u8; 3]);

impl Codon {
    /// Parse a codon from exactly three RNA bases.
    ///
    /// Input is uppercased first. Anything that is not one of the 64 RNA
    /// codons (wrong length, DNA `T`, ambiguity codes) is rejected with
    /// [`NucleoError::UnknownCodon`].
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let bytes = bytes.as_ref();
        let unknown = || NucleoError::UnknownCodon(String::from_utf8_lossy(bytes).into_owned());
        if bytes.len() != 3 {
            return Err(unknown());
        }
        let mut codon = [0u8; 3];
        for (slot, &b) in codon.iter_mut().zip(bytes) {
            let b = b.to_ascii_uppercase();
            base_index(b).ok_or_else(unknown)?;
            *slot = b;
        }
        Ok(Self(codon))
    }

    /// Build a codon from bytes already known to be uppercase `ACGU`.
    pub(crate) fn from_validated(bytes: [u8; 3]) -> Self {
        Self(bytes)
    }

    /// Codon for a table index in `[0, 64)`.
    fn from_index(idx: usize) -> Self {
        Self([
            RNA_BASES[idx >> 4],
            RNA_BASES[(idx >> 2) & 3],
            RNA_BASES[idx & 3],
        ])
    }

    /// Position of this codon in a 64-entry table: `16*b1 + 4*b2 + b3`.
    pub fn index(self) -> usize {
        self.0
            .iter()
            .fold(0, |acc, &b| acc * 4 + base_index(b).unwrap_or(0))
    }

    /// The three bases.
    pub fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }

    /// The codon as a 3-character string.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl FromStr for Codon {
    type Err = NucleoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Debug for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Codon(\"{}\")", self.as_str())
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for Codon {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Codon {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Codon {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}

/// Split validated RNA into non-overlapping codons from index 0.
///
/// Trailing bases that do not fill a codon are dropped.
pub(crate) fn segment(rna: &[u8]) -> Vec<Codon> {
    rna.chunks_exact(3)
        .map(|c| Codon::from_validated([c[0], c[1], c[2]]))
        .collect()
}

// ---------------------------------------------------------------------------
// Genetic code table
// ---------------------------------------------------------------------------

// Codon order: AAA, AAC, AAG, AAU, ACA, ACC, ACG, ACU, AGA, AGC, AGG, AGU,
//              AUA, AUC, AUG, AUU, CAA, CAC, CAG, CAU, CCA, CCC, CCG, CCU,
//              CGA, CGC, CGG, CGU, CUA, CUC, CUG, CUU, GAA, GAC, GAG, GAU,
//              GCA, GCC, GCG, GCU, GGA, GGC, GGG, GGU, GUA, GUC, GUG, GUU,
//              UAA, UAC, UAG, UAU, UCA, UCC, UCG, UCU, UGA, UGC, UGG, UGU,
//              UUA, UUC, UUG, UUU

/// Standard genetic code (NCBI Table 1) as one-letter codes.
const STANDARD_CODES: &[u8; 64] =
    b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

const STANDARD_STARTS: [bool; 64] = {
    let mut s = [false; 64];
    s[14] = true; // AUG
    s
};

const fn build_table(codes: &[u8; 64]) -> [AminoAcid; 64] {
    let mut table = [AminoAcid::Stop; 64];
    let mut i = 0;
    while i < 64 {
        table[i] = match AminoAcid::from_code(codes[i]) {
            Some(aa) => aa,
            None => panic!("genetic code table contains an invalid amino acid code"),
        };
        i += 1;
    }
    table
}

static STANDARD: GeneticCode = GeneticCode {
    name: "Standard",
    table: build_table(STANDARD_CODES),
    starts: STANDARD_STARTS,
};

/// A genetic code translation table.
///
/// Wraps a 64-element amino acid lookup array and a 64-element start codon
/// mask. The standard code is a process-wide static; obtain it with
/// [`GeneticCode::standard`].
#[derive(Debug, Clone)]
pub struct GeneticCode {
    name: &'static str,
    table: [AminoAcid; 64],
    starts: [bool; 64],
}

impl GeneticCode {
    /// The standard genetic code (NCBI Table 1).
    pub fn standard() -> &'static GeneticCode {
        &STANDARD
    }

    /// Human-readable name.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Translate a single codon. Stop codons yield [`AminoAcid::Stop`].
    pub fn translate(&self, codon: Codon) -> AminoAcid {
        self.table[codon.index()]
    }

    /// Translate a codon given as a string.
    pub fn translate_str(&self, codon: &str) -> Result<AminoAcid> {
        Ok(self.translate(codon.parse()?))
    }

    /// Translate every codon, continuing through stop codons.
    pub fn translate_codons(&self, codons: &[Codon]) -> Vec<AminoAcid> {
        codons.iter().map(|&c| self.translate(c)).collect()
    }

    /// Translate codons up to, not including, the first stop codon.
    pub fn translate_to_stop(&self, codons: &[Codon]) -> Vec<AminoAcid> {
        codons
            .iter()
            .map(|&c| self.translate(c))
            .take_while(|aa| !aa.is_stop())
            .collect()
    }

    /// Check whether a codon is a start codon in this table.
    pub fn is_start(&self, codon: Codon) -> bool {
        self.starts[codon.index()]
    }

    /// Check whether a codon is a stop codon in this table.
    pub fn is_stop(&self, codon: Codon) -> bool {
        self.translate(codon).is_stop()
    }

    /// All stop codons, in table order.
    pub fn stop_codons(&self) -> Vec<Codon> {
        self.synonymous_codons(AminoAcid::Stop)
    }

    /// All start codons, in table order.
    pub fn start_codons(&self) -> Vec<Codon> {
        (0..64)
            .filter(|&i| self.starts[i])
            .map(Codon::from_index)
            .collect()
    }

    /// All codons that translate to `aa`, in table order.
    pub fn synonymous_codons(&self, aa: AminoAcid) -> Vec<Codon> {
        (0..64)
            .filter(|&i| self.table[i] == aa)
            .map(Codon::from_index)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code() -> &'static GeneticCode {
        GeneticCode::standard()
    }

    #[test]
    fn parse_codon() {
        let c: Codon = "AUG".parse().unwrap();
        assert_eq!(c.as_str(), "AUG");
        assert_eq!(c, "AUG");
        assert_eq!(Codon::new(b"aug").unwrap(), c);
    }

    #[test]
    fn parse_rejects_dna_and_bad_length() {
        assert_eq!(
            Codon::new("ATG"),
            Err(NucleoError::UnknownCodon("ATG".into()))
        );
        assert!(Codon::new("AU").is_err());
        assert!(Codon::new("AUGA").is_err());
        assert!(Codon::new("ANG").is_err());
        assert!(Codon::new("").is_err());
    }

    #[test]
    fn index_roundtrip() {
        for i in 0..64 {
            assert_eq!(Codon::from_index(i).index(), i);
        }
        assert_eq!(Codon::new("AAA").unwrap().index(), 0);
        assert_eq!(Codon::new("AUG").unwrap().index(), 14);
        assert_eq!(Codon::new("UUU").unwrap().index(), 63);
    }

    #[test]
    fn segment_drops_trailing() {
        let codons = segment(b"AUGAUUA");
        assert_eq!(codons.len(), 2);
        assert_eq!(codons[0], "AUG");
        assert_eq!(codons[1], "AUU");
        assert!(segment(b"AU").is_empty());
        assert!(segment(b"").is_empty());
    }

    #[test]
    fn standard_table_spot_checks() {
        let cases = [
            ("UUU", "F"),
            ("CUU", "L"),
            ("AUU", "I"),
            ("GUU", "V"),
            ("AUG", "M"),
            ("UCU", "S"),
            ("AGU", "S"),
            ("CCC", "P"),
            ("ACG", "T"),
            ("GCA", "A"),
            ("UAU", "Y"),
            ("CAU", "H"),
            ("CAA", "Q"),
            ("AAU", "N"),
            ("AAA", "K"),
            ("GAU", "D"),
            ("GAA", "E"),
            ("UGU", "C"),
            ("UGG", "W"),
            ("CGA", "R"),
            ("AGG", "R"),
            ("GGG", "G"),
            ("UAA", "Stop"),
            ("UAG", "Stop"),
            ("UGA", "Stop"),
        ];
        for (codon, expected) in cases {
            assert_eq!(
                code().translate_str(codon).unwrap().symbol(),
                expected,
                "codon {}",
                codon
            );
        }
    }

    #[test]
    fn every_codon_translates() {
        let standard_count = (0..64)
            .map(Codon::from_index)
            .filter(|&c| !code().is_stop(c))
            .count();
        assert_eq!(standard_count, 61);
        for aa in AminoAcid::STANDARD {
            assert!(!code().synonymous_codons(aa).is_empty(), "{:?} unused", aa);
        }
    }

    #[test]
    fn stops_and_starts() {
        let stops: Vec<String> = code().stop_codons().iter().map(|c| c.to_string()).collect();
        assert_eq!(stops, vec!["UAA", "UAG", "UGA"]);
        assert_eq!(code().start_codons(), vec![Codon::new("AUG").unwrap()]);
        assert!(code().is_start("AUG".parse().unwrap()));
        assert!(!code().is_start("GUG".parse().unwrap()));
    }

    #[test]
    fn synonymous_leucine() {
        assert_eq!(code().synonymous_codons(AminoAcid::Leu).len(), 6);
        assert_eq!(code().synonymous_codons(AminoAcid::Met).len(), 1);
        assert_eq!(code().synonymous_codons(AminoAcid::Trp).len(), 1);
    }

    #[test]
    fn translate_str_unknown() {
        assert_eq!(
            code().translate_str("XYZ"),
            Err(NucleoError::UnknownCodon("XYZ".into()))
        );
    }

    #[test]
    fn translate_through_and_to_stop() {
        let codons = segment(b"AUGUAAGCU");
        let full = code().translate_codons(&codons);
        assert_eq!(full, vec![AminoAcid::Met, AminoAcid::Stop, AminoAcid::Ala]);
        let truncated = code().translate_to_stop(&codons);
        assert_eq!(truncated, vec![AminoAcid::Met]);
    }

    #[test]
    fn standard_name() {
        assert_eq!(code().name(), "Standard");
    }
}
