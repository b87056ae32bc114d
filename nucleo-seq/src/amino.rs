//! Amino acid symbols produced by codon translation.
//!
//! The twenty standard residues plus a [`AminoAcid::Stop`] marker. The
//! stop marker renders as `"Stop"` via [`AminoAcid::symbol`] and as `*` in
//! one-letter protein strings.

use std::fmt;

/// One translated codon: a standard amino acid or the stop signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AminoAcid {
    Ala,
    Arg,
    Asn,
    Asp,
    Cys,
    Gln,
    Glu,
    Gly,
    His,
    Ile,
    Leu,
    Lys,
    Met,
    Phe,
    Pro,
    Ser,
    Thr,
    Trp,
    Tyr,
    Val,
    Stop,
}

impl AminoAcid {
    /// All twenty standard amino acids, alphabetical by one-letter code.
    pub const STANDARD: [AminoAcid; 20] = [
        AminoAcid::Ala,
        AminoAcid::Cys,
        AminoAcid::Asp,
        AminoAcid::Glu,
        AminoAcid::Phe,
        AminoAcid::Gly,
        AminoAcid::His,
        AminoAcid::Ile,
        AminoAcid::Lys,
        AminoAcid::Leu,
        AminoAcid::Met,
        AminoAcid::Asn,
        AminoAcid::Pro,
        AminoAcid::Gln,
        AminoAcid::Arg,
        AminoAcid::Ser,
        AminoAcid::Thr,
        AminoAcid::Val,
        AminoAcid::Trp,
        AminoAcid::Tyr,
    ];

    /// Parse a one-letter code; `*` is the stop marker.
    ///
    /// Usable in const context so translation tables can be written as
    /// byte strings.
    pub const fn from_code(code: u8) -> Option<Self> {
        let aa = match code {
            b'A' => AminoAcid::Ala,
            b'R' => AminoAcid::Arg,
            b'N' => AminoAcid::Asn,
            b'D' => AminoAcid::Asp,
            b'C' => AminoAcid::Cys,
            b'Q' => AminoAcid::Gln,
            b'E' => AminoAcid::Glu,
            b'G' => AminoAcid::Gly,
            b'H' => AminoAcid::His,
            b'I' => AminoAcid::Ile,
            b'L' => AminoAcid::Leu,
            b'K' => AminoAcid::Lys,
            b'M' => AminoAcid::Met,
            b'F' => AminoAcid::Phe,
            b'P' => AminoAcid::Pro,
            b'S' => AminoAcid::Ser,
            b'T' => AminoAcid::Thr,
            b'W' => AminoAcid::Trp,
            b'Y' => AminoAcid::Tyr,
            b'V' => AminoAcid::Val,
            b'*' => AminoAcid::Stop,
            _ => return None,
        };
        Some(aa)
    }

    /// One-letter code, `b'*'` for stop.
    pub const fn code(self) -> u8 {
        match self {
            AminoAcid::Ala => b'A',
            AminoAcid::Arg => b'R',
            AminoAcid::Asn => b'N',
            AminoAcid::Asp => b'D',
            AminoAcid::Cys => b'C',
            AminoAcid::Gln => b'Q',
            AminoAcid::Glu => b'E',
            AminoAcid::Gly => b'G',
            AminoAcid::His => b'H',
            AminoAcid::Ile => b'I',
            AminoAcid::Leu => b'L',
            AminoAcid::Lys => b'K',
            AminoAcid::Met => b'M',
            AminoAcid::Phe => b'F',
            AminoAcid::Pro => b'P',
            AminoAcid::Ser => b'S',
            AminoAcid::Thr => b'T',
            AminoAcid::Trp => b'W',
            AminoAcid::Tyr => b'Y',
            AminoAcid::Val => b'V',
            AminoAcid::Stop => b'*',
        }
    }

    /// Display symbol: the one-letter code, or `"Stop"` for the stop marker.
    pub fn symbol(self) -> &'static str {
        match self {
            AminoAcid::Ala => "A",
            AminoAcid::Arg => "R",
            AminoAcid::Asn => "N",
            AminoAcid::Asp => "D",
            AminoAcid::Cys => "C",
            AminoAcid::Gln => "Q",
            AminoAcid::Glu => "E",
            AminoAcid::Gly => "G",
            AminoAcid::His => "H",
            AminoAcid::Ile => "I",
            AminoAcid::Leu => "L",
            AminoAcid::Lys => "K",
            AminoAcid::Met => "M",
            AminoAcid::Phe => "F",
            AminoAcid::Pro => "P",
            AminoAcid::Ser => "S",
            AminoAcid::Thr => "T",
            AminoAcid::Trp => "W",
            AminoAcid::Tyr => "Y",
            AminoAcid::Val => "V",
            AminoAcid::Stop => "Stop",
        }
    }

    /// Whether this is the stop marker.
    pub fn is_stop(self) -> bool {
        self == AminoAcid::Stop
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Render a translation as a one-letter protein string (`*` for stops).
pub fn amino_acids_to_string(aas: &[AminoAcid]) -> String {
    aas.iter().map(|aa| char::from(aa.code())).collect()
}
