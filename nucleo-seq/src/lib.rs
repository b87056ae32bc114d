//! DNA strand transforms, codon translation, and six-frame reading.
//!
//! Provides validated nucleotide sequence types and the transforms derived
//! from them:
//!
//! - **Alphabets** — [`DnaAlphabet`], [`RnaAlphabet`]
//! - **Sequences** — [`Dna`], [`Rna`] with complement, reverse complement,
//!   transcription and translation
//! - **Codons** — [`Codon`] and the standard [`GeneticCode`] (NCBI Table 1)
//! - **Reading frames** — [`ReadingFrame`], six-frame derivation and
//!   translation
//! - **ORF scanning** — [`find_orfs`], [`find_orfs_both_strands`]
//!
//! # Example
//!
//! ```
//! use nucleo_seq::{amino_acids_to_string, Dna};
//!
//! let dna = Dna::new(b"ATGATT").unwrap();
//! assert_eq!(dna.complement().as_str(), "TACTAA");
//! assert_eq!(dna.reverse_complement().as_str(), "AATCAT");
//! assert_eq!(dna.transcribe().as_str(), "AUGAUU");
//!
//! let codons: Vec<String> = dna.codons().iter().map(|c| c.to_string()).collect();
//! assert_eq!(codons, ["AUG", "AUU"]);
//!
//! // Stop codons are kept in the translation as "Stop"
//! let protein = Dna::new(b"ATGTAA").unwrap().translate();
//! assert_eq!(protein[1].symbol(), "Stop");
//! assert_eq!(amino_acids_to_string(&protein), "M*");
//!
//! let frames = dna.open_reading_frames();
//! assert_eq!(frames[1].as_str(), "TGATT");
//! ```

pub mod alphabet;
pub mod amino;
pub mod codon;
pub mod frame;
pub mod orf;
pub mod seq;
pub mod types;

pub use alphabet::{Alphabet, DnaAlphabet, RnaAlphabet};
pub use amino::{amino_acids_to_string, AminoAcid};
pub use codon::{Codon, GeneticCode};
pub use frame::{ReadingFrame, Strand};
pub use orf::{find_orfs, find_orfs_both_strands, OrfConfig, OrfHit};
pub use seq::ValidatedSeq;
pub use types::{Dna, Rna};

pub use nucleo_core::{NucleoError, Result};
