//! Concrete sequence type aliases and biologically meaningful operations.
//!
//! - [`Dna`] — complement, reverse complement, transcription, codons,
//!   translation, six-frame derivation
//! - [`Rna`] — complement, reverse complement, reverse transcription,
//!   codons, translation
//!
//! Every operation borrows its receiver and returns a freshly owned value.

use crate::alphabet::{DnaAlphabet, RnaAlphabet};
use crate::amino::AminoAcid;
use crate::codon::{self, Codon, GeneticCode};
use crate::frame::{ReadingFrame, Strand};
use crate::seq::ValidatedSeq;

/// A validated DNA sequence over `ACGT`.
pub type Dna = ValidatedSeq<DnaAlphabet>;

/// A validated RNA sequence over `ACGU`.
pub type Rna = ValidatedSeq<RnaAlphabet>;

// ---------------------------------------------------------------------------
// DNA methods
// ---------------------------------------------------------------------------

impl Dna {
    /// Complement strand, same orientation (`A<->T`, `C<->G`).
    pub fn complement(&self) -> Dna {
        self.complemented(false)
    }

    /// Reverse complement: the opposite strand read 5'->3'.
    pub fn reverse_complement(&self) -> Dna {
        self.complemented(true)
    }

    /// Transcribe DNA to RNA (T -> U).
    pub fn transcribe(&self) -> Rna {
        let rna: Vec<u8> = self
            .iter()
            .map(|&b| if b == b'T' { b'U' } else { b })
            .collect();
        Rna::from_validated(rna)
    }

    /// Codons of the transcribed sequence, trailing partial codon dropped.
    pub fn codons(&self) -> Vec<Codon> {
        self.transcribe().codons()
    }

    /// Translate with the standard genetic code, reading through stops.
    pub fn translate(&self) -> Vec<AminoAcid> {
        self.transcribe().translate()
    }

    /// Translate up to, not including, the first stop codon.
    pub fn translate_to_stop(&self) -> Vec<AminoAcid> {
        self.transcribe().translate_to_stop()
    }

    /// The six open reading frames: offsets 0, 1, 2 of this strand, then
    /// offsets 0, 1, 2 of the reverse complement.
    ///
    /// Offsets past the end yield empty sequences.
    pub fn open_reading_frames(&self) -> [Dna; 6] {
        let rc = self.reverse_complement();
        [
            self.skip(0),
            self.skip(1),
            self.skip(2),
            rc.skip(0),
            rc.skip(1),
            rc.skip(2),
        ]
    }

    /// The six frames paired with their [`ReadingFrame`] labels.
    pub fn reading_frames(&self) -> [(ReadingFrame, Dna); 6] {
        log::trace!("deriving six reading frames from {} bp", self.len());
        let [f0, f1, f2, r0, r1, r2] = self.open_reading_frames();
        let [a, b, c, d, e, f] = ReadingFrame::ALL;
        [(a, f0), (b, f1), (c, f2), (d, r0), (e, r1), (f, r2)]
    }

    /// A single reading frame.
    pub fn frame(&self, frame: ReadingFrame) -> Dna {
        match frame.strand() {
            Strand::Forward => self.skip(frame.offset()),
            Strand::Reverse => self.reverse_complement().skip(frame.offset()),
        }
    }

    /// Translation of each of the six frames, in [`ReadingFrame::ALL`] order.
    pub fn translate_frames(&self) -> [Vec<AminoAcid>; 6] {
        self.open_reading_frames().map(|frame| frame.translate())
    }
}

// ---------------------------------------------------------------------------
// RNA methods
// ---------------------------------------------------------------------------

impl Rna {
    /// Complement strand, same orientation (`A<->U`, `C<->G`).
    pub fn complement(&self) -> Rna {
        self.complemented(false)
    }

    /// Return the reverse complement.
    pub fn reverse_complement(&self) -> Rna {
        self.complemented(true)
    }

    /// Reverse-transcribe RNA to DNA (U -> T).
    pub fn reverse_transcribe(&self) -> Dna {
        let dna: Vec<u8> = self
            .iter()
            .map(|&b| if b == b'U' { b'T' } else { b })
            .collect();
        Dna::from_validated(dna)
    }

    /// Non-overlapping codons from index 0; trailing 1-2 bases are dropped.
    pub fn codons(&self) -> Vec<Codon> {
        codon::segment(self)
    }

    /// Translate RNA using the standard genetic code.
    ///
    /// Stop codons appear as [`AminoAcid::Stop`] and translation continues
    /// past them.
    pub fn translate(&self) -> Vec<AminoAcid> {
        GeneticCode::standard().translate_codons(&self.codons())
    }

    /// Translate up to, not including, the first stop codon.
    pub fn translate_to_stop(&self) -> Vec<AminoAcid> {
        GeneticCode::standard().translate_to_stop(&self.codons())
    }
}
