//! Open Reading Frame (ORF) scanning.
//!
//! Scans the reading frames of a DNA sequence for coding stretches that
//! begin at a start codon (AUG by default) and run to the next in-frame
//! stop codon, or to the last full codon of the frame when no stop follows.

use crate::amino::AminoAcid;
use crate::codon::{Codon, GeneticCode};
use crate::frame::{ReadingFrame, Strand};
use crate::types::Dna;

/// Parameters for an ORF scan.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrfConfig {
    /// Minimum ORF length in nucleotides, stop codon included.
    pub min_length: usize,
    /// Codons that open an ORF.
    pub start_codons: Vec<Codon>,
    /// Report ORFs that reach the end of the frame without a stop codon.
    pub include_partial: bool,
}

impl Default for OrfConfig {
    fn default() -> Self {
        Self {
            min_length: 0,
            start_codons: GeneticCode::standard().start_codons(),
            include_partial: true,
        }
    }
}

impl OrfConfig {
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }
}

/// One ORF found by a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrfHit {
    /// Frame the ORF was read in.
    pub frame: ReadingFrame,
    /// Start position on the input sequence (0-indexed).
    pub start: usize,
    /// End position (exclusive) on the input sequence.
    pub end: usize,
    /// Nucleotides of the ORF as read on its own strand.
    pub sequence: Dna,
    /// Translation, ending in [`AminoAcid::Stop`] when `complete`.
    pub protein: Vec<AminoAcid>,
    /// Whether the ORF ends in a stop codon.
    pub complete: bool,
}

impl OrfHit {
    /// Length in nucleotides.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Scan the three frames of one strand. `strand_seq` is the sequence as
/// read on that strand; `len` is the input length for coordinate mapping.
fn scan_strand(strand_seq: &Dna, strand: Strand, config: &OrfConfig, hits: &mut Vec<OrfHit>) {
    let code = GeneticCode::standard();
    let len = strand_seq.len();

    for frame in ReadingFrame::ALL.iter().filter(|f| f.strand() == strand) {
        let offset = frame.offset();
        let codons = strand_seq.skip(offset).codons();

        let mut emit = |first: usize, last: usize, complete: bool| {
            let local_start = offset + first * 3;
            let local_end = offset + last * 3;
            if local_end - local_start < config.min_length {
                return;
            }
            let (start, end) = match strand {
                Strand::Forward => (local_start, local_end),
                // Position `p` on the reverse complement is `len - p` on the input.
                Strand::Reverse => (len - local_end, len - local_start),
            };
            hits.push(OrfHit {
                frame: *frame,
                start,
                end,
                sequence: Dna::from_validated(strand_seq[local_start..local_end].to_vec()),
                protein: code.translate_codons(&codons[first..last]),
                complete,
            });
        };

        let mut orf_start: Option<usize> = None;
        for (i, &codon) in codons.iter().enumerate() {
            match orf_start {
                None if config.start_codons.contains(&codon) => orf_start = Some(i),
                Some(first) if code.is_stop(codon) => {
                    emit(first, i + 1, true);
                    orf_start = None;
                }
                _ => {}
            }
        }

        if let (Some(first), true) = (orf_start, config.include_partial) {
            emit(first, codons.len(), false);
        }
    }
}

/// Find ORFs in the three forward reading frames.
pub fn find_orfs(seq: &Dna, config: &OrfConfig) -> Vec<OrfHit> {
    let mut hits = Vec::new();
    scan_strand(seq, Strand::Forward, config, &mut hits);
    log::debug!("found {} forward ORFs in {} bp", hits.len(), seq.len());
    hits
}

/// Find ORFs in all six reading frames (forward + reverse complement).
///
/// Coordinates of reverse-strand hits refer to positions on the input
/// sequence; their `sequence` is read on the reverse strand.
pub fn find_orfs_both_strands(seq: &Dna, config: &OrfConfig) -> Vec<OrfHit> {
    let mut hits = Vec::new();
    scan_strand(seq, Strand::Forward, config, &mut hits);
    scan_strand(&seq.reverse_complement(), Strand::Reverse, config, &mut hits);
    log::debug!("found {} ORFs on both strands in {} bp", hits.len(), seq.len());
    hits
}
