//! Reading frame identifiers.
//!
//! A double-stranded segment has six codon-aligned readings: offsets 0, 1
//! and 2 of the given strand and the same offsets of its reverse complement.

use std::fmt;

use nucleo_core::{NucleoError, Result};

/// Strand orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    /// `'+'` for forward, `'-'` for reverse.
    pub fn sign(self) -> char {
        match self {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        }
    }
}

/// One of the six reading frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReadingFrame {
    strand: Strand,
    offset: usize,
}

impl ReadingFrame {
    /// The six frames in canonical order: forward offsets 0..3, then
    /// reverse-complement offsets 0..3.
    pub const ALL: [ReadingFrame; 6] = [
        ReadingFrame::forward(0),
        ReadingFrame::forward(1),
        ReadingFrame::forward(2),
        ReadingFrame::reverse(0),
        ReadingFrame::reverse(1),
        ReadingFrame::reverse(2),
    ];

    const fn forward(offset: usize) -> Self {
        Self {
            strand: Strand::Forward,
            offset,
        }
    }

    const fn reverse(offset: usize) -> Self {
        Self {
            strand: Strand::Reverse,
            offset,
        }
    }

    /// Create a frame; `offset` must be 0, 1 or 2.
    pub fn new(strand: Strand, offset: usize) -> Result<Self> {
        if offset > 2 {
            return Err(NucleoError::InvalidInput(format!(
                "reading frame offset must be 0, 1 or 2, got {}",
                offset
            )));
        }
        Ok(Self { strand, offset })
    }

    pub fn strand(self) -> Strand {
        self.strand
    }

    /// Number of leading bases skipped on the frame's strand.
    pub fn offset(self) -> usize {
        self.offset
    }

    /// Position of this frame in [`ReadingFrame::ALL`].
    pub fn index(self) -> usize {
        match self.strand {
            Strand::Forward => self.offset,
            Strand::Reverse => 3 + self.offset,
        }
    }
}

impl fmt::Display for ReadingFrame {
    /// Conventional `+1`..`+3` / `-1`..`-3` labels.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.strand.sign(), self.offset + 1)
    }
}
