//! Structured error types for the nucleo crates.

use thiserror::Error;

/// Unified error type for all nucleo operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NucleoError {
    /// A byte outside the alphabet of the sequence being constructed.
    #[error("invalid {alphabet} symbol {symbol:?} at position {position}")]
    InvalidSymbol {
        alphabet: &'static str,
        symbol: char,
        position: usize,
    },

    /// A string that is not one of the 64 RNA codons.
    #[error("unknown codon: {0:?}")]
    UnknownCodon(String),

    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience alias used throughout the nucleo crates.
pub type Result<T> = std::result::Result<T, NucleoError>;
