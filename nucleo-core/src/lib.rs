//! Shared primitives and traits for the nucleo sequence crates.
//!
//! `nucleo-core` provides the foundation that `nucleo-seq` builds on:
//!
//! - **Error types** — [`NucleoError`] and [`Result`] for structured error handling
//! - **Traits** — Core abstractions like [`Sequence`], [`ContentAddressable`], [`Summarizable`]
//! - **Hashing** — SHA-256 content addressing for sequence identity

pub mod error;
pub mod hash;
pub mod traits;

pub use error::{NucleoError, Result};
pub use traits::*;
