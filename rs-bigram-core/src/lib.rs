//! Bigram text model and integer token scanner.
//!
//! This crate provides two independent components:
//! - A bigram Markov model: training on word sequences, membership
//!   checks and random-walk generation ("babbling")
//! - A finite state machine extracting the integers embedded in lines
//!   of text
//!
//! Internal utilities (file reading, word splitting) are kept private.

/// Bigram model, its configuration and its source of randomness.
pub mod model;

/// Character-level automaton extracting integers from text.
pub mod scanner;

/// Error type shared by the crate.
pub mod error;

/// I/O utilities (file loading, word splitting).
///
/// Not exposed
pub(crate) mod io;

pub use error::{BigramError, Result};
pub use model::{BabbleInput, Bigram, BigramModel, Chooser, RandomChooser};
pub use scanner::{IntegerTokenScanner, ScanState, extract_ints};
