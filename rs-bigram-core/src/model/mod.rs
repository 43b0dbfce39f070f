//! Top-level module for the bigram Markov model.
//!
//! This module provides:
//! - The bigram value type and the text decomposition rule (`Bigram`, `bigrams_in`)
//! - The trainable model and its random walk (`BigramModel`)
//! - The injectable source of randomness (`Chooser`, `RandomChooser`)
//! - The babble configuration (`BabbleInput`)

/// Ordered pair of adjacent words, and the rule turning a text into pairs.
pub mod bigram;

/// Multiset of bigrams in training order.
///
/// Handles training from pairs, texts, lines and files, membership
/// checks, merging and random generation.
pub mod bigram_model;

/// Uniform pick among candidate successors.
///
/// Production code uses a `rand` generator, tests substitute fakes.
pub mod chooser;

/// Babble configuration: walk shape, seed and step budget.
pub mod babble_input;

pub use babble_input::BabbleInput;
pub use bigram::{Bigram, bigrams_in};
pub use bigram_model::BigramModel;
pub use chooser::{Chooser, RandomChooser};
