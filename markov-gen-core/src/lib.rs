//! Second-order Markov chain sentence generation library.
//!
//! This crate provides a word-level Markov text generator including:
//! - Corpus tokenization and naive sentence splitting
//! - A two-word context chain with frequency-weighted successors
//! - Sentence generation from random starters or from a seed word,
//!   with a single-word fallback search on dead ends
//! - Corpus file loading helpers
//!
//! Randomness is always injected by the caller (`rand::Rng`), so seeded
//! generators give reproducible sentences.

/// Chain model, tokenizer and generation logic.
///
/// Exposes the high-level `Generator` as well as the lower-level
/// `ChainModel` for callers bringing their own corpus.
pub mod model;

/// I/O utilities (corpus file loading, path helpers).
pub mod io;
