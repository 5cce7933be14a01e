//! Top-level module for the Markov chain generator.
//!
//! This module provides:
//! - Value types for two-word contexts (`Context`) and chain slots (`State`)
//! - The insertion-ordered chain (`ChainMap`)
//! - Tokenization and sentence starter extraction (`tokenizer`)
//! - The chain model itself (`ChainModel`)
//! - Generation configuration (`GenerationInput`) and a high-level `Generator`

/// High-level interface: corpus loading and configured sentence generation.
pub mod generator;

/// Second-order chain model.
///
/// Handles chain construction, starter selection, sentence generation
/// and the single-word fallback search.
pub mod chain_model;

/// Insertion-ordered mapping from a context to its state.
pub mod chain_map;

/// Two-word context value and the sliding window used to build it.
pub mod context;

/// A single chain slot: a context and its observed successors.
pub mod state;

/// Text normalization, tokenization and sentence starters.
pub mod tokenizer;

/// Generation parameters (sentence count, word range, start seed).
pub mod generation_input;

/// Error type shared by the model and the generator.
pub mod error;
