//! Word-level Markov chain text generation library.
//!
//! This crate builds an order-1 Markov chain over the word tokens of a
//! corpus and answers two kinds of queries:
//! - Generation of `k` tokens from a seed, by weighted random or greedy walk
//! - The `k` most probable tokens following a seed, best first
//!
//! The model is rebuilt for every query and never persisted.

/// Errors raised while parsing caller input.
pub mod error;

/// I/O utilities (corpus loading, path helpers).
pub mod io;

/// Chain model, ranking, generation and queries.
pub mod model;

/// Line tokenization and case folding.
pub mod tokenizer;

pub use error::Error;
