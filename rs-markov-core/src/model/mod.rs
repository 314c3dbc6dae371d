//! Top-level module for the word-level Markov chain.
//!
//! This module provides:
//! - Successor entries and their per-predecessor tables (`Word`, `SuccessorTable`)
//! - The single-pass chain construction (`ChainBuilder`, `ChainModel`)
//! - The ranking order shared by best-successor selection and top-K queries
//! - Text generation (`TextWalker`) with an injectable random source
//! - A query interface answering both generation and top-K requests (`Query`)

/// Single-pass construction of the full order-1 chain.
pub mod chain_model;

/// Generation and top-K requests, producing ready-to-print lines.
pub mod query;

/// Injectable randomness for the weighted walk.
pub mod random;

/// Total order over successors: probability descending, token ascending.
pub mod ranking;

/// Per-predecessor successor counts, probabilities and sampling.
pub mod successor_table;

/// Seed successor collection and bounded top-K extraction.
pub mod top_k;

/// Greedy and weighted walks over a built chain.
pub mod walker;

/// Successor entry (token, count, probability).
pub mod word;

pub use chain_model::{ChainBuilder, ChainModel};
pub use query::Query;
pub use random::{FixedSource, RandomSource, RngSource, ThreadSource};
pub use ranking::rank_order;
pub use successor_table::SuccessorTable;
pub use top_k::{FollowerCollector, collect_followers, top_k};
pub use walker::{FallbackSeed, Strategy, TextWalker};
pub use word::Word;
