use std::collections::HashMap;

use log::{debug, info};

use super::successor_table::SuccessorTable;
use crate::tokenizer::tokenize_lines;

/// Single-pass builder of a [`ChainModel`].
///
/// Keeps a cursor on the last token seen. The first token only seeds the
/// cursor; every later token is recorded as a successor of the cursor,
/// which then moves forward.
///
/// The builder owns every table while the corpus is consumed; ownership
/// moves to the model in [`ChainBuilder::finish`].
#[derive(Debug, Default)]
pub struct ChainBuilder {
	tables: HashMap<String, SuccessorTable>,
	cursor: Option<String>,
}

impl ChainBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Feeds the next token of the corpus stream.
	pub fn push(&mut self, token: String) {
		if let Some(predecessor) = self.cursor.take() {
			self.tables.entry(predecessor).or_default().record(&token);
		}
		self.cursor = Some(token);
	}

	/// Finalizes every table and returns the immutable model.
	pub fn finish(mut self) -> ChainModel {
		for table in self.tables.values_mut() {
			table.finalize();
		}
		let model = ChainModel { tables: self.tables };
		info!(
			"Chain model built: {} predecessors, {} transitions",
			model.len(),
			model.transitions()
		);
		model
	}
}

/// Order-1 Markov chain over word tokens.
///
/// Maps every token that was followed by at least one other token to the
/// table of its successors.
///
/// # Invariants
/// - Every table is finalized
/// - Every table holds at least one successor
/// - The model is never mutated once built
#[derive(Debug, Clone, Default)]
pub struct ChainModel {
	tables: HashMap<String, SuccessorTable>,
}

impl ChainModel {
	/// Builds a model from a corpus token stream.
	pub fn from_tokens<I>(tokens: I) -> Self
	where
		I: IntoIterator<Item = String>,
	{
		let mut builder = ChainBuilder::new();
		let mut count = 0usize;
		for token in tokens {
			builder.push(token);
			count += 1;
		}
		debug!("Consumed {} tokens", count);
		builder.finish()
	}

	/// Builds a model from raw corpus lines, tokenizing each line in order.
	pub fn from_lines<I, S>(lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self::from_tokens(tokenize_lines(lines))
	}

	/// Returns the successor table of `predecessor`.
	///
	/// `None` if the token was never followed by another token.
	pub fn successors(&self, predecessor: &str) -> Option<&SuccessorTable> {
		self.tables.get(predecessor)
	}

	/// Iterates over every predecessor token (arbitrary order).
	pub fn predecessors(&self) -> impl Iterator<Item = &str> {
		self.tables.keys().map(String::as_str)
	}

	/// Number of distinct predecessors.
	pub fn len(&self) -> usize {
		self.tables.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tables.is_empty()
	}

	/// Total number of recorded transitions.
	pub fn transitions(&self) -> usize {
		self.tables.values().map(SuccessorTable::total).sum()
	}
}
