use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::debug;

use super::ranking::Ranked;
use super::successor_table::SuccessorTable;
use super::word::Word;
use crate::tokenizer::{fold_case, tokenize_lines};

/// Collects every token that immediately follows a given seed.
///
/// Works on the corpus token stream independently of [`super::ChainModel`]:
/// only the seed context is kept.
#[derive(Debug)]
pub struct FollowerCollector {
	seed: String,
	table: SuccessorTable,
	after_seed: bool,
}

impl FollowerCollector {
	/// Creates a collector for `seed`, case-folded like corpus tokens.
	pub fn new(seed: &str) -> Self {
		Self {
			seed: fold_case(seed),
			table: SuccessorTable::new(),
			after_seed: false,
		}
	}

	/// Feeds the next token of the corpus stream.
	pub fn push(&mut self, token: &str) {
		if self.after_seed {
			self.table.record(token);
		}
		self.after_seed = token == self.seed;
	}

	/// Finalizes and returns the table of the seed successors.
	pub fn finish(mut self) -> SuccessorTable {
		self.table.finalize();
		debug!(
			"Seed '{}' followed {} times by {} distinct tokens",
			self.seed,
			self.table.total(),
			self.table.len()
		);
		self.table
	}
}

/// Builds the successor table of `seed` from raw corpus lines.
pub fn collect_followers<I, S>(lines: I, seed: &str) -> SuccessorTable
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut collector = FollowerCollector::new(seed);
	for token in tokenize_lines(lines) {
		collector.push(&token);
	}
	collector.finish()
}

/// Returns the `k` best successors of a table, best first.
///
/// Keeps a heap bounded to `k` entries whose top is the worst kept word,
/// so the table is scanned once. The result holds `min(k, table.len())`
/// words ordered by [`super::ranking::rank_order`].
pub fn top_k(table: &SuccessorTable, k: usize) -> Vec<&Word> {
	if k == 0 {
		return Vec::new();
	}

	let mut kept: BinaryHeap<Reverse<Ranked<'_>>> = BinaryHeap::with_capacity(k.min(table.len()) + 1);
	for word in table.iter() {
		kept.push(Reverse(Ranked(word)));
		if kept.len() > k {
			kept.pop();
		}
	}

	kept.into_sorted_vec()
		.into_iter()
		.map(|Reverse(Ranked(word))| word)
		.collect()
}
