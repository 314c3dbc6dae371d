use std::collections::BTreeMap;

use super::random::RandomSource;
use super::ranking::rank_order;
use super::word::Word;

/// All successors observed after one predecessor token.
///
/// Conceptually, this is a node of an order-1 Markov chain whose outgoing
/// edges are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Accumulate successor occurrences during the build pass
/// - Turn counts into probabilities and cache the most probable successor
/// - Pick a successor by weighted random sampling
///
/// ## Invariants
/// - `total` equals the sum of all word occurrence counts
/// - After finalization, probabilities sum to 1.0 when the table is not empty
/// - `most_probable` is always a key of `successors`
#[derive(Clone, Debug, Default)]
pub struct SuccessorTable {
	/// Successors indexed by token, iterated in ascending token order.
	successors: BTreeMap<String, Word>,
	/// Number of transitions recorded.
	total: usize,
	/// Token of the best successor under [`rank_order`], set by `finalize`.
	most_probable: Option<String>,
}

impl SuccessorTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one transition toward `token`.
	///
	/// - If the successor already exists, its occurrence count is increased.
	/// - Otherwise, it is created with an occurrence count of 1.
	pub(crate) fn record(&mut self, token: &str) {
		match self.successors.get_mut(token) {
			Some(word) => word.increment(),
			None => {
				self.successors.insert(token.to_owned(), Word::new(token));
			}
		}
		self.total += 1;
	}

	/// Computes every probability and selects the most probable successor.
	pub(crate) fn finalize(&mut self) {
		for word in self.successors.values_mut() {
			word.finalize(self.total);
		}
		self.most_probable = self
			.successors
			.values()
			.min_by(|a, b| rank_order(a, b))
			.map(|word| word.token().to_owned());
	}

	/// Returns the successor entry for `token`, if observed.
	pub fn get(&self, token: &str) -> Option<&Word> {
		self.successors.get(token)
	}

	/// Iterates over the successors in ascending token order.
	pub fn iter(&self) -> impl Iterator<Item = &Word> {
		self.successors.values()
	}

	/// Number of distinct successors.
	pub fn len(&self) -> usize {
		self.successors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.successors.is_empty()
	}

	/// Number of transitions recorded (sum of all occurrence counts).
	pub fn total(&self) -> usize {
		self.total
	}

	/// Returns the most probable successor.
	///
	/// `None` for an empty or unfinalized table.
	pub fn most_probable(&self) -> Option<&Word> {
		self.most_probable.as_deref().and_then(|token| self.successors.get(token))
	}

	/// Picks a successor using weighted random sampling.
	///
	/// A single value `r` is drawn, then successors are scanned in the order
	/// given by `source.shuffle`, accumulating probabilities. The first
	/// successor whose running sum exceeds `r` is returned.
	///
	/// Returns `None` if the table is empty, unfinalized, or if rounding
	/// keeps the running sum from ever exceeding `r`.
	pub fn sample(&self, source: &mut dyn RandomSource) -> Option<&Word> {
		if self.successors.is_empty() {
			return None;
		}

		let threshold = source.next_unit();
		let mut candidates: Vec<&Word> = self.successors.values().collect();
		source.shuffle(&mut candidates);

		let mut cumulative = 0.0;
		for word in candidates {
			cumulative += word.probability()?;
			if threshold < cumulative {
				return Some(word);
			}
		}

		None
	}
}
