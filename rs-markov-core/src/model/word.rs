/// A successor token observed after some predecessor.
///
/// A `Word` counts how many times its token followed the predecessor owning
/// it, and carries the resulting probability once the owning table has been
/// finalized.
///
/// ## Invariants
/// - `occurrences` is always >= 1
/// - `probability` is `None` until the owning table is finalized
#[derive(Clone, Debug, PartialEq)]
pub struct Word {
	/// Normalized token.
	token: String,
	/// Number of times this token followed the predecessor.
	occurrences: usize,
	/// `occurrences / total` of the owning table, once finalized.
	probability: Option<f64>,
}

impl Word {
	/// Creates a word seen once.
	pub(crate) fn new(token: &str) -> Self {
		Self {
			token: token.to_owned(),
			occurrences: 1,
			probability: None,
		}
	}

	/// Records one more occurrence.
	pub(crate) fn increment(&mut self) {
		self.occurrences += 1;
	}

	/// Sets the probability from the owning table total.
	///
	/// `total` is never 0 for a table holding at least one word.
	pub(crate) fn finalize(&mut self, total: usize) {
		self.probability = Some(self.occurrences as f64 / total as f64);
	}

	pub fn token(&self) -> &str {
		&self.token
	}

	pub fn occurrences(&self) -> usize {
		self.occurrences
	}

	/// Returns the probability, or `None` before finalization.
	pub fn probability(&self) -> Option<f64> {
		self.probability
	}
}
