use super::chain_model::ChainModel;
use super::random::RandomSource;
use super::top_k::{collect_followers, top_k};
use super::walker::{FallbackSeed, Strategy, TextWalker};

/// A query answered against one corpus.
///
/// `k` is signed because callers hand it over as parsed; any value <= 0
/// behaves like 0.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
	/// Generate `k` tokens starting from `seed`.
	Generate {
		seed: String,
		k: i64,
		strategy: Strategy,
		fallback: FallbackSeed,
	},
	/// List the `k` most probable tokens following `seed`.
	TopK { seed: String, k: i64 },
}

impl Query {
	/// Creates a generation query with the default fallback.
	pub fn generate(seed: &str, k: i64, strategy: Strategy) -> Self {
		Query::Generate {
			seed: seed.to_owned(),
			k,
			strategy,
			fallback: FallbackSeed::default(),
		}
	}

	/// Creates a top-K query.
	pub fn top_k(seed: &str, k: i64) -> Self {
		Query::TopK { seed: seed.to_owned(), k }
	}

	/// Answers the query over raw corpus lines.
	///
	/// # Returns
	/// The output lines, in order:
	/// - generation: a single line, tokens separated by one space
	/// - top-K: one token per line, most probable first (possibly none)
	///
	/// Only the model needed by the query is built: the full chain for
	/// generation, the seed successors for top-K.
	pub fn run<I, S>(&self, lines: I, source: &mut dyn RandomSource) -> Vec<String>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		match self {
			Query::Generate { seed, k, strategy, fallback } => {
				let model = ChainModel::from_lines(lines);
				let tokens = TextWalker::new(&model)
					.with_fallback(*fallback)
					.walk(seed, clamp(*k), *strategy, source);
				vec![tokens.join(" ")]
			}
			Query::TopK { seed, k } => {
				let table = collect_followers(lines, seed);
				top_k(&table, clamp(*k))
					.into_iter()
					.map(|word| word.token().to_owned())
					.collect()
			}
		}
	}
}

/// Converts a caller-provided count, negative values meaning 0.
fn clamp(k: i64) -> usize {
	usize::try_from(k).unwrap_or(0)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::random::FixedSource;

	const CORPUS: [&str; 1] = ["a b a b a c"];

	fn run(query: Query) -> Vec<String> {
		query.run(CORPUS, &mut FixedSource::new(vec![0.0]))
	}

	#[test]
	fn greedy_generation_is_one_line() {
		assert_eq!(run(Query::generate("a", 4, Strategy::Greedy)), vec!["a b a b"]);
	}

	#[test]
	fn weighted_generation_uses_the_source() {
		// r = 0.0 always picks the first successor in token order.
		assert_eq!(run(Query::generate("a", 3, Strategy::Weighted)), vec!["a b a"]);
	}

	#[test]
	fn top_k_lists_best_successors() {
		assert_eq!(run(Query::top_k("a", 2)), vec!["b", "c"]);
		assert_eq!(run(Query::top_k("a", 1)), vec!["b"]);
	}

	#[test]
	fn non_positive_k() {
		assert_eq!(run(Query::generate("a", 0, Strategy::Greedy)), vec!["a"]);
		assert_eq!(run(Query::generate("a", -3, Strategy::Weighted)), vec!["a"]);
		assert!(run(Query::top_k("a", 0)).is_empty());
		assert!(run(Query::top_k("a", -1)).is_empty());
	}

	#[test]
	fn absent_seed() {
		assert_eq!(run(Query::generate("missing", 3, Strategy::Greedy)), vec!["missing missing missing"]);
		assert!(run(Query::top_k("missing", 3)).is_empty());
	}

	#[test]
	fn empty_corpus_degrades() {
		let mut source = FixedSource::new(Vec::new());
		let empty: Vec<String> = Vec::new();
		assert_eq!(Query::generate("Hi", 3, Strategy::Weighted).run(&empty, &mut source), vec!["hi hi hi"]);
		assert!(Query::top_k("hi", 3).run(&empty, &mut source).is_empty());
	}

	#[test]
	fn original_fallback_is_forwarded() {
		let query = Query::Generate {
			seed: "Nope".to_owned(),
			k: 3,
			strategy: Strategy::Greedy,
			fallback: FallbackSeed::Original,
		};
		assert_eq!(run(query), vec!["nope Nope Nope"]);
	}
}
