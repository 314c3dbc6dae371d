use std::fmt;
use std::str::FromStr;

use log::trace;

use super::chain_model::ChainModel;
use super::random::RandomSource;
use crate::error::Error;
use crate::tokenizer::fold_case;

/// How the next token is chosen during a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
	/// Sample proportionally to successor probabilities (`"all"`).
	Weighted,
	/// Always follow the most probable successor (`"one"`).
	Greedy,
}

impl FromStr for Strategy {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"all" => Ok(Strategy::Weighted),
			"one" => Ok(Strategy::Greedy),
			other => Err(Error::UnknownMode(other.to_owned())),
		}
	}
}

impl fmt::Display for Strategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Strategy::Weighted => f.write_str("all"),
			Strategy::Greedy => f.write_str("one"),
		}
	}
}

/// Token emitted when the current token has no successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackSeed {
	/// The case-folded seed, so the walk can re-enter the chain.
	#[default]
	Folded,
	/// The seed exactly as given by the caller.
	Original,
}

/// Walks a [`ChainModel`] to generate text.
///
/// # Responsibilities
/// - Start from a seed and emit exactly `length` tokens (at least the seed)
/// - Follow successors with the greedy or the weighted strategy
/// - Restart from the seed whenever the walk reaches a dead end
#[derive(Debug, Clone, Copy)]
pub struct TextWalker<'m> {
	model: &'m ChainModel,
	fallback: FallbackSeed,
}

impl<'m> TextWalker<'m> {
	pub fn new(model: &'m ChainModel) -> Self {
		Self { model, fallback: FallbackSeed::default() }
	}

	/// Selects the token emitted at dead ends.
	pub fn with_fallback(mut self, fallback: FallbackSeed) -> Self {
		self.fallback = fallback;
		self
	}

	/// Generates `length` tokens starting with the case-folded `seed`.
	///
	/// # Behavior
	/// - The first token is always the folded seed, even when `length` is 0.
	/// - Each later token is a successor of the previous one.
	/// - If the previous token has no successor table, or a weighted draw
	///   selects nothing, the fallback seed is emitted and becomes the
	///   current token.
	///
	/// `source` is only consumed by the weighted strategy, one draw per step
	/// that reaches a successor table.
	pub fn walk(&self, seed: &str, length: usize, strategy: Strategy, source: &mut dyn RandomSource) -> Vec<String> {
		let folded = fold_case(seed);
		let fallback = match self.fallback {
			FallbackSeed::Folded => folded.clone(),
			FallbackSeed::Original => seed.to_owned(),
		};

		let mut output = vec![folded.clone()];

		let mut current = folded;
		for _ in 1..length {
			let next = self.model.successors(&current).and_then(|table| match strategy {
				Strategy::Greedy => table.most_probable(),
				Strategy::Weighted => table.sample(source),
			});

			current = match next {
				Some(word) => word.token().to_owned(),
				None => {
					trace!("No successor for '{}', restarting from '{}'", current, fallback);
					fallback.clone()
				}
			};
			output.push(current.clone());
		}

		output
	}
}
