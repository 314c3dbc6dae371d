use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;

use super::word::Word;

/// Source of randomness for the weighted walk.
///
/// Injected into the walker so that generation can be replayed
/// deterministically (see [`FixedSource`]).
pub trait RandomSource {
	/// Returns a uniform value in `[0, 1)`.
	fn next_unit(&mut self) -> f64;

	/// Permutes the candidates scanned by a weighted draw.
	fn shuffle(&mut self, words: &mut [&Word]);
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
	fn next_unit(&mut self) -> f64 {
		self.0.random::<f64>()
	}

	fn shuffle(&mut self, words: &mut [&Word]) {
		words.shuffle(&mut self.0);
	}
}

/// [`RngSource`] over the thread-local generator.
pub type ThreadSource = RngSource<ThreadRng>;

impl Default for ThreadSource {
	fn default() -> Self {
		Self(rand::rng())
	}
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// Candidates are left in table order (ascending token), so a walk driven by
/// a `FixedSource` is fully reproducible.
#[derive(Debug, Clone)]
pub struct FixedSource {
	values: Vec<f64>,
	index: usize,
}

impl FixedSource {
	/// Creates a source replaying `values`.
	///
	/// An empty sequence always yields 0.0.
	pub fn new(values: Vec<f64>) -> Self {
		Self { values, index: 0 }
	}
}

impl RandomSource for FixedSource {
	fn next_unit(&mut self) -> f64 {
		if self.values.is_empty() {
			return 0.0;
		}
		let value = self.values[self.index % self.values.len()];
		self.index += 1;
		value
	}

	fn shuffle(&mut self, _words: &mut [&Word]) {}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn fixed_source_cycles() {
		let mut source = FixedSource::new(vec![0.1, 0.7]);
		let drawn: Vec<f64> = (0..5).map(|_| source.next_unit()).collect();
		assert_eq!(drawn, vec![0.1, 0.7, 0.1, 0.7, 0.1]);
	}

	#[test]
	fn empty_fixed_source_yields_zero() {
		assert_eq!(FixedSource::new(Vec::new()).next_unit(), 0.0);
	}

	#[test]
	fn rng_source_stays_in_unit_interval() {
		let mut source = RngSource(StdRng::seed_from_u64(7));
		for _ in 0..1000 {
			let value = source.next_unit();
			assert!((0.0..1.0).contains(&value));
		}
	}

	#[test]
	fn seeded_rng_source_is_reproducible() {
		let mut a = RngSource(StdRng::seed_from_u64(42));
		let mut b = RngSource(StdRng::seed_from_u64(42));
		for _ in 0..10 {
			assert_eq!(a.next_unit(), b.next_unit());
		}
	}
}
