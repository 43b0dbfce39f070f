use rand::rngs::{StdRng, ThreadRng};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Source of randomness used when walking the model.
///
/// Given the candidate successors of a word (duplicates included), a
/// `Chooser` picks one of them. Implementations backed by an RNG pick
/// uniformly, which makes the walk frequency-weighted since a bigram
/// trained `k` times appears `k` times in the candidates.
///
/// Returns `None` only if `options` is empty.
pub trait Chooser {
	fn choose<'a>(&mut self, options: &[&'a str]) -> Option<&'a str>;
}

/// A `Chooser` drawing uniformly with any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomChooser<R: Rng> {
	rng: R,
}

impl<R: Rng> RandomChooser<R> {
	/// Wraps a caller-supplied generator.
	pub fn new(rng: R) -> Self {
		Self { rng }
	}
}

impl RandomChooser<ThreadRng> {
	/// Uses the thread-local generator.
	pub fn thread() -> Self {
		Self::new(rand::rng())
	}
}

impl RandomChooser<StdRng> {
	/// Uses a generator seeded with `seed`, so the sequence of picks is
	/// reproducible.
	pub fn seeded(seed: u64) -> Self {
		Self::new(StdRng::seed_from_u64(seed))
	}
}

impl<R: Rng> Chooser for RandomChooser<R> {
	fn choose<'a>(&mut self, options: &[&'a str]) -> Option<&'a str> {
		options.choose(&mut self.rng).copied()
	}
}
