use serde::{Deserialize, Serialize};

/// Input parameters for a babble (random walk) over a `BigramModel`.
///
/// `BabbleInput` groups the walk parameters (`n`, `start`, `stop`) with
/// the generation controls (`seed`, `max_steps`).
///
/// # Responsibilities
/// - Track the walk shape: minimum length `n`, `start` word and `stop` word
/// - Track an optional RNG seed for reproducible output
/// - Track an optional step budget bounding the walk
///
/// Every field has a default, so a partial document deserializes:
/// `{"n": 6}` is a walk from `""` to `""` of at least 6 words.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct BabbleInput {
	/// Minimum number of words in the output (the `start` word included).
	pub n: usize,

	/// First word of the walk.
	pub start: String,

	/// The walk may only end right after producing this word.
	pub stop: String,

	/// Seed for the walk's generator. `None` uses the thread-local one.
	pub seed: Option<u64>,

	/// Maximum number of transitions. `None` means unbounded.
	///
	/// `Some(0)` is legal: the walk then succeeds only if it is already
	/// done at `start`, i.e. `start == stop` and `n <= 1`.
	pub max_steps: Option<usize>,
}

impl BabbleInput {
	/// Creates an unbounded, unseeded input for a walk of at least `n`
	/// words from `start` to `stop`.
	pub fn new(n: usize, start: impl Into<String>, stop: impl Into<String>) -> Self {
		Self { n, start: start.into(), stop: stop.into(), seed: None, max_steps: None }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_are_an_unbounded_empty_walk() {
		let input = BabbleInput::default();
		assert_eq!(input.n, 0);
		assert_eq!(input.start, "");
		assert_eq!(input.stop, "");
		assert_eq!(input.seed, None);
		assert_eq!(input.max_steps, None);
	}

	#[test]
	fn new_is_unbounded_and_unseeded() {
		let input = BabbleInput::new(3, "a", "b");
		assert_eq!(input.n, 3);
		assert_eq!(input.start, "a");
		assert_eq!(input.stop, "b");
		assert_eq!(input.seed, None);
		assert_eq!(input.max_steps, None);
	}

	#[test]
	fn partial_document_deserializes() {
		let input: BabbleInput = serde_json::from_str(r#"{"n": 6, "stop": "."}"#).unwrap();
		assert_eq!(input, BabbleInput::new(6, "", "."));
	}

	#[test]
	fn zero_step_budget_deserializes() {
		let input: BabbleInput = serde_json::from_str(r#"{"max_steps": 0, "seed": 3}"#).unwrap();
		assert_eq!(input.max_steps, Some(0));
		assert_eq!(input.seed, Some(3));
	}
}
