use std::path::Path;
use std::sync::mpsc;
use std::thread;

use log::{debug, trace, warn};

use super::babble_input::BabbleInput;
use super::bigram::{Bigram, bigrams_in};
use super::chooser::{Chooser, RandomChooser};
use crate::error::{BigramError, Result};
use crate::io::{read_file, words};

/// Number of chunks per CPU when training from many lines.
const CHUNK_FACTOR: usize = 8;

/// A Markov model of bigrams.
///
/// The model is the ordered multiset of every bigram it was trained on:
/// training the same pair twice stores it twice, which is what makes
/// generation frequency-weighted.
///
/// # Responsibilities
/// - Accumulate bigrams from pairs, word sequences, lines or files
/// - Answer membership queries for single pairs and whole texts
/// - Walk the model randomly to produce text (`babble`)
/// - Merge with another model
///
/// # Invariants
/// - `len()` is the total number of bigrams ever trained or merged in
/// - Bigrams are kept in training order and are never removed or reordered
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BigramModel {
	bigrams: Vec<Bigram>,
}

impl BigramModel {
	/// Creates an empty model.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a model from a text file.
	///
	/// Each line is split on whitespace and trained as its own corpus,
	/// see `train_lines_parallel`.
	///
	/// # Errors
	/// Returns an error if the file cannot be read or a worker fails.
	pub fn from_file<P: AsRef<Path>>(filepath: P) -> Result<Self> {
		let lines = read_file(&filepath)?;
		let mut model = Self::new();
		model.train_lines_parallel(&lines)?;
		debug!(
			"Loaded {} bigrams from {} lines of {}",
			model.len(),
			lines.len(),
			filepath.as_ref().display()
		);
		Ok(model)
	}

	/// Returns the number of bigrams in the model.
	pub fn len(&self) -> usize {
		self.bigrams.len()
	}

	/// Returns `true` if the model was never trained.
	pub fn is_empty(&self) -> bool {
		self.bigrams.is_empty()
	}

	/// Iterates over the stored bigrams in training order.
	pub fn bigrams(&self) -> impl Iterator<Item = &Bigram> {
		self.bigrams.iter()
	}

	/// Adds one bigram to the model.
	///
	/// No validation: empty strings are legal words.
	pub fn train_one(&mut self, first: &str, second: &str) {
		self.bigrams.push(Bigram::new(first, second));
	}

	/// Trains the model on a whole corpus.
	///
	/// A corpus of `N` words adds its `N - 1` consecutive pairs, in order.
	/// Same as calling `train_one` on each pair from left to right.
	pub fn train<S: AsRef<str>>(&mut self, corpus: &[S]) {
		self.bigrams.extend(bigrams_in(corpus));
	}

	/// Trains the model on lines of text.
	///
	/// Each line is split on whitespace and trained as an independent
	/// corpus: no bigram spans two lines.
	pub fn train_lines<S: AsRef<str>>(&mut self, lines: &[S]) {
		for line in lines {
			self.train(&words(line.as_ref()));
		}
	}

	/// Same result as `train_lines`, computed on several threads.
	///
	/// # Behavior
	/// - Splits the lines into chunks (based on CPU cores * factor).
	/// - Spawns one thread per chunk to build a partial model.
	/// - Merges the partial models back in chunk order, so the stored
	///   bigrams are in the same order as with `train_lines`.
	///
	/// # Errors
	/// Returns an error if a worker exits without sending its partial
	/// model. The model is left untouched in that case.
	pub fn train_lines_parallel<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<()> {
		if lines.is_empty() {
			return Ok(());
		}

		let chunks = num_cpus::get() * CHUNK_FACTOR;
		let chunk_size = lines.len().div_ceil(chunks);

		let (tx, rx) = mpsc::channel();
		let mut workers = 0;
		for (index, chunk) in lines.chunks(chunk_size).enumerate() {
			let tx = tx.clone();
			let chunk: Vec<String> = chunk.iter().map(|line| line.as_ref().to_owned()).collect();

			thread::spawn(move || {
				let mut partial_model = BigramModel::new();
				partial_model.train_lines(&chunk);
				if tx.send((index, partial_model)).is_err() {
					warn!("Training worker {index} could not send its partial model");
				}
			});
			workers += 1;
		}
		drop(tx);

		// Workers finish in any order, slot each partial model by chunk index
		let mut partial_models: Vec<Option<BigramModel>> = vec![None; workers];
		for (index, partial_model) in rx.iter() {
			partial_models[index] = Some(partial_model);
		}

		let mut combined = BigramModel::new();
		for (index, partial_model) in partial_models.into_iter().enumerate() {
			let partial_model = partial_model.ok_or(BigramError::WorkerFailed(index))?;
			combined.bigrams.extend(partial_model.bigrams);
		}

		debug!("Trained {} bigrams from {} lines on {} workers", combined.len(), lines.len(), workers);
		self.bigrams.extend(combined.bigrams);
		Ok(())
	}

	/// Merges another model into this one.
	///
	/// The bigrams of `other` are appended after the existing ones, in
	/// their own order. The resulting length is the sum of both lengths.
	pub fn merge(&mut self, other: &Self) {
		debug!("Merging {} bigrams into a model of {}", other.len(), self.len());
		self.bigrams.extend(other.bigrams.iter().cloned());
	}

	/// Returns whether `(first, second)` is in this model.
	pub fn check_one(&self, first: &str, second: &str) -> bool {
		self.bigrams.iter().any(|bigram| bigram.is(first, second))
	}

	/// Returns whether `text` could have been generated by this model.
	///
	/// Every consecutive pair of `text` must be a known bigram. This only
	/// checks adjacency, not that a single walk produces the whole text.
	/// Texts of fewer than two words are always accepted.
	pub fn check<S: AsRef<str>>(&self, text: &[S]) -> bool {
		text.windows(2).all(|pair| self.check_one(pair[0].as_ref(), pair[1].as_ref()))
	}

	/// Returns all possible next words after `state`, at the frequency
	/// they were trained.
	///
	/// Example: after training on `a bee a bee a bee a cow`,
	/// `possibilities("a")` is `["bee", "bee", "bee", "cow"]` and
	/// `possibilities("cow")` is empty.
	pub fn possibilities(&self, state: &str) -> Vec<&str> {
		self.bigrams
			.iter()
			.filter(|bigram| bigram.first() == state)
			.map(Bigram::second)
			.collect()
	}

	/// Produces the next word from `state` using the thread-local generator.
	///
	/// # Errors
	/// Returns `NoTransition` if `state` has no possible next word.
	pub fn next(&self, state: &str) -> Result<String> {
		self.next_with(state, &mut RandomChooser::thread())
	}

	/// Produces the next word from `state`, picked by `chooser`.
	///
	/// # Errors
	/// Returns `NoTransition` if `state` has no possible next word.
	pub fn next_with<C: Chooser + ?Sized>(&self, state: &str, chooser: &mut C) -> Result<String> {
		let options = self.possibilities(state);
		chooser
			.choose(&options)
			.map(str::to_owned)
			.ok_or_else(|| BigramError::NoTransition { state: state.to_owned() })
	}

	/// Produces a sequence of words randomly from the model.
	///
	/// The output starts with `start`. Words are appended until the last
	/// one is `stop` and the output holds at least `n` words; the walk
	/// never ends on a word other than `stop`.
	///
	/// # Errors
	/// Returns `NoTransition` if the walk reaches a word with no successor
	/// before it can stop.
	///
	/// # Notes
	/// - The walk is unbounded: if `stop` is unreachable and the model
	///   never dead-ends, this does not return. Use `babble_from` with a
	///   step budget for bounded execution.
	pub fn babble(&self, n: usize, start: &str, stop: &str) -> Result<Vec<String>> {
		self.babble_with(n, start, stop, &mut RandomChooser::thread())
	}

	/// Same as `babble`, with successors picked by `chooser`.
	pub fn babble_with<C: Chooser + ?Sized>(
		&self,
		n: usize,
		start: &str,
		stop: &str,
		chooser: &mut C,
	) -> Result<Vec<String>> {
		self.walk(n, start, stop, None, chooser)
	}

	/// Produces a sequence of words as configured by `input`.
	///
	/// - With `input.seed` set, the walk is reproducible.
	/// - With a step budget set, the walk fails with `StepBudgetExhausted`
	///   instead of running forever.
	///
	/// # Errors
	/// Returns an error if the walk dead-ends or if the step budget runs out.
	pub fn babble_from(&self, input: &BabbleInput) -> Result<Vec<String>> {
		match input.seed {
			Some(seed) => self.babble_from_with(input, &mut RandomChooser::seeded(seed)),
			None => self.babble_from_with(input, &mut RandomChooser::thread()),
		}
	}

	/// Same as `babble_from`, with successors picked by `chooser`.
	/// `input.seed` is ignored.
	pub fn babble_from_with<C: Chooser + ?Sized>(&self, input: &BabbleInput, chooser: &mut C) -> Result<Vec<String>> {
		self.walk(input.n, &input.start, &input.stop, input.max_steps, chooser)
	}

	fn walk<C: Chooser + ?Sized>(
		&self,
		n: usize,
		start: &str,
		stop: &str,
		max_steps: Option<usize>,
		chooser: &mut C,
	) -> Result<Vec<String>> {
		let mut state = start.to_owned();
		let mut result = vec![state.clone()];
		let mut steps = 0;

		while state != stop || result.len() < n {
			if max_steps.is_some_and(|max| steps >= max) {
				return Err(BigramError::StepBudgetExhausted { steps, stop: stop.to_owned() });
			}
			state = self.next_with(&state, &mut *chooser)?;
			trace!("babble step {steps}: {state:?}");
			result.push(state.clone());
			steps += 1;
		}

		Ok(result)
	}
}
