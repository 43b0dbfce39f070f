/// An ordered pair of adjacent words.
///
/// Two bigrams are equal when both of their words are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bigram {
	first: String,
	second: String,
}

impl Bigram {
	/// Creates a bigram from its two words.
	pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
		Self { first: first.into(), second: second.into() }
	}

	/// The word the transition starts from.
	pub fn first(&self) -> &str {
		&self.first
	}

	/// The word the transition leads to.
	pub fn second(&self) -> &str {
		&self.second
	}

	/// Returns `true` if this bigram is exactly `(first, second)`.
	pub fn is(&self, first: &str, second: &str) -> bool {
		self.first == first && self.second == second
	}
}

/// Turns a sequence of words into its list of bigrams.
///
/// A text of `N` words yields the `N - 1` pairs `(text[i], text[i + 1])`,
/// in order. Texts with fewer than two words yield nothing.
///
/// Example:
/// `["a", "b", "a", "c"]` → `[(a, b), (b, a), (a, c)]`
pub fn bigrams_in<S: AsRef<str>>(text: &[S]) -> Vec<Bigram> {
	text.windows(2)
		.map(|pair| Bigram::new(pair[0].as_ref(), pair[1].as_ref()))
		.collect()
}
