use log::warn;
use num_bigint::BigUint;

/// State of the integer token automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
	/// Between tokens.
	Start,
	/// Inside a word. Digits read here belong to the word.
	InWord,
	/// Inside a run of digits that may still become a number.
	InNumber,
}

/// Class of an input character, as seen by the automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CharClass {
	Letter,
	Digit,
	Other,
}

impl CharClass {
	fn of(c: char) -> Self {
		if c.is_ascii_alphabetic() {
			CharClass::Letter
		} else if c.is_ascii_digit() {
			CharClass::Digit
		} else {
			CharClass::Other
		}
	}
}

/// Finite state machine extracting integers embedded in text.
///
/// A number is a maximal run of ASCII digits that does not touch a letter:
/// - letters before the run make it part of a word (`hello6`)
/// - a letter right after the run abandons it (`6th`)
/// - the run is emitted when a character that is neither a letter nor a
///   digit ends it (`6,` or `6 `)
///
/// The scanner is fed character by character and keeps its state across
/// calls to `feed`, so a token may span several chunks of input.
///
/// # Invariants
/// - `buffer` is non-empty exactly when the state is `InNumber`
#[derive(Debug)]
pub struct IntegerTokenScanner {
	state: ScanState,
	buffer: String,
	tokens: Vec<BigUint>,
}

impl Default for IntegerTokenScanner {
	fn default() -> Self {
		Self::new()
	}
}

impl IntegerTokenScanner {
	pub fn new() -> Self {
		Self { state: ScanState::Start, buffer: String::new(), tokens: Vec::new() }
	}

	/// Current state of the automaton.
	pub fn state(&self) -> ScanState {
		self.state
	}

	/// Numbers emitted so far, in encounter order.
	pub fn tokens(&self) -> &[BigUint] {
		&self.tokens
	}

	/// Advances the automaton by one character.
	pub fn feed_char(&mut self, c: char) {
		self.state = match (self.state, CharClass::of(c)) {
			(ScanState::Start, CharClass::Letter) => ScanState::InWord,
			(ScanState::Start, CharClass::Digit) => {
				self.buffer.push(c);
				ScanState::InNumber
			}
			(ScanState::Start, CharClass::Other) => ScanState::Start,

			(ScanState::InWord, CharClass::Letter | CharClass::Digit) => ScanState::InWord,
			(ScanState::InWord, CharClass::Other) => ScanState::Start,

			(ScanState::InNumber, CharClass::Letter) => {
				self.buffer.clear();
				ScanState::InWord
			}
			(ScanState::InNumber, CharClass::Digit) => {
				self.buffer.push(c);
				ScanState::InNumber
			}
			(ScanState::InNumber, CharClass::Other) => {
				self.emit();
				ScanState::Start
			}
		};
	}

	/// Feeds every character of `text`.
	pub fn feed(&mut self, text: &str) {
		for c in text.chars() {
			self.feed_char(c);
		}
	}

	/// Ends the scan and returns the numbers found.
	///
	/// A number still pending (input ended right after a digit) is not
	/// emitted: a run only counts once a non-letter, non-digit character
	/// terminates it.
	pub fn finish(self) -> Vec<BigUint> {
		self.tokens
	}

	/// Converts the buffered digit run, of any length, to a number.
	fn emit(&mut self) {
		match BigUint::parse_bytes(self.buffer.as_bytes(), 10) {
			Some(value) => self.tokens.push(value),
			// Only ASCII digits reach the buffer
			None => warn!("Skipping malformed digit run {:?}", self.buffer),
		}
		self.buffer.clear();
	}
}

/// Extracts every integer embedded in `lines`.
///
/// Lines are scanned in order as if read from a file: each one is
/// followed by a line terminator, which ends a pending number. The
/// automaton state is otherwise carried from one line to the next.
///
/// Examples:
/// - `["hello 6", "goodbye 75"]` → `[6, 75]`
/// - `["hello6"]` → `[]`
/// - `["hello,6"]` → `[6]`
///
/// Runs are not limited in length: `99999999999999999999999` is returned
/// as is.
pub fn extract_ints<S: AsRef<str>>(lines: &[S]) -> Vec<BigUint> {
	let mut scanner = IntegerTokenScanner::new();
	for line in lines {
		scanner.feed(line.as_ref());
		scanner.feed_char('\n');
	}
	scanner.finish()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ints(values: &[u64]) -> Vec<BigUint> {
		values.iter().map(|&v| BigUint::from(v)).collect()
	}

	#[test]
	fn numbers_on_separate_lines() {
		assert_eq!(extract_ints(&["hello 6", "goodbye 75"]), ints(&[6, 75]));
	}

	#[test]
	fn digits_after_letters_belong_to_the_word() {
		assert_eq!(extract_ints(&["hello6"]), Vec::<BigUint>::new());
		assert_eq!(extract_ints(&["abc123def 4"]), ints(&[4]));
	}

	#[test]
	fn punctuation_separates_numbers() {
		assert_eq!(extract_ints(&["hello,6"]), ints(&[6]));
		assert_eq!(extract_ints(&["1,2;3 (4)"]), ints(&[1, 2, 3, 4]));
	}

	#[test]
	fn letter_after_digits_abandons_the_number() {
		assert_eq!(extract_ints(&["the 6th and 7 more"]), ints(&[7]));
		assert_eq!(extract_ints(&["12ab34 5"]), ints(&[5]));
	}

	#[test]
	fn leading_zeros_are_dropped() {
		assert_eq!(extract_ints(&["agent 007"]), ints(&[7]));
	}

	#[test]
	fn empty_input() {
		assert!(extract_ints::<&str>(&[]).is_empty());
		assert!(extract_ints(&["", "   ", "no numbers here"]).is_empty());
	}

	#[test]
	fn non_ascii_letters_are_separators() {
		assert_eq!(extract_ints(&["é5é"]), ints(&[5]));
	}

	#[test]
	fn runs_beyond_u64_are_kept() {
		let out = extract_ints(&["99999999999999999999999 1"]);
		assert_eq!(out.len(), 2);
		assert_eq!(out[0].to_string(), "99999999999999999999999");
		assert_eq!(out[1], BigUint::from(1u32));

		let max_plus_one = BigUint::from(u64::MAX) + 1u32;
		assert_eq!(extract_ints(&["18446744073709551616"]), vec![max_plus_one]);
		assert_eq!(extract_ints(&["18446744073709551615"]), ints(&[u64::MAX]));
	}

	#[test]
	fn pending_number_is_not_flushed_at_end() {
		let mut scanner = IntegerTokenScanner::new();
		scanner.feed("hello 6 goodbye 75");
		assert_eq!(scanner.state(), ScanState::InNumber);
		assert_eq!(scanner.tokens(), ints(&[6]).as_slice());
		assert_eq!(scanner.finish(), ints(&[6]));
	}

	#[test]
	fn state_carries_across_feeds() {
		let mut scanner = IntegerTokenScanner::new();
		scanner.feed("4");
		scanner.feed("2 ");
		scanner.feed("ab");
		scanner.feed("3 ");
		assert_eq!(scanner.state(), ScanState::Start);
		assert_eq!(scanner.finish(), ints(&[42]));
	}

	#[test]
	fn transition_table() {
		let cases = [
			(ScanState::Start, 'a', ScanState::InWord),
			(ScanState::Start, '1', ScanState::InNumber),
			(ScanState::Start, ' ', ScanState::Start),
			(ScanState::InWord, 'a', ScanState::InWord),
			(ScanState::InWord, '1', ScanState::InWord),
			(ScanState::InWord, ' ', ScanState::Start),
			(ScanState::InNumber, 'a', ScanState::InWord),
			(ScanState::InNumber, '1', ScanState::InNumber),
			(ScanState::InNumber, ' ', ScanState::Start),
		];

		for (from, c, to) in cases {
			let mut scanner = IntegerTokenScanner::new();
			match from {
				ScanState::Start => {}
				ScanState::InWord => scanner.feed_char('w'),
				ScanState::InNumber => scanner.feed_char('9'),
			}
			assert_eq!(scanner.state(), from);
			scanner.feed_char(c);
			assert_eq!(scanner.state(), to, "from {from:?} on {c:?}");
		}
	}
}
