use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Splits a line into whitespace-separated words.
///
/// Example:
/// `"  a bee\ta  cow "` → `["a", "bee", "a", "cow"]`
pub(crate) fn words(line: &str) -> Vec<&str> {
	line.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn words_ignores_repeated_whitespace() {
		assert_eq!(words("  a bee\ta  cow "), vec!["a", "bee", "a", "cow"]);
		assert!(words("   ").is_empty());
	}

	#[test]
	fn read_file_splits_lines() {
		let path = std::env::temp_dir().join(format!("rs-bigram-io-{}.txt", std::process::id()));
		std::fs::write(&path, "one two\r\nthree\n").unwrap();

		let lines = read_file(&path).unwrap();
		std::fs::remove_file(&path).unwrap();

		assert_eq!(lines, vec!["one two".to_owned(), "three".to_owned()]);
	}

	#[test]
	fn read_file_reports_missing_file() {
		let path = std::env::temp_dir().join("rs-bigram-io-does-not-exist.txt");
		assert_eq!(read_file(path).unwrap_err().kind(), io::ErrorKind::NotFound);
	}
}
