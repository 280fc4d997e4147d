use crate::config::GenerationConfig;
use crate::error::Result;

/// Characters kept when ASCII restriction is enabled.
pub const ASCII_ALLOW_LIST: &[u8] =
	b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ'\".,-_:;!?() ";

/// Turns a raw input blob into a training corpus.
///
/// The transforms run in a fixed order:
/// 1. short-line filtering (when `min_line` is set)
/// 2. newline folding
/// 3. ASCII restriction (when enabled)
/// 4. lowercasing
/// 5. UTF-8 decoding
///
/// Steps 1 to 4 work on bytes, so the ASCII restriction also discards
/// bytes that would not decode, and the dump output never fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Normalizer {
	min_line: Option<usize>,
	ascii_only: bool,
}

impl Normalizer {
	/// Creates a normalizer from the relevant configuration fields.
	pub fn new(config: &GenerationConfig) -> Self {
		Self { min_line: config.min_line, ascii_only: config.ascii_only }
	}

	/// Runs the byte-level transforms and returns the lowercase bytes.
	///
	/// This is the output of the dump diagnostic mode. Bytes are not
	/// decoded, so invalid UTF-8 is passed through as-is.
	pub fn normalize_bytes(&self, input: &[u8]) -> Vec<u8> {
		let mut bytes = match self.min_line {
			Some(min_line) if min_line > 0 => filter_short_lines(input, min_line),
			_ => input.to_vec(),
		};
		bytes = fold_newlines(&bytes);
		if self.ascii_only {
			bytes = restrict_to_ascii(&bytes);
		}
		bytes.make_ascii_lowercase();
		bytes
	}

	/// Runs every transform and returns the corpus as code points.
	///
	/// Non-ASCII letters are lowercased once decoded.
	///
	/// # Errors
	/// Returns `MarkovError::Encoding` if the lowercase bytes are not UTF-8.
	pub fn normalize(&self, input: &[u8]) -> Result<Vec<char>> {
		let text = String::from_utf8(self.normalize_bytes(input))?;
		Ok(text.to_lowercase().chars().collect())
	}
}

/// Drops empty lines and lines shorter than `min_line` bytes.
///
/// Remaining lines keep their order and are joined with `\n`. A trailing
/// newline in the input does not produce an extra line.
pub fn filter_short_lines(input: &[u8], min_line: usize) -> Vec<u8> {
	let mut lines: Vec<&[u8]> = input.split(|b| *b == b'\n').collect();
	if input.ends_with(b"\n") {
		lines.pop();
	}
	lines.retain(|line| !line.is_empty() && line.len() >= min_line);
	lines.join(&b'\n')
}

/// Replaces every `\n` with a single space.
pub fn fold_newlines(input: &[u8]) -> Vec<u8> {
	input.iter().map(|b| if *b == b'\n' { b' ' } else { *b }).collect()
}

/// Removes every byte outside [`ASCII_ALLOW_LIST`].
pub fn restrict_to_ascii(input: &[u8]) -> Vec<u8> {
	input.iter().copied().filter(|b| ASCII_ALLOW_LIST.contains(b)).collect()
}
