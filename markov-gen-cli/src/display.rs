use regex::Regex;

/// Pieces longer than this start a new display line when splitting.
const MIN_SPLIT_PIECE: usize = 5;

/// Trims spaces and tabs (but not other whitespace) from both ends.
pub fn trim(s: &str) -> &str {
	s.trim_matches(|c| c == ' ' || c == '\t')
}

/// Cuts `text` into alternating non-matching and matching pieces.
///
/// The text before every match is always emitted, even when empty. The
/// text after the last match is emitted only when non-empty.
fn pieces<'a>(text: &'a str, re: &Regex) -> Vec<&'a str> {
	let mut pieces = Vec::new();
	let mut last = 0;
	for m in re.find_iter(text) {
		pieces.push(&text[last..m.start()]);
		pieces.push(m.as_str());
		last = m.end();
	}
	if last < text.len() || pieces.is_empty() {
		pieces.push(&text[last..]);
	}
	pieces
}

/// Splits one generated sequence into display lines.
///
/// The first piece opens the first line. Later pieces longer than five
/// bytes open a new line; shorter ones (punctuation matches, stray
/// fragments) are glued to the current line. Every piece is trimmed.
pub fn split_lines(text: &str, re: &Regex) -> Vec<String> {
	let mut lines = Vec::new();
	let mut current = String::new();
	for (i, piece) in pieces(text, re).into_iter().enumerate() {
		if i > 0 && piece.len() > MIN_SPLIT_PIECE {
			lines.push(std::mem::take(&mut current));
		}
		current.push_str(trim(piece));
	}
	lines.push(current);
	lines
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn trim_only_strips_spaces_and_tabs() {
		assert_eq!(trim(" \t hello world\t "), "hello world");
		assert_eq!(trim("\nhello\n"), "\nhello\n");
	}

	#[test]
	fn sentences_break_on_long_pieces() {
		let re = Regex::new(r"[.!?]").unwrap();
		let lines = split_lines(" the cat sat. on the mat! ok? it ran", &re);
		assert_eq!(lines, vec!["the cat sat.", "on the mat!ok?", "it ran"]);
	}

	#[test]
	fn no_match_keeps_the_whole_text() {
		let re = Regex::new(r"\d").unwrap();
		assert_eq!(split_lines("  plain text ", &re), vec!["plain text"]);
	}

	#[test]
	fn trailing_match_adds_no_empty_piece() {
		let re = Regex::new(r"\.").unwrap();
		assert_eq!(pieces("abc.", &re), vec!["abc", "."]);
		assert_eq!(pieces(".abc", &re), vec!["", ".", "abc"]);
	}
}
