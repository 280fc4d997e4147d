use rand::RngCore;

/// Characters observed right after one n-gram.
///
/// Conceptually, this is the outgoing edge list of a node in the Markov
/// chain. Duplicates are kept: a character seen twice is twice as likely
/// to be picked.
///
/// ## Invariants
/// - The list is never empty once stored in a table
/// - Order of insertion is preserved
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Successors {
	chars: Vec<char>,
}

impl Successors {
	/// Creates a list holding a single observation.
	pub fn new(first: char) -> Self {
		Self { chars: vec![first] }
	}

	/// Records one more occurrence of `next_char`.
	pub fn push(&mut self, next_char: char) {
		self.chars.push(next_char);
	}

	/// Number of recorded occurrences (duplicates included).
	pub fn len(&self) -> usize {
		self.chars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.chars.is_empty()
	}

	pub fn as_slice(&self) -> &[char] {
		&self.chars
	}

	/// Picks a successor uniformly over the recorded occurrences.
	///
	/// One `u32` is always drawn, even for a single-entry list, and reduced
	/// modulo the list length.
	pub fn pick<R: RngCore>(&self, rng: &mut R) -> char {
		let index = rng.next_u32() as usize % self.chars.len();
		self.chars[index]
	}
}
