use indexmap::IndexMap;
use log::debug;

use super::successors::Successors;
use crate::error::{MarkovError, Result};

/// Transition table of a character n-gram model.
///
/// The `NgramTable` maps every window of `order` code points seen in the
/// corpus to the list of code points that followed it.
///
/// # Responsibilities
/// - Slide a window of width `order` over the corpus (stride 1)
/// - Record the character following every window
/// - Look up successors of a window
/// - Expose keys by index, in first-seen order
///
/// # Invariants
/// - `order` is always >= 1
/// - Every key has exactly `order` code points
/// - Every successor list is non-empty
/// - Keys are stored in the order they first appear in the corpus
#[derive(Clone, Debug)]
pub struct NgramTable {
	/// Width of every key, in code points
	order: usize,

	/// Mapping from a window to the characters observed after it
	entries: IndexMap<Vec<char>, Successors>,

	/// Number of keys starting with a space
	boundary_keys: usize,
}

impl NgramTable {
	/// Builds the table from a corpus.
	///
	/// # Errors
	/// - `InvalidParameter` if `order` is 0.
	/// - `InsufficientCorpus` if the corpus has no more than `order` code points.
	pub fn build(corpus: &[char], order: usize) -> Result<Self> {
		if order == 0 {
			return Err(MarkovError::invalid_parameter("order must be >= 1"));
		}
		if corpus.len() <= order {
			return Err(MarkovError::InsufficientCorpus { length: corpus.len(), order });
		}

		let mut entries: IndexMap<Vec<char>, Successors> = IndexMap::new();
		for window in corpus.windows(order + 1) {
			let (key, next) = window.split_at(order);
			match entries.get_mut(key) {
				Some(successors) => successors.push(next[0]),
				None => {
					entries.insert(key.to_vec(), Successors::new(next[0]));
				}
			}
		}

		let boundary_keys = entries.keys().filter(|key| key[0] == ' ').count();
		debug!(
			"Built order-{} table: {} code points, {} keys, {} at word boundaries",
			order,
			corpus.len(),
			entries.len(),
			boundary_keys
		);

		Ok(Self { order, entries, boundary_keys })
	}

	pub fn order(&self) -> usize {
		self.order
	}

	/// Number of distinct keys.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Number of keys whose first code point is a space.
	pub fn boundary_keys(&self) -> usize {
		self.boundary_keys
	}

	/// Returns the successors of `key`, or `None` if it was never seen.
	pub fn get(&self, key: &[char]) -> Option<&Successors> {
		self.entries.get(key)
	}

	/// Returns the key at `index` in first-seen order.
	pub fn key_at(&self, index: usize) -> Option<&[char]> {
		self.entries.get_index(index).map(|(key, _)| key.as_slice())
	}

	/// Iterates over keys in first-seen order.
	pub fn keys(&self) -> impl Iterator<Item = &[char]> {
		self.entries.keys().map(Vec::as_slice)
	}

	/// Iterates over `(key, successors)` pairs in first-seen order.
	pub fn iter(&self) -> impl Iterator<Item = (&[char], &Successors)> {
		self.entries.iter().map(|(key, successors)| (key.as_slice(), successors))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn chars(s: &str) -> Vec<char> {
		s.chars().collect()
	}

	#[test]
	fn windows_overlap_with_stride_one() {
		let table = NgramTable::build(&chars("abab"), 2).unwrap();
		assert_eq!(table.len(), 2);
		assert!(!table.is_empty());
		assert_eq!(table.get(&chars("ab")).unwrap().as_slice(), &['a']);
		assert_eq!(table.get(&chars("ba")).unwrap().as_slice(), &['b']);
	}

	#[test]
	fn repeated_contexts_keep_every_successor() {
		let table = NgramTable::build(&chars("the cat the car the end"), 4).unwrap();
		assert_eq!(table.get(&chars("the ")).unwrap().as_slice(), &['c', 'c', 'e']);
		assert_eq!(table.get(&chars(" the")).unwrap().as_slice(), &[' ', ' ']);
	}

	#[test]
	fn keys_are_in_first_seen_order() {
		let table = NgramTable::build(&chars("the cat"), 3).unwrap();
		let keys: Vec<String> = table.keys().map(|k| k.iter().collect()).collect();
		assert_eq!(keys, vec!["the", "he ", "e c", " ca"]);
		assert_eq!(table.key_at(3), Some(&[' ', 'c', 'a'][..]));
		assert_eq!(table.key_at(4), None);
		assert_eq!(table.boundary_keys(), 1);
	}

	#[test]
	fn last_window_has_no_entry() {
		let table = NgramTable::build(&chars("abcd"), 2).unwrap();
		assert!(table.get(&chars("cd")).is_none());
	}

	#[test]
	fn corpus_not_longer_than_order_is_rejected() {
		for corpus in ["", "abc", "abcdef"] {
			let result = NgramTable::build(&chars(corpus), 6);
			assert!(matches!(
				result,
				Err(MarkovError::InsufficientCorpus { order: 6, .. })
			));
		}
		assert!(NgramTable::build(&chars("abcdefg"), 6).is_ok());
	}

	#[test]
	fn zero_order_is_rejected() {
		assert!(matches!(
			NgramTable::build(&chars("abc"), 0),
			Err(MarkovError::InvalidParameter { .. })
		));
	}

	#[test]
	fn keys_compare_by_code_point() {
		let table = NgramTable::build(&chars("été été"), 2).unwrap();
		assert_eq!(table.get(&chars("ét")).unwrap().as_slice(), &['é', 'é']);
	}

	proptest! {
		#[test]
		fn every_key_has_order_length_and_successors(
			corpus in proptest::collection::vec(proptest::char::range('a', 'e'), 2..200),
			order in 1usize..8,
		) {
			prop_assume!(corpus.len() > order);
			let table = NgramTable::build(&corpus, order).unwrap();
			let mut total = 0;
			for (key, successors) in table.iter() {
				prop_assert_eq!(key.len(), order);
				prop_assert!(!successors.is_empty());
				total += successors.len();
			}
			prop_assert_eq!(total, corpus.len() - order);
		}
	}
}
