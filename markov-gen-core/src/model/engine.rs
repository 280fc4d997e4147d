use log::{debug, trace};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::ngram_table::NgramTable;
use crate::error::{MarkovError, Result};

/// Seeded random walk over an [`NgramTable`].
///
/// # Responsibilities
/// - Own the transition table built from one corpus
/// - Own the random generator, advanced by every `generate` call
/// - Pick a starting n-gram at a word boundary and extend it
///
/// # Determinism
/// The generator is `ChaCha8Rng::seed_from_u64(seed)`. Every random index
/// is `next_u32() % population`. For a given corpus, order and seed, the
/// sequence of `generate` results is reproducible bit for bit.
#[derive(Clone, Debug)]
pub struct Engine {
	table: NgramTable,
	rng: ChaCha8Rng,
	seed: u64,
}

impl Engine {
	/// Builds the table from `corpus` and seeds the generator.
	///
	/// # Errors
	/// - `InsufficientCorpus` if the corpus has no more than `order` code points.
	/// - `InvalidParameter` if `order` is 0.
	pub fn build(corpus: &[char], order: usize, seed: u64) -> Result<Self> {
		let table = NgramTable::build(corpus, order)?;
		Ok(Self { table, rng: ChaCha8Rng::seed_from_u64(seed), seed })
	}

	/// Seed the generator was built with.
	pub fn seed(&self) -> u64 {
		self.seed
	}

	pub fn order(&self) -> usize {
		self.table.order()
	}

	pub fn table(&self) -> &NgramTable {
		&self.table
	}

	/// Generates a sequence of up to `length` code points.
	///
	/// The output always starts with a whole n-gram beginning with a space,
	/// so it holds at least `order` code points even when `length` is
	/// smaller. Extension stops early when the trailing window was never
	/// followed by anything in the corpus.
	///
	/// # Errors
	/// Returns `NoWordBoundary` if no key starts with a space.
	pub fn generate(&mut self, length: usize) -> Result<Vec<char>> {
		let order = self.table.order();
		let mut result = self.pick_start()?;

		while result.len() < length {
			let window = &result[result.len() - order..];
			let Some(successors) = self.table.get(window) else {
				debug!("Dead end after {} code points", result.len());
				break;
			};
			result.push(successors.pick(&mut self.rng));
		}

		Ok(result)
	}

	/// Draws random keys until one starts with a space.
	fn pick_start(&mut self) -> Result<Vec<char>> {
		if self.table.boundary_keys() == 0 {
			return Err(MarkovError::NoWordBoundary { order: self.table.order() });
		}

		let population = self.table.len();
		let mut attempts = 0usize;
		loop {
			attempts += 1;
			let index = self.rng.next_u32() as usize % population;
			if let Some(key) = self.table.key_at(index) {
				if key[0] == ' ' {
					trace!("Start n-gram found after {} draws", attempts);
					return Ok(key.to_vec());
				}
			}
		}
	}
}
