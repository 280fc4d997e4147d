use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{MarkovError, Result};

/// Default n-gram order.
pub const DEFAULT_ORDER: usize = 6;

/// Default generated length, in code points.
pub const DEFAULT_LENGTH: usize = 100;

/// Default number of generations per input.
pub const DEFAULT_LINES: usize = 1;

/// Parameters for normalizing one input and generating from it.
///
/// `GenerationConfig` is passed by value to the pipeline and never mutated
/// internally. Every field has a default, so a partially filled
/// configuration file deserializes cleanly.
///
/// # Invariants
/// - `order` is strictly positive
/// - `lines` is strictly positive
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
	/// Length of the context window, in code points.
	order: usize,

	/// Generation stops once the output reaches this many code points.
	pub length: usize,

	/// Number of independent generations per input.
	lines: usize,

	/// RNG seed. `None` draws a fresh one per input.
	pub seed: Option<u64>,

	/// Drop lines shorter than this (in bytes) before training.
	pub min_line: Option<usize>,

	/// Keep only the ASCII allow-list characters.
	pub ascii_only: bool,

	/// Return the normalized text instead of generating.
	pub dump_input: bool,
}

impl Default for GenerationConfig {
	fn default() -> Self {
		Self {
			order: DEFAULT_ORDER,
			length: DEFAULT_LENGTH,
			lines: DEFAULT_LINES,
			seed: None,
			min_line: None,
			ascii_only: false,
			dump_input: false,
		}
	}
}

impl GenerationConfig {
	/// Returns the n-gram order.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Returns the number of generations per input.
	pub fn lines(&self) -> usize {
		self.lines
	}

	/// Sets the n-gram order.
	///
	/// # Errors
	/// Returns an error if `order` is 0.
	pub fn set_order(&mut self, order: usize) -> Result<()> {
		if order == 0 {
			return Err(MarkovError::invalid_parameter("order must be >= 1"));
		}
		self.order = order;
		Ok(())
	}

	/// Sets the number of generations per input.
	///
	/// # Errors
	/// Returns an error if `lines` is 0.
	pub fn set_lines(&mut self, lines: usize) -> Result<()> {
		if lines == 0 {
			return Err(MarkovError::invalid_parameter("lines must be >= 1"));
		}
		self.lines = lines;
		Ok(())
	}

	/// Checks values that may have bypassed the setters (deserialized files).
	pub fn validate(&self) -> Result<()> {
		if self.order == 0 {
			return Err(MarkovError::invalid_parameter("order must be >= 1"));
		}
		if self.lines == 0 {
			return Err(MarkovError::invalid_parameter("lines must be >= 1"));
		}
		Ok(())
	}

	/// Returns the configured seed, or draws one from system entropy.
	///
	/// Each call without a configured seed yields a new value, so every
	/// input of a batch gets its own generator.
	pub fn resolve_seed(&self) -> u64 {
		self.seed.unwrap_or_else(|| rand::rng().random())
	}
}
