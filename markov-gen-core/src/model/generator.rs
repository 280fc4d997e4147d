use log::{debug, info};

use crate::config::GenerationConfig;
use crate::error::Result;
use crate::model::engine::Engine;
use crate::normalizer::Normalizer;

/// Result of running the pipeline on one input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Generation {
	/// Normalized lowercase bytes, generation skipped. Not necessarily UTF-8.
	Dump(Vec<u8>),

	/// Generated lines, untrimmed, together with the seed that produced them.
	Lines { seed: u64, lines: Vec<String> },
}

/// High-level entry point: raw input in, generated text out.
///
/// # Responsibilities
/// - Normalize the input according to the configuration
/// - Build a fresh `Engine` for every input
/// - Call `generate` once per requested line
///
/// Inputs never share an engine, so each one gets its own table and
/// generator state.
#[derive(Clone, Debug)]
pub struct Generator {
	config: GenerationConfig,
	normalizer: Normalizer,
}

impl Generator {
	/// Creates a generator for the given configuration.
	///
	/// # Errors
	/// Returns an error if the configuration holds out-of-range values.
	pub fn new(config: GenerationConfig) -> Result<Self> {
		config.validate()?;
		let normalizer = Normalizer::new(&config);
		Ok(Self { config, normalizer })
	}

	/// Runs the whole pipeline on one input.
	///
	/// # Behavior
	/// - In dump mode, returns the normalized bytes without decoding them or
	///   building a table.
	/// - Otherwise resolves the seed (configured or freshly drawn), builds an
	///   engine and generates `lines` sequences of up to `length` code points.
	///
	/// # Errors
	/// - `Encoding` if the input is not UTF-8 after filtering (never in dump mode).
	/// - `InsufficientCorpus` if the normalized input is too short.
	/// - `NoWordBoundary` if no n-gram starts with a space.
	pub fn run(&self, input: &[u8]) -> Result<Generation> {
		if self.config.dump_input {
			return Ok(Generation::Dump(self.normalizer.normalize_bytes(input)));
		}

		let corpus = self.normalizer.normalize(input)?;
		let seed = self.config.resolve_seed();
		info!("Training on {} code points with seed {}", corpus.len(), seed);

		let mut engine = Engine::build(&corpus, self.config.order(), seed)?;
		let mut lines: Vec<String> = Vec::new();
		for _ in 0..self.config.lines() {
			let generated = engine.generate(self.config.length)?;
			debug!("Generated {} code points", generated.len());
			lines.push(generated.into_iter().collect());
		}

		Ok(Generation::Lines { seed, lines })
	}

	/// Runs the pipeline on several inputs.
	///
	/// Returns one result per input, in order. A failing input does not
	/// stop the others.
	pub fn run_batch<I, B>(&self, inputs: I) -> Vec<Result<Generation>>
	where
		I: IntoIterator<Item = B>,
		B: AsRef<[u8]>,
	{
		inputs.into_iter().map(|input| self.run(input.as_ref())).collect()
	}
}
