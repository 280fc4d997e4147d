use std::path::PathBuf;

use clap::Parser;
use markov_gen_core::GenerationConfig;

/// Generate random text from a character-level Markov chain.
#[derive(Parser, Debug)]
#[command(name = "markov-gen", version, about)]
pub struct Args {
	/// The input file (may be repeated; every file is processed independently)
	#[arg(short = 'f', long = "file", value_name = "PATH")]
	pub files: Vec<PathBuf>,

	/// Read input from stdin instead
	#[arg(long)]
	pub stdin: bool,

	/// The maximum length of the output
	#[arg(long)]
	pub length: Option<usize>,

	/// How many lines to generate
	#[arg(long)]
	pub lines: Option<usize>,

	/// The order of the ngrams
	#[arg(long)]
	pub order: Option<usize>,

	/// The seed for the random number generator
	#[arg(long)]
	pub seed: Option<u64>,

	/// Ignore lines that are shorter than this
	#[arg(long = "min-line")]
	pub min_line: Option<usize>,

	/// Split output by regex
	#[arg(long, value_name = "REGEX")]
	pub split: Option<String>,

	/// Print the processed text instead of generating output
	#[arg(long = "dump-input")]
	pub dump_input: bool,

	/// Print the seed used for the random number generator
	#[arg(long = "print-seed")]
	pub print_seed: bool,

	/// Strip non-ascii characters
	#[arg(long)]
	pub ascii: bool,

	/// TOML file providing default generation settings
	#[arg(long, value_name = "PATH")]
	pub config: Option<PathBuf>,
}

impl Args {
	/// Applies command-line values on top of `base`.
	///
	/// Flags only ever switch boolean settings on; a file cannot be
	/// overridden back to `false` from the command line.
	pub fn apply(&self, mut base: GenerationConfig) -> markov_gen_core::Result<GenerationConfig> {
		if let Some(order) = self.order {
			base.set_order(order)?;
		}
		if let Some(lines) = self.lines {
			base.set_lines(lines)?;
		}
		if let Some(length) = self.length {
			base.length = length;
		}
		if self.seed.is_some() {
			base.seed = self.seed;
		}
		if self.min_line.is_some() {
			base.min_line = self.min_line;
		}
		base.ascii_only |= self.ascii;
		base.dump_input |= self.dump_input;
		Ok(base)
	}
}
