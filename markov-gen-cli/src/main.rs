use std::error::Error;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use log::{error, info};
use regex::Regex;

use markov_gen_core::io::{read_file, read_lines};
use markov_gen_core::model::generator::{Generation, Generator};
use markov_gen_core::{GenerationConfig, MarkovError};

mod cli;
mod display;

use cli::Args;

/// Every input succeeded.
const STATUS_OK: u8 = 0;
/// At least one input failed, or no input was given.
const STATUS_FAILED: u8 = 1;
/// The `--split` regex does not compile.
const STATUS_USAGE: u8 = 2;

/// Loads generation defaults from a TOML file.
fn load_config(path: &Path) -> Result<GenerationConfig, Box<dyn Error>> {
	let contents = fs::read_to_string(path)?;
	let config: GenerationConfig = toml::from_str(&contents)?;
	config.validate()?;
	Ok(config)
}

/// Prints one input's result the way the user asked for.
fn print_generation<W: Write>(
	out: &mut W,
	generation: &Generation,
	split: Option<&Regex>,
	print_seed: bool,
) -> io::Result<()> {
	match generation {
		Generation::Dump(bytes) => {
			out.write_all(bytes)?;
			out.write_all(b"\n")
		}
		Generation::Lines { seed, lines } => {
			if print_seed {
				writeln!(out, "Seed: {}", seed)?;
			}
			for line in lines {
				match split {
					Some(re) => {
						for piece in display::split_lines(line, re) {
							writeln!(out, "{}", piece)?;
						}
					}
					None => writeln!(out, "{}", display::trim(line))?,
				}
			}
			Ok(())
		}
	}
}

/// Processes every input named by `args` and returns the exit status.
///
/// Inputs are read and generated one at a time: stdin when `--stdin` is
/// given (any `-f` is then ignored), otherwise each `-f` file in order. A
/// failing input is reported on `err` and the next one still runs.
///
/// # Errors
/// Returns an error if the configuration is unusable or `out` fails.
fn run<R, W, E>(args: &Args, stdin: R, out: &mut W, err: &mut E) -> Result<u8, Box<dyn Error>>
where
	R: BufRead,
	W: Write,
	E: Write,
{
	let base = match &args.config {
		Some(path) => load_config(path)?,
		None => GenerationConfig::default(),
	};
	let config = args.apply(base)?;

	let split = match args.split.as_deref().map(Regex::new).transpose() {
		Ok(split) => split,
		Err(e) => {
			writeln!(err, "Invalid --split regex: {e}")?;
			return Ok(STATUS_USAGE);
		}
	};

	if !args.stdin && args.files.is_empty() {
		write!(err, "{}", Args::command().render_help())?;
		return Ok(STATUS_FAILED);
	}

	let generator = Generator::new(config)?;
	let sources: Vec<Option<&Path>> = if args.stdin {
		vec![None]
	} else {
		args.files.iter().map(|path| Some(path.as_path())).collect()
	};

	let mut stdin = Some(stdin);
	let mut status = STATUS_OK;
	for source in sources {
		let (name, input) = match source {
			Some(path) => (path.display().to_string(), read_file(path)),
			None => match stdin.take() {
				Some(reader) => ("<stdin>".to_owned(), read_lines(reader)),
				None => continue,
			},
		};
		info!("Processing {}", name);
		match input.map_err(MarkovError::from).and_then(|bytes| generator.run(&bytes)) {
			Ok(generation) => print_generation(out, &generation, split.as_ref(), args.print_seed)?,
			Err(e) => {
				error!("Skipping {}: {}", name, e);
				writeln!(err, "{}: {}", name, e)?;
				status = STATUS_FAILED;
			}
		}
	}
	out.flush()?;

	Ok(status)
}

/// Main entry point.
///
/// The exit status is 1 if any input failed or none was given, 2 for an
/// invalid `--split` regex.
fn main() -> Result<ExitCode, Box<dyn Error>> {
	env_logger::init();
	let args = Args::parse();

	let stdin = io::stdin();
	let stdout = io::stdout();
	let stderr = io::stderr();
	let status = run(&args, stdin.lock(), &mut stdout.lock(), &mut stderr.lock())?;
	Ok(ExitCode::from(status))
}
