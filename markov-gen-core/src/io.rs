use std::fs::File;
use std::io::{self, BufRead, Read};
use std::path::Path;

/// Reads a whole file as raw bytes.
///
/// Decoding is left to the normalizer so that invalid UTF-8 surfaces as
/// an encoding error for this input only.
pub fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<u8>> {
	let mut contents = Vec::new();
	File::open(filename)?.read_to_end(&mut contents)?;
	Ok(contents)
}

/// Slurps every line of `reader`, terminating each one with `\n`.
///
/// - Splits on `\n`; a `\r` before it is kept as-is
/// - A last line without terminator still gets one
pub fn read_lines<R: BufRead>(mut reader: R) -> io::Result<Vec<u8>> {
	let mut contents = Vec::new();
	let mut line = Vec::new();
	loop {
		line.clear();
		if reader.read_until(b'\n', &mut line)? == 0 {
			break;
		}
		if line.last() != Some(&b'\n') {
			line.push(b'\n');
		}
		contents.extend_from_slice(&line);
	}
	Ok(contents)
}
