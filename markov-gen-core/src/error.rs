use std::string::FromUtf8Error;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, MarkovError>;

/// Errors that can occur while normalizing input or generating text.
///
/// Every variant is scoped to a single input: callers processing a batch
/// report it and move on to the next input.
#[derive(Debug, Error)]
pub enum MarkovError {
	/// Input bytes are not valid UTF-8.
	#[error("Input is not valid UTF-8: {0}")]
	Encoding(#[from] FromUtf8Error),

	/// Corpus is not longer than the order, no transition can be recorded.
	#[error("Insufficient corpus: {length} code points for order {order}")]
	InsufficientCorpus {
		/// Number of code points in the corpus
		length: usize,
		/// Requested n-gram order
		order: usize,
	},

	/// No n-gram starts with a space, so no generation seed can be found.
	#[error("No n-gram of order {order} starts at a word boundary")]
	NoWordBoundary {
		/// Order of the table that was searched
		order: usize,
	},

	/// A configuration value is out of range.
	#[error("Invalid parameter: {message}")]
	InvalidParameter {
		/// Description of what's wrong with the parameter
		message: String,
	},

	/// Reading an input failed.
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

impl MarkovError {
	/// Create an InvalidParameter error.
	pub fn invalid_parameter(message: impl Into<String>) -> Self {
		Self::InvalidParameter { message: message.into() }
	}
}
