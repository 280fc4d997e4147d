//! Character-level Markov chain text generation library.
//!
//! This crate provides the core of a character n-gram generator:
//! - Text normalization (line filtering, newline folding, ASCII restriction, case folding)
//! - An n-gram transition table keyed by fixed-length code-point windows
//! - A seeded, reproducible generation engine
//! - A per-input pipeline tying the pieces together
//!
//! Output formatting and argument parsing are left to the caller.

/// Generation parameters.
pub mod config;

/// Error type shared by every stage.
pub mod error;

/// Core n-gram table, engine and per-input pipeline.
///
/// Low-level successor lists are kept internal; the table and the engine
/// are exposed read-only.
pub mod model;

/// Raw text to training corpus transforms.
pub mod normalizer;

/// Input helpers (file loading, line slurping).
pub mod io;

pub use config::GenerationConfig;
pub use error::{MarkovError, Result};
