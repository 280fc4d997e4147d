//! Top-level module for the character Markov chain.
//!
//! This module provides:
//! - The transition table (`NgramTable`)
//! - The seeded random walk over it (`Engine`)
//! - The per-input pipeline from raw bytes to generated lines (`Generator`)

/// Seeded generation over a transition table.
///
/// Owns the table and the random generator for one input.
pub mod engine;

/// Normalize, build and generate for one input at a time.
pub mod generator;

/// Fixed-order transition table (`order >= 1`).
///
/// Handles window sliding, successor recording and key lookup.
pub mod ngram_table;

/// Successor list of a single n-gram.
///
/// Keeps duplicates and supports uniform sampling over occurrences.
pub mod successors;
