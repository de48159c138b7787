// Copyright (c) 2025 Bmsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Exact substring search with the Boyer-Moore algorithm.
//!
//! Given a non-empty byte pattern and a byte text, the matcher reports
//! every starting offset at which the pattern occurs. Each window is
//! compared from the pattern's last byte backward, and two precomputed
//! heuristics (bad-character and good-suffix) skip regions of the text
//! that cannot contain a match.
//!
//! # Features
//!
//! - Zero-based, strictly ascending match offsets, overlapping matches
//!   included
//! - Lazy iterator interface; abandoning a search early has no side
//!   effects
//! - Pattern preprocessing paid once and reused across any number of
//!   texts
//! - No allocation in the search hot path
//! - No interior mutability: a matcher is freely shared across threads
//!
//! # Example
//!
//! ```
//! use bmsearch::BoyerMooreMatcher;
//!
//! let matcher = BoyerMooreMatcher::new(b"needle").unwrap();
//!
//! let text = b"a needle in a haystack, then another needle";
//! let offsets: Vec<usize> = matcher.find_all(text).collect();
//! assert_eq!(offsets, vec![2, 37]);
//!
//! // The same matcher serves further texts with no re-preprocessing.
//! assert_eq!(matcher.find_first(b"no match here"), None);
//! ```
//!
//! # Performance Characteristics
//!
//! - Preprocessing time: O(m + σ) where m is the pattern length and σ is
//!   the alphabet size (256)
//! - Space: O(m + σ)
//! - Best case: O(n/m) comparisons for a text of length n
//! - Worst case: O(n·m) comparisons, rare in practice
//!
//! The good-suffix table uses the simplified derivation that omits the
//! prefix-border refinement of the textbook rule; shifts remain safe
//! (no match is ever skipped), they are just not always the largest
//! possible.

mod error;
mod matcher;
mod preprocess;
mod tables;

#[cfg(test)]
pub(crate) mod tests;

// Re-exports
pub use error::{BoyerMooreError, Result};
pub use matcher::{BoyerMooreMatcher, MatchIterator};
pub use preprocess::PreprocessedPattern;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
