// Copyright (c) 2025 Bmsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Pattern preprocessing for the Boyer-Moore algorithm.
//!
//! Preprocessing validates the pattern and builds the two heuristic lookup
//! tables. The result is a pure function of the pattern: it never touches
//! the text, and the same preprocessed pattern can be reused for searches
//! over any number of texts, which is the intended amortization of the
//! preprocessing cost.

use super::error::{BoyerMooreError, Result};
use super::tables::{GoodSuffixTable, LastOccurrenceTable};

/// A pattern together with its precomputed lookup tables.
///
/// Immutable after construction; shared read-only access from concurrent
/// searches is safe.
#[derive(Debug, Clone)]
pub struct PreprocessedPattern {
    /// The pattern bytes being searched for.
    pattern: Vec<u8>,

    /// Last-occurrence (bad-character rule) table.
    pub(crate) last_occurrence: LastOccurrenceTable,

    /// Good-suffix rule table.
    pub(crate) good_suffix: GoodSuffixTable,
}

impl PreprocessedPattern {
    /// Preprocesses a pattern for use by the matcher.
    ///
    /// # Arguments
    ///
    /// * `pattern` - The pattern bytes to preprocess.
    ///
    /// # Errors
    ///
    /// Returns [`BoyerMooreError::EmptyPattern`] if the pattern is empty;
    /// no table is allocated in that case.
    pub fn new(pattern: &[u8]) -> Result<Self> {
        if pattern.is_empty() {
            return Err(BoyerMooreError::EmptyPattern);
        }

        let last_occurrence = LastOccurrenceTable::build(pattern);
        let good_suffix = GoodSuffixTable::build(pattern);

        tracing::debug!(pattern_len = pattern.len(), "preprocessed pattern");

        Ok(Self {
            pattern: pattern.to_vec(),
            last_occurrence,
            good_suffix,
        })
    }

    /// Returns the pattern bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pattern
    }

    /// Returns the pattern length in bytes.
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Always false: empty patterns are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preprocess_valid_pattern() {
        let result = PreprocessedPattern::new(b"alfa");
        assert!(result.is_ok());

        let processed = result.unwrap();
        assert_eq!(processed.as_bytes(), b"alfa");
        assert_eq!(processed.len(), 4);
        assert!(!processed.is_empty());
    }

    #[test]
    fn test_preprocess_empty_pattern() {
        let result = PreprocessedPattern::new(b"");
        assert_eq!(result.unwrap_err(), BoyerMooreError::EmptyPattern);
    }

    #[test]
    fn test_preprocess_single_byte() {
        let processed = PreprocessedPattern::new(b"x").unwrap();
        assert_eq!(processed.len(), 1);
    }

    #[test]
    fn test_tables_depend_only_on_pattern() {
        let a = PreprocessedPattern::new(b"abab").unwrap();
        let b = PreprocessedPattern::new(b"abab").unwrap();

        for byte in 0..=255u8 {
            assert_eq!(a.last_occurrence.rightmost(byte), b.last_occurrence.rightmost(byte));
        }
        for j in 0..4 {
            assert_eq!(a.good_suffix.shift(j), b.good_suffix.shift(j));
        }
    }
}
