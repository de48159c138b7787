// Copyright (c) 2025 Bmsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Boyer-Moore string matching.
//!
//! This module contains the matcher itself and the iterator it hands out
//! for walking all occurrences of a pattern in a text. The matcher holds
//! only the preprocessed pattern; every search borrows the text for its
//! duration and carries its own scan state, so searches are independent of
//! each other and a matcher can serve any number of them, concurrently or
//! not.

use std::iter::FusedIterator;

use super::error::Result;
use super::preprocess::PreprocessedPattern;

/// Boyer-Moore matcher for exact substring search over bytes.
///
/// Scans each window from the pattern's last byte backward and, on a
/// mismatch, advances the window by the larger of the bad-character and
/// good-suffix shifts. After a full match it advances by exactly one
/// position, so overlapping occurrences are all reported.
///
/// # Examples
///
/// ```
/// use bmsearch::BoyerMooreMatcher;
///
/// let matcher = BoyerMooreMatcher::new(b"alfa").unwrap();
/// let offsets: Vec<usize> = matcher.find_all(b"alfa beta alfa charly").collect();
/// assert_eq!(offsets, vec![0, 10]);
/// ```
#[derive(Debug, Clone)]
pub struct BoyerMooreMatcher {
    /// The preprocessed pattern with its lookup tables.
    pattern: PreprocessedPattern,
}

impl BoyerMooreMatcher {
    /// Creates a matcher for the given pattern.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BoyerMooreError::EmptyPattern`] if `pattern` is
    /// empty.
    pub fn new(pattern: &[u8]) -> Result<Self> {
        let pattern = PreprocessedPattern::new(pattern)?;
        Ok(Self { pattern })
    }

    /// Returns the pattern bytes this matcher was built for.
    pub fn pattern(&self) -> &[u8] {
        self.pattern.as_bytes()
    }

    /// Returns an iterator over all match offsets in `text`.
    ///
    /// Offsets are zero-based, strictly ascending, and may overlap. The
    /// iterator is lazy: dropping it mid-way abandons the search with no
    /// side effects. Each call starts an independent scan, so searches are
    /// restartable and repeatable.
    pub fn find_all<'m, 't>(&'m self, text: &'t [u8]) -> MatchIterator<'m, 't> {
        MatchIterator {
            matcher: self,
            text,
            alignment: 0,
            exhausted: false,
        }
    }

    /// Finds the first occurrence of the pattern in `text`.
    pub fn find_first(&self, text: &[u8]) -> Option<usize> {
        self.find_from(text, 0)
    }

    /// Finds the first occurrence at offset `from` or later.
    ///
    /// # Arguments
    ///
    /// * `text` - The text to search in.
    /// * `from` - The lowest offset to consider.
    ///
    /// # Returns
    ///
    /// The offset of the first match at or after `from`, or `None`.
    pub fn find_from(&self, text: &[u8], from: usize) -> Option<usize> {
        MatchIterator {
            matcher: self,
            text,
            alignment: from,
            exhausted: false,
        }
        .next()
    }

    /// Collects all match offsets in `text`.
    ///
    /// Observably equivalent to draining [`Self::find_all`].
    pub fn occurrences(&self, text: &[u8]) -> Vec<usize> {
        self.find_all(text).collect()
    }
}

/// Lazy iterator over match offsets in a text.
///
/// Holds the current window alignment as its only state. A text shorter
/// than the pattern yields nothing.
#[derive(Debug)]
pub struct MatchIterator<'m, 't> {
    /// The matcher whose tables drive the scan.
    matcher: &'m BoyerMooreMatcher,

    /// The text being searched.
    text: &'t [u8],

    /// Text offset currently aligned with the pattern's first byte.
    alignment: usize,

    /// Whether the scan has run off the end of the text.
    exhausted: bool,
}

impl Iterator for MatchIterator<'_, '_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let pattern = self.matcher.pattern.as_bytes();
        let m = pattern.len();
        let n = self.text.len();

        if m > n {
            self.exhausted = true;
            return None;
        }

        while self.alignment <= n - m {
            let i = self.alignment;

            // Backward comparison: first mismatching pattern index from the
            // right, or None on a full match.
            match (0..m).rev().find(|&j| pattern[j] != self.text[i + j]) {
                None => {
                    // Advance by exactly 1 so overlapping matches are found.
                    self.alignment += 1;
                    return Some(i);
                }
                Some(j) => {
                    let bad_char = self.matcher.pattern.last_occurrence.shift(self.text[i + j], j);
                    let good_suffix = self.matcher.pattern.good_suffix.shift(j);

                    // Both candidates are valid skips; the larger one is
                    // still safe and skips more. bad_char is >= 1, so the
                    // alignment strictly advances.
                    self.alignment += bad_char.max(good_suffix);
                }
            }
        }

        self.exhausted = true;
        None
    }
}

// Keeps returning None after exhaustion.
impl FusedIterator for MatchIterator<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(b"alfa beta alfa charly", b"alfa", &[0, 10] ; "given example")]
    #[test_case(b"aaaa", b"aa", &[0, 1, 2] ; "overlapping matches")]
    #[test_case(b"alfa beta alfa charly", b"zzz", &[] ; "no match")]
    #[test_case(b"banana", b"ana", &[1, 3] ; "overlap in banana")]
    #[test_case(b"abab", b"abab", &[0] ; "pattern equals text")]
    #[test_case(b"abab", b"abba", &[] ; "equal length no match")]
    #[test_case(b"", b"a", &[] ; "empty text")]
    #[test_case(b"ab", b"abab", &[] ; "pattern longer than text")]
    fn test_find_all(text: &[u8], pattern: &[u8], expected: &[usize]) {
        let matcher = BoyerMooreMatcher::new(pattern).unwrap();
        let offsets: Vec<usize> = matcher.find_all(text).collect();
        assert_eq!(offsets, expected);
    }

    #[test]
    fn test_find_first_and_from() {
        let matcher = BoyerMooreMatcher::new(b"alfa").unwrap();
        let text = b"alfa beta alfa charly";

        assert_eq!(matcher.find_first(text), Some(0));
        assert_eq!(matcher.find_from(text, 1), Some(10));
        assert_eq!(matcher.find_from(text, 10), Some(10));
        assert_eq!(matcher.find_from(text, 11), None);
    }

    #[test]
    fn test_occurrences_equals_iterator() {
        let matcher = BoyerMooreMatcher::new(b"ab").unwrap();
        let text = b"abcabcab";

        let collected = matcher.occurrences(text);
        let iterated: Vec<usize> = matcher.find_all(text).collect();
        assert_eq!(collected, iterated);
        assert_eq!(collected, vec![0, 3, 6]);
    }

    #[test]
    fn test_search_is_idempotent() {
        let matcher = BoyerMooreMatcher::new(b"aba").unwrap();
        let text = b"abababab";

        let first: Vec<usize> = matcher.find_all(text).collect();
        let second: Vec<usize> = matcher.find_all(text).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![0, 2, 4]);
    }

    #[test]
    fn test_offsets_strictly_ascending() {
        let matcher = BoyerMooreMatcher::new(b"aa").unwrap();
        let offsets: Vec<usize> = matcher.find_all(b"aabaaacaaaa").collect();

        for pair in offsets.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_early_abandonment() {
        let matcher = BoyerMooreMatcher::new(b"aa").unwrap();
        let text = b"aaaaaaaa";

        let prefix: Vec<usize> = matcher.find_all(text).take(3).collect();
        let full: Vec<usize> = matcher.find_all(text).collect();
        assert_eq!(prefix, full[..3]);
    }

    #[test]
    fn test_iterator_is_fused() {
        let matcher = BoyerMooreMatcher::new(b"xyz").unwrap();
        let mut iter = matcher.find_all(b"no such thing");

        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_single_byte_pattern() {
        let matcher = BoyerMooreMatcher::new(b"a").unwrap();
        let offsets: Vec<usize> = matcher.find_all(b"banana").collect();
        assert_eq!(offsets, vec![1, 3, 5]);
    }

    #[test]
    fn test_reuse_across_texts() {
        let matcher = BoyerMooreMatcher::new(b"alfa").unwrap();

        assert_eq!(matcher.occurrences(b"alfa beta alfa charly"), vec![0, 10]);
        assert_eq!(matcher.occurrences(b"no hits here"), Vec::<usize>::new());
        assert_eq!(matcher.occurrences(b"alfalfa"), vec![0, 3]);
    }

    #[test]
    fn test_match_at_text_end() {
        let matcher = BoyerMooreMatcher::new(b"charly").unwrap();
        assert_eq!(matcher.occurrences(b"alfa beta alfa charly"), vec![15]);
    }

    #[test]
    fn test_pathological_fallback_pattern() {
        // Pattern whose suffix-table fallback chain needs the direct
        // resolution; a miscomputed shift here would skip the match at 16.
        let matcher = BoyerMooreMatcher::new(b"abbbabb").unwrap();
        let text = b"babaaaabbaabbbaaabbbabbabbbbbbbb";
        assert_eq!(matcher.occurrences(text), vec![16]);
    }
}
