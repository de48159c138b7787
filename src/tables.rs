// Copyright (c) 2025 Bmsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lookup tables for the Boyer-Moore string matching algorithm.
//!
//! This module contains the two precomputed tables that drive the
//! algorithm's skipping behavior:
//!
//! 1. Last-occurrence table (bad-character rule): for every possible byte
//!    value, the rightmost index at which it occurs in the pattern.
//!
//! 2. Good-suffix table: derived from a suffix-length table, it gives the
//!    minimal safe shift when a suffix of the pattern has already matched
//!    but an earlier byte mismatches.
//!
//! Both tables are pure functions of the pattern, built once during
//! preprocessing and immutable afterwards, so they can be reused across
//! any number of searches over different texts.

/// Number of distinct byte values the matcher operates on.
pub(crate) const ALPHABET_SIZE: usize = 256;

/// Last-occurrence table for the bad-character rule.
///
/// Maps each byte value to the rightmost index in the pattern at which it
/// occurs, or −1 if the byte does not occur at all. Sized to the full byte
/// alphabet so lookups are never out of range.
#[derive(Debug, Clone)]
pub struct LastOccurrenceTable {
    /// Rightmost pattern index per byte value, −1 when absent.
    rightmost: [isize; ALPHABET_SIZE],
}

impl LastOccurrenceTable {
    /// Builds the table for the given pattern.
    ///
    /// The pattern is scanned left to right; later occurrences overwrite
    /// earlier ones, so the stored index is always the rightmost.
    pub fn build(pattern: &[u8]) -> Self {
        let mut rightmost = [-1isize; ALPHABET_SIZE];

        for (i, &byte) in pattern.iter().enumerate() {
            rightmost[byte as usize] = i as isize;
        }

        Self { rightmost }
    }

    /// Returns the rightmost pattern index of `byte`, or −1 if absent.
    pub fn rightmost(&self, byte: u8) -> isize {
        self.rightmost[byte as usize]
    }

    /// Computes the bad-character shift for a mismatch.
    ///
    /// # Arguments
    ///
    /// * `byte` - The text byte that failed to match.
    /// * `mismatch_at` - The pattern index at which the mismatch occurred.
    ///
    /// # Returns
    ///
    /// The shift that aligns the rightmost occurrence of `byte` in the
    /// pattern with the mismatching text position, clamped to at least 1:
    /// the rightmost occurrence may lie at or to the right of the mismatch,
    /// which would otherwise yield a zero or negative shift.
    pub fn shift(&self, byte: u8, mismatch_at: usize) -> usize {
        let shift = mismatch_at as isize - self.rightmost[byte as usize];
        if shift < 1 {
            1
        } else {
            shift as usize
        }
    }
}

/// Good-suffix table for the Boyer-Moore algorithm.
///
/// Holds the suffix-length table (entry `i` is the length of the longest
/// pattern segment starting at `i` that matches a suffix of the whole
/// pattern, bounded so the segment stays proper) and the shift table
/// derived from it (entry `i` is the minimal safe shift when `i` is the
/// first unmatched position from the right).
///
/// The shift derivation intentionally omits the prefix-border refinement of
/// the textbook good-suffix rule; resulting shifts stay safe (never skip a
/// match), they are merely not always the largest possible. The matcher
/// compensates by taking the maximum with the bad-character shift.
#[derive(Debug, Clone)]
pub struct GoodSuffixTable {
    /// Per position `i`, the longest `len` with
    /// `pattern[i..i+len] == pattern[m-len..m]` and `len <= m - 1 - i`.
    suffix_len: Vec<usize>,
    /// Minimal safe shift per mismatch position.
    shift: Vec<usize>,
}

impl GoodSuffixTable {
    /// Builds the table for the given pattern.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the pattern is empty; the preprocessor
    /// rejects empty patterns before this is reached.
    pub fn build(pattern: &[u8]) -> Self {
        debug_assert!(!pattern.is_empty());

        let suffix_len = Self::suffix_lengths(pattern);
        let shift = Self::shifts(pattern.len(), &suffix_len);

        Self { suffix_len, shift }
    }

    /// Computes the suffix-length table.
    ///
    /// Entry `m-1` is 0 by convention. Walking right to left, each entry
    /// starts from its right neighbor's value and falls back through
    /// previously computed entries (failure-function style) until the byte
    /// at the corresponding suffix position matches or the length reaches
    /// zero. The fallback is an explicit loop, never recursion.
    ///
    /// The self-referential chain does not shrink on every pattern (a
    /// looked-up entry can be >= the current length, e.g. for "aabaa");
    /// when that happens the entry is resolved by direct comparison
    /// instead, so construction terminates on all inputs and the table
    /// keeps the invariant `pattern[i..i+len] == pattern[m-len..m]`.
    fn suffix_lengths(pattern: &[u8]) -> Vec<usize> {
        let m = pattern.len();
        let mut suffix_len = vec![0usize; m];

        for i in (0..m - 1).rev() {
            let mut current = suffix_len[i + 1];
            let mut resolved = false;

            while current > 0 && pattern[m - 1 - current] != pattern[i] {
                let next = suffix_len[m - 1 - current];
                if next >= current {
                    current = Self::direct_suffix_len(pattern, i);
                    resolved = true;
                    break;
                }
                current = next;
            }
            if !resolved && pattern[m - 1 - current] == pattern[i] {
                current += 1;
            }

            suffix_len[i] = current;
        }

        suffix_len
    }

    /// Longest `len <= m - 1 - i` with `pattern[i..i+len] == pattern[m-len..m]`,
    /// found by direct comparison. Only reached when the fallback chain in
    /// [`Self::suffix_lengths`] stops making progress.
    fn direct_suffix_len(pattern: &[u8], i: usize) -> usize {
        let m = pattern.len();
        (1..=m - 1 - i)
            .rev()
            .find(|&len| pattern[i..i + len] == pattern[m - len..])
            .unwrap_or(0)
    }

    /// Derives the shift table from the suffix-length table.
    ///
    /// Every entry starts at the fallback shift `m - suffix_len[0] - 1`.
    /// Iterating `j` from `m-1` down to 0, the entry at the derived index
    /// `m - suffix_len[j] - 1` is tightened to the minimum of its current
    /// value and `i + 1 - j`: several suffix lengths can map to the same
    /// index, and the table must hold the minimal safe shift for it.
    fn shifts(m: usize, suffix_len: &[usize]) -> Vec<usize> {
        let mut shift = vec![m - suffix_len[0] - 1; m];

        for j in (0..m).rev() {
            let i = m - suffix_len[j] - 1;
            shift[i] = shift[i].min(i + 1 - j);
        }

        shift
    }

    /// Returns the good-suffix shift for a mismatch at pattern index
    /// `mismatch_at`.
    pub fn shift(&self, mismatch_at: usize) -> usize {
        self.shift[mismatch_at]
    }

    /// Returns the suffix-length table entry at `pos`.
    #[cfg(test)]
    pub(crate) fn suffix_len_at(&self, pos: usize) -> usize {
        self.suffix_len[pos]
    }
}
