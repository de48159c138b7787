// Copyright (c) 2025 Bmsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Boyer-Moore matcher.

/// Error types for Boyer-Moore matcher operations.
///
/// Note that an empty *text* is not an error: searching a zero-length text
/// is a valid call that yields zero matches.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoyerMooreError {
    /// Empty pattern provided. The heuristic tables are undefined for a
    /// zero-length pattern, so construction is rejected up front.
    #[error("pattern cannot be empty")]
    EmptyPattern,
}

/// Result type for Boyer-Moore matcher operations.
pub type Result<T> = std::result::Result<T, BoyerMooreError>;
