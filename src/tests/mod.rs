// Copyright (c) 2025 Bmsearch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the Boyer-Moore matcher.
//!
//! Unit tests live next to the code they cover; this module holds the
//! proptest suites that compare the matcher against a naive reference
//! scan.
