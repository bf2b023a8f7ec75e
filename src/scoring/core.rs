// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind line ranking.
//!
//! ```text
//! tf(t, line)  = count(t, line) / tokens(line)
//! idf(t)       = ln(lines / df(t))
//! score(line)  = Σ tf(t, line) · idf(t)   over query terms t
//! ```
//!
//! `tokens(line)` counts repeats. `df(t)` is the number of lines containing
//! `t` at least once, so `1 <= df <= lines` whenever `idf` is asked for, and
//! the result is finite and non-negative. A term in every line gets idf 0.

/// Raw term frequency: occurrences over total tokens.
///
/// Returns exactly 0.0 for `count == 0`, including the degenerate
/// `tokens == 0` case.
#[inline]
pub fn term_frequency(count: usize, tokens: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    count as f64 / tokens as f64
}

/// Inverse document frequency over lines: `ln(lines / df)`.
///
/// Callers guarantee `df > 0`; the ranker only asks for terms the document
/// contains.
#[inline]
pub fn inverse_document_frequency(lines: usize, df: usize) -> f64 {
    debug_assert!(df > 0, "idf requested for a term with df == 0");
    debug_assert!(df <= lines, "df {} exceeds line count {}", df, lines);
    (lines as f64 / df as f64).ln()
}
