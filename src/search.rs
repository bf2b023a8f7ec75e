// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query evaluation: from a query string to ranked lines.
//!
//! # Algorithm
//!
//! 1. Tokenize the query the same way as line text.
//! 2. Sort the tokens by byte order and drop exact duplicates. Dedup is
//!    case-sensitive: `"Cat"` and `"cat"` both survive and both score,
//!    even though they resolve to the same document entry.
//! 3. For each surviving term the document contains, add `tf · idf` to
//!    every line's score. Unknown terms are skipped before idf is touched.
//! 4. Stable-sort lines by descending score.
//! 5. Take up to `k` lines, stopping at the first score that is exactly 0.

use serde::Serialize;
use tracing::{debug, trace};

use crate::contracts::check_ranking_sorted;
use crate::document::Document;
use crate::scoring::ranking::order_by_score;
use crate::tokenize::words;

/// A ranked line with its score and its position among surviving lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredLine<'a> {
    /// Zero-based index into [`Document::lines`].
    pub index: usize,
    pub score: f64,
    /// The original line text.
    pub text: &'a str,
}

/// Query tokens sorted by byte order with exact duplicates removed.
pub fn query_terms(query: &str) -> Vec<&str> {
    let mut terms = words(query);
    terms.sort_unstable();
    terms.dedup();
    terms
}

/// Per-line relevance scores, one per line of `document`, in line order.
pub fn score_lines(document: &Document<'_>, query: &str) -> Vec<f64> {
    let mut scores = vec![0.0f64; document.len()];
    if document.is_empty() {
        return scores;
    }

    let terms = query_terms(query);
    let mut matched = 0usize;
    for &term in &terms {
        if !document.contains(term) {
            trace!(term, "query term not in document");
            continue;
        }

        matched += 1;
        let idf = document.idf(term);
        trace!(term, idf, "scoring query term");
        for (score, line) in scores.iter_mut().zip(document.lines()) {
            *score += line.term_frequency(term) * idf;
        }
    }

    debug!(
        query_terms = terms.len(),
        matched,
        lines = scores.len(),
        "scored query"
    );
    scores
}

/// The top `k` lines for `query` with their scores.
///
/// Zero-scored lines are never returned, so the result may be shorter than
/// `k` even when the document has more lines.
pub fn rank_scored<'a>(document: &Document<'a>, query: &str, k: usize) -> Vec<ScoredLine<'a>> {
    if document.is_empty() || k == 0 {
        return Vec::new();
    }

    let scores = score_lines(document, query);
    let order = order_by_score(&scores);
    let lines = document.lines();

    let mut results = Vec::with_capacity(k.min(lines.len()));
    for &index in order.iter().take(k.min(lines.len())) {
        let score = scores[index];
        if score == 0.0 {
            break;
        }
        results.push(ScoredLine {
            index,
            score,
            text: lines[index].text(),
        });
    }

    check_ranking_sorted(&results);
    debug!(
        query,
        lines = lines.len(),
        k,
        results = results.len(),
        "ranked lines"
    );
    results
}

/// The top `k` line texts for `query`, most relevant first.
pub fn rank<'a>(document: &Document<'a>, query: &str, k: usize) -> Vec<&'a str> {
    rank_scored(document, query, k)
        .into_iter()
        .map(|line| line.text)
        .collect()
}

/// Rank the lines of `text` against `query` and return at most
/// `results_count` of them.
///
/// Each result is a slice of `text`: the full line without its newline, with
/// case and whitespace untouched. Lines scoring exactly zero are left out.
/// Nothing is retained between calls.
///
/// # Example
///
/// ```
/// let text = "cat dog\ncat cat\ndog dog dog";
/// assert_eq!(linerank::search(text, "cat", 2), vec!["cat cat", "cat dog"]);
/// ```
pub fn search<'a>(text: &'a str, query: &str, results_count: usize) -> Vec<&'a str> {
    rank(&Document::new(text), query, results_count)
}
