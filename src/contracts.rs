// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for documents and rankings.
//!
//! Every check is a `debug_assert!`: it panics in debug and test builds and
//! compiles away in release.
//!
//! | Contract                      | Property                                         |
//! |-------------------------------|--------------------------------------------------|
//! | `check_document_well_formed`  | no empty lines; `1 <= df(t) <= lines`; df exact   |
//! | `check_ranking_sorted`        | scores descending, ties in line order, none zero |

use std::collections::BTreeMap;

use crate::document::Document;
use crate::search::ScoredLine;
use crate::term::Term;

// ============================================================================
// DOCUMENT CONTRACTS
// ============================================================================

/// Check the structural invariants of a freshly built document.
///
/// # Panics (debug builds only)
/// Panics if a kept line has no tokens, if a document frequency is outside
/// `1..=lines`, or if a frequency disagrees with a single recount over the
/// kept lines. The recount costs one map update per distinct term per line.
#[inline]
pub fn check_document_well_formed(document: &Document<'_>) {
    if !cfg!(debug_assertions) {
        return;
    }

    for (i, line) in document.lines().iter().enumerate() {
        debug_assert!(
            !line.is_empty(),
            "Contract violation: line {} kept with no tokens: {:?}",
            i,
            line.text()
        );
    }

    let lines = document.len();
    let mut recount: BTreeMap<Term<'_>, usize> = BTreeMap::new();
    for line in document.lines() {
        for term in line.unique_terms() {
            *recount.entry(term).or_insert(0) += 1;
        }
    }

    debug_assert_eq!(
        recount.len(),
        document.vocabulary().count(),
        "Contract violation: vocabulary size disagrees with a recount over lines"
    );
    for (term, df) in document.vocabulary() {
        debug_assert!(
            (1..=lines).contains(&df),
            "Contract violation: df({}) = {} outside 1..={}",
            term,
            df,
            lines
        );

        let direct = recount.get(&term).copied().unwrap_or(0);
        debug_assert_eq!(
            df, direct,
            "Contract violation: df({}) = {} but {} lines contain it",
            term, df, direct
        );
    }
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check that ranked results are ordered and cut off correctly.
///
/// # Panics (debug builds only)
/// Panics if any score is zero or NaN, if scores increase, or if equal
/// scores are out of line order.
#[inline]
pub fn check_ranking_sorted(results: &[ScoredLine<'_>]) {
    for result in results {
        debug_assert!(
            result.score > 0.0,
            "Contract violation: line {} returned with score {}",
            result.index,
            result.score
        );
    }

    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        debug_assert!(
            a.score > b.score || (a.score == b.score && a.index < b.index),
            "Contract violation: line {} ({}) ranked before line {} ({})",
            a.index,
            a.score,
            b.index,
            b.score
        );
    }
}
