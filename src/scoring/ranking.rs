// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering: descending score, stable on ties.
//!
//! Ties are broken by position alone. The sort is stable and the input is in
//! line order, so two lines with bit-identical scores keep their original
//! relative order. `total_cmp` gives a total order; scores are never NaN in
//! practice since `idf` is only computed for `df >= 1`.

use std::cmp::Ordering;

/// Compare two scores so that the higher one sorts first.
#[inline]
pub fn compare_scores(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Line indices ordered by descending score. Equal scores keep index order.
pub fn order_by_score(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| compare_scores(scores[a], scores[b]));
    order
}
