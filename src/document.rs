// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The document: every non-empty line of a text plus document frequencies.
//!
//! A "document" here is one text, and its "documents" in the IR sense are
//! its lines. Lines without a single ASCII letter are dropped at construction
//! and take no part in scoring: they are never returned and do not count
//! toward `lines` in the IDF.
//!
//! ```text
//! text ──lines()──▶ spans ──Line::new──▶ Line ──non-empty?──▶ lines
//!                                           │
//!                                           └─unique_terms──▶ doc_freq
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::contracts::check_document_well_formed;
use crate::line::Line;
use crate::scoring::inverse_document_frequency;
use crate::term::Term;
use crate::tokenize::lines;

/// Immutable line collection borrowed from a caller's buffer.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    lines: Vec<Line<'a>>,
    doc_freq: BTreeMap<Term<'a>, usize>,
}

/// Summary counts of a built document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    /// Surviving (non-empty) lines.
    pub lines: usize,
    /// Distinct case-insensitive terms.
    pub vocabulary: usize,
    /// Word tokens across all lines, repeats included.
    pub tokens: usize,
}

impl<'a> Document<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut kept = Vec::new();
        let mut doc_freq: BTreeMap<Term<'a>, usize> = BTreeMap::new();
        let mut dropped = 0usize;

        for span in lines(text) {
            let line = Line::new(span);
            if line.is_empty() {
                dropped += 1;
                continue;
            }
            for term in line.unique_terms() {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
            kept.push(line);
        }

        let document = Self {
            lines: kept,
            doc_freq,
        };
        check_document_well_formed(&document);

        debug!(
            lines = document.lines.len(),
            dropped,
            vocabulary = document.doc_freq.len(),
            "document built"
        );
        document
    }

    #[inline]
    pub fn lines(&self) -> &[Line<'a>] {
        &self.lines
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether any surviving line contains `term`, case-insensitive.
    pub fn contains(&self, term: &str) -> bool {
        self.doc_freq.contains_key(&Term::new(term))
    }

    /// Number of lines containing `term` at least once; 0 when absent.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.doc_freq.get(&Term::new(term)).copied().unwrap_or(0)
    }

    /// `ln(lines / df(term))`.
    ///
    /// Only meaningful when [`contains`](Self::contains) holds for `term`;
    /// debug builds assert it.
    pub fn idf(&self, term: &str) -> f64 {
        inverse_document_frequency(self.lines.len(), self.document_frequency(term))
    }

    /// Terms with their document frequencies, in folded term order.
    pub fn vocabulary(&self) -> impl Iterator<Item = (Term<'a>, usize)> + '_ {
        self.doc_freq.iter().map(|(&term, &df)| (term, df))
    }

    pub fn stats(&self) -> DocumentStats {
        DocumentStats {
            lines: self.lines.len(),
            vocabulary: self.doc_freq.len(),
            tokens: self.lines.iter().map(|l| l.tokens().len()).sum(),
        }
    }
}
