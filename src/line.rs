// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One line of text and its term statistics.

use std::collections::BTreeMap;

use crate::scoring::term_frequency;
use crate::term::Term;
use crate::tokenize::words;

/// A line of the source text with its word tokens and per-term counts.
///
/// Everything borrows from the caller's buffer. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct Line<'a> {
    text: &'a str,
    tokens: Vec<&'a str>,
    term_counts: BTreeMap<Term<'a>, usize>,
}

impl<'a> Line<'a> {
    /// Tokenize `text` and count each token case-insensitively.
    ///
    /// Always succeeds; a span with no letters yields an empty line.
    pub fn new(text: &'a str) -> Self {
        let tokens = words(text);
        let mut term_counts = BTreeMap::new();
        for &token in &tokens {
            *term_counts.entry(Term::new(token)).or_insert(0usize) += 1;
        }
        Self {
            text,
            tokens,
            term_counts,
        }
    }

    /// The original line, excluding its newline. Case and whitespace intact.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    #[inline]
    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    /// Occurrences of `term` in this line, case-insensitive.
    pub fn count(&self, term: &str) -> usize {
        self.term_counts.get(&Term::new(term)).copied().unwrap_or(0)
    }

    /// `count(term) / tokens`, exactly 0 when the term is absent.
    pub fn term_frequency(&self, term: &str) -> f64 {
        term_frequency(self.count(term), self.tokens.len())
    }

    /// Distinct terms of this line in folded order.
    pub fn unique_terms(&self) -> impl Iterator<Item = Term<'a>> + '_ {
        self.term_counts.keys().copied()
    }

    /// True iff the line has no word tokens.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
