// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case-insensitive vocabulary keys.
//!
//! A [`Term`] borrows its spelling from the source text and compares under
//! ASCII case folding: `"Data"`, `"DATA"` and `"data"` are one key. Ordering
//! is by folded bytes, so a prefix sorts before the longer term.
//!
//! There is no `Borrow<str>` impl: `str` compares case-sensitively, so map
//! lookups go through `Term::new`. The first spelling inserted into a map is
//! the one the map keeps.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A borrowed term compared case-insensitively.
#[derive(Clone, Copy)]
pub struct Term<'a>(&'a str);

impl<'a> Term<'a> {
    #[inline]
    pub fn new(spelling: &'a str) -> Self {
        Self(spelling)
    }

    /// The spelling as it appears in the source.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    fn folded(&self) -> impl Iterator<Item = u8> + 'a {
        self.0.bytes().map(|b| b.to_ascii_lowercase())
    }
}

impl PartialEq for Term<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(other.0)
    }
}

impl Eq for Term<'_> {}

impl Ord for Term<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded().cmp(other.folded())
    }
}

impl PartialOrd for Term<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Term<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.folded() {
            state.write_u8(byte);
        }
        state.write_usize(self.0.len());
    }
}

impl<'a> From<&'a str> for Term<'a> {
    fn from(spelling: &'a str) -> Self {
        Self(spelling)
    }
}

impl fmt::Debug for Term<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Term({:?})", self.0)
    }
}

impl fmt::Display for Term<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
