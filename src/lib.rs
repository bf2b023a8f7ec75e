// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! TF-IDF ranking of the lines of a text.
//!
//! Every non-empty line of a text is treated as a document. A query is scored
//! against each line by summing raw term frequency times inverse document
//! frequency, and the best lines come back as slices of the original text.
//! Nothing is indexed or kept between calls.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────┐     ┌─────────────┐
//! │ tokenize.rs │────▶│   line.rs    │────▶│  document.rs  │────▶│  search.rs  │
//! │ (split_with,│     │ (Line: tokens│     │ (Document:    │     │ (rank,      │
//! │  words)     │     │  term_counts)│     │  doc_freq,idf)│     │  search)    │
//! └─────────────┘     └──────────────┘     └───────────────┘     └─────────────┘
//!                            │                     │                    │
//!                            ▼                     ▼                    ▼
//!                     ┌────────────────────────────────────────────────────┐
//!                     │  term.rs (case-insensitive keys)  scoring/ (tf,idf, │
//!                     │  ordering)  contracts.rs (debug invariants)         │
//!                     └────────────────────────────────────────────────────┘
//! ```
//!
//! # Matching rules
//!
//! - Words are maximal runs of ASCII letters. Everything else separates.
//! - Line and document vocabularies are case-insensitive.
//! - Query terms are deduplicated case-sensitively before lookup, so `"Cat cat"`
//!   counts the `cat` entry twice.
//! - Lines scoring exactly zero are never returned. Equal scores keep line order.
//!
//! # Usage
//!
//! ```
//! let text = "cat dog\ncat cat\ndog dog dog";
//! assert_eq!(linerank::search(text, "cat", 2), vec!["cat cat", "cat dog"]);
//!
//! let document = linerank::Document::new(text);
//! let ranked = linerank::rank_scored(&document, "dog", 10);
//! assert_eq!(ranked[0].text, "dog dog dog");
//! ```

// Module declarations
pub mod contracts;
mod document;
mod line;
pub mod scoring;
mod search;
mod term;
pub mod tokenize;

// Re-exports for public API
pub use document::{Document, DocumentStats};
pub use line::Line;
pub use search::{query_terms, rank, rank_scored, score_lines, search, ScoredLine};
pub use term::Term;
