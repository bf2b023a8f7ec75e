// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Zero-copy splitting of text into maximal runs of accepted bytes.
//!
//! Classification is per byte and locale-independent. Both predicates used by
//! the crate either accept only ASCII bytes (`is_word_byte`) or reject only an
//! ASCII byte (`is_line_byte`), so every span boundary falls on a UTF-8
//! character boundary and the spans can be handed out as `&str`.

/// Split `text` into maximal runs of bytes satisfying `predicate`.
///
/// Bytes that fail the predicate are separators and never appear in a span.
/// Spans come back in left-to-right order and borrow from `text`.
///
/// # Example
///
/// ```
/// use linerank::tokenize::{is_word_byte, split_with};
///
/// assert_eq!(split_with("  cat, dog!", is_word_byte), vec!["cat", "dog"]);
/// ```
pub fn split_with<P>(text: &str, predicate: P) -> Vec<&str>
where
    P: Fn(u8) -> bool,
{
    let bytes = text.as_bytes();
    let mut parts = Vec::new();

    let mut left = 0usize;
    while left < bytes.len() {
        if !predicate(bytes[left]) {
            left += 1;
            continue;
        }

        let mut right = left + 1;
        while right < bytes.len() && predicate(bytes[right]) {
            right += 1;
        }

        parts.push(&text[left..right]);
        left = right;
    }

    parts
}

/// Word characters: ASCII letters only.
#[inline]
pub fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

/// Line characters: anything but `\n`. A `\r` stays part of the line.
#[inline]
pub fn is_line_byte(byte: u8) -> bool {
    byte != b'\n'
}

/// Word tokens of a line or a query.
pub fn words(text: &str) -> Vec<&str> {
    split_with(text, is_word_byte)
}

/// Candidate line spans of a text. Empty lines produce no span at all.
pub fn lines(text: &str) -> Vec<&str> {
    split_with(text, is_line_byte)
}
