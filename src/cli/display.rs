// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the linerank CLI.
//!
//! Plain ANSI styling, only when stdout is a TTY and `NO_COLOR` is unset.
//! Piped output is always plain so results can be fed to other tools.

use linerank::tokenize::{is_word_byte, split_with};

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

pub use colors::*;

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply styles if enabled, otherwise return plain text
pub fn styled(enabled: bool, styles: &[&str], text: &str) -> String {
    if enabled {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Left-pad a styled string to a fixed visible width
pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULT FORMATTING
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded score (green = strong, yellow = medium, gray = weak)
pub fn score_value(enabled: bool, score: f64) -> String {
    let text = format!("{:>8.4}", score);
    if !enabled {
        return text;
    }
    let color = if score >= 0.5 {
        GREEN
    } else if score >= 0.1 {
        YELLOW
    } else {
        GRAY
    };
    format!("{}{}{}", color, text, RESET)
}

/// Dimmed `#index` label for a line position
pub fn line_label(enabled: bool, index: usize) -> String {
    styled(enabled, &[DIM], &format!("#{}", index))
}

/// Bold every word of `line` that matches one of `terms` case-insensitively.
///
/// Non-matching text, separators included, is copied through verbatim.
pub fn highlight(enabled: bool, line: &str, terms: &[&str]) -> String {
    if !enabled || terms.is_empty() {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len());
    let mut cursor = 0usize;
    for word in split_with(line, is_word_byte) {
        // words borrow from `line`, so the pointer offset is the byte offset
        let start = word.as_ptr() as usize - line.as_ptr() as usize;
        let end = start + word.len();
        out.push_str(&line[cursor..start]);
        if terms.iter().any(|t| t.eq_ignore_ascii_case(word)) {
            out.push_str(BOLD);
            out.push_str(CYAN);
            out.push_str(word);
            out.push_str(RESET);
        } else {
            out.push_str(word);
        }
        cursor = end;
    }
    out.push_str(&line[cursor..]);
    out
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
