//! Degenerate inputs: empty text, empty queries, symbol-only lines.

use super::common::{assert_borrowed_from, NOTES, PETS};
use linerank::{search, Document};

#[test]
fn test_zero_limit_is_empty() {
    assert!(search(PETS, "cat", 0).is_empty());
    assert!(search(NOTES, "data ownership", 0).is_empty());
}

#[test]
fn test_empty_text() {
    assert!(search("", "cat", 10).is_empty());
}

#[test]
fn test_text_of_only_newlines_and_symbols() {
    assert!(search("\n\n\n", "cat", 10).is_empty());
    assert!(search("123\n!!!\n  \n", "cat", 10).is_empty());
}

#[test]
fn test_empty_or_symbol_query() {
    assert!(search(PETS, "", 10).is_empty());
    assert!(search(PETS, "1234 ?!", 10).is_empty());
}

#[test]
fn test_query_of_unknown_terms() {
    assert!(search(PETS, "fish bird", 10).is_empty());
}

#[test]
fn test_single_line_document_scores_zero() {
    // one line: idf = ln(1/1) = 0 for every term
    assert!(search("cat dog cat", "cat", 10).is_empty());
}

#[test]
fn test_symbol_lines_do_not_affect_idf() {
    let with_noise = "cat dog\n1234\n----\ncat cat\ndog dog dog";
    let a = Document::new(PETS);
    let b = Document::new(with_noise);
    assert_eq!(a.len(), b.len());
    assert_eq!(a.idf("cat"), b.idf("cat"));
    assert_eq!(search(with_noise, "cat", 10), search(PETS, "cat", 10));
}

#[test]
fn test_symbol_lines_never_returned() {
    let text = "2024\ncat 2024\ncat dog 2024\ndog";
    for query in ["cat", "dog", "cat dog", "2024"] {
        for line in search(text, query, 10) {
            assert!(line.bytes().any(|b| b.is_ascii_alphabetic()), "{:?}", line);
        }
    }
}

#[test]
fn test_leading_and_trailing_newlines() {
    let text = "\n\ncat dog\n\ncat cat\ndog dog dog\n\n";
    assert_eq!(search(text, "cat", 2), vec!["cat cat", "cat dog"]);
}

#[test]
fn test_results_borrow_from_text() {
    let text = String::from(NOTES);
    let results = search(&text, "data races", 10);
    assert!(!results.is_empty());
    assert_borrowed_from(&text, &results);
}

#[test]
fn test_non_ascii_text_is_sliced_safely() {
    let text = "café crème\nthé vert\ncafé noir";
    // "caf" is the ASCII run before 'é'
    assert_eq!(search(text, "caf noir", 10), vec!["café noir", "café crème"]);
}
