//! Ordering, cutoff and tie-breaking of ranked lines.

use super::common::{assert_close, NOTES, PETS};
use linerank::{rank_scored, search, Document};

#[test]
fn test_worked_example() {
    assert_eq!(search(PETS, "cat", 2), vec!["cat cat", "cat dog"]);
}

#[test]
fn test_worked_example_scores() {
    let doc = Document::new(PETS);
    let ranked = rank_scored(&doc, "cat", 3);
    let idf = (3.0f64 / 2.0).ln();

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].index, 1);
    assert_close(ranked[0].score, idf);
    assert_eq!(ranked[1].index, 0);
    assert_close(ranked[1].score, 0.5 * idf);
}

#[test]
fn test_zero_score_lines_are_never_padded_in() {
    // three lines, only two mention "cat"
    let results = search(PETS, "cat", 100);
    assert_eq!(results.len(), 2);
    assert!(!results.contains(&"dog dog dog"));
}

#[test]
fn test_limit_truncates() {
    assert_eq!(search(PETS, "cat", 1), vec!["cat cat"]);
}

#[test]
fn test_equal_scores_keep_line_order() {
    let text = "zebra one\napple\nzebra two\nzebra three";
    // "zebra one", "zebra two", "zebra three" all have tf 1/2 and share idf
    let results = search(text, "zebra", 10);
    assert_eq!(results, vec!["zebra one", "zebra two", "zebra three"]);
}

#[test]
fn test_multi_term_scores_add_up() {
    let doc = Document::new(PETS);
    let idf = (3.0f64 / 2.0).ln();
    let ranked = rank_scored(&doc, "cat dog", 3);

    // every line scores tf(cat)·idf + tf(dog)·idf = idf
    assert_eq!(ranked.len(), 3);
    for line in &ranked {
        assert_close(line.score, idf);
    }
    let order: Vec<usize> = ranked.iter().map(|r| r.index).collect();
    assert_eq!(order, vec![0, 1, 2]);
}

#[test]
fn test_rarer_term_outweighs_common_one() {
    let results = search(NOTES, "ownership compile", 10);
    assert_eq!(
        results[0],
        "The borrow checker enforces ownership at compile time."
    );
    assert!(results.contains(&"Rust ownership rules prevent data races."));
}

#[test]
fn test_shorter_line_wins_on_tf() {
    let text = "rust\nrust is a language\ngo";
    assert_eq!(search(text, "rust", 5), vec!["rust", "rust is a language"]);
}

#[test]
fn test_results_are_exact_line_text() {
    let text = "  Padded   Line  \nother\r\nline\n";
    let results = search(text, "padded", 5);
    assert_eq!(results, vec!["  Padded   Line  "]);

    // the carriage return belongs to the line
    assert_eq!(search(text, "other", 5), vec!["other\r"]);
}
