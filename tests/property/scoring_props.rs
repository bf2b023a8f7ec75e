//! Properties of the per-line and per-document statistics.

use super::oracles::oracle_scores;
use super::strategies::{query_strategy, text_strategy, word_strategy};
use linerank::{score_lines, Document, Line};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_scores_match_oracle(text in text_strategy(), query in query_strategy()) {
        let doc = Document::new(&text);
        prop_assert_eq!(score_lines(&doc, &query), oracle_scores(&text, &query));
    }

    #[test]
    fn prop_tf_is_exact_ratio(
        words in prop::collection::vec(word_strategy(), 1..10),
        probe in word_strategy(),
    ) {
        let text = words.join(" ");
        let line = Line::new(&text);
        let count = words.iter().filter(|w| w.eq_ignore_ascii_case(&probe)).count();

        let tf = line.term_frequency(&probe);
        if count == 0 {
            prop_assert_eq!(tf, 0.0);
        } else {
            prop_assert_eq!(tf, count as f64 / words.len() as f64);
        }
    }

    #[test]
    fn prop_doc_freq_bounded_by_lines(text in text_strategy()) {
        let doc = Document::new(&text);
        for (term, df) in doc.vocabulary() {
            prop_assert!(df >= 1 && df <= doc.len(), "df({}) = {}", term, df);
            prop_assert!(doc.idf(term.as_str()) >= 0.0);
        }
    }

    #[test]
    fn prop_every_kept_line_has_tokens(text in text_strategy()) {
        let doc = Document::new(&text);
        for line in doc.lines() {
            prop_assert!(!line.is_empty());
            prop_assert!(!line.text().contains('\n'));
        }
        prop_assert_eq!(doc.stats().lines, doc.len());
    }

    #[test]
    fn prop_scores_non_negative(text in text_strategy(), query in query_strategy()) {
        let doc = Document::new(&text);
        for score in score_lines(&doc, &query) {
            prop_assert!(score >= 0.0 && score.is_finite());
        }
    }
}
