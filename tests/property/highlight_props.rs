//! Highlighting invariants.

use proptest::prelude::*;
use sitesearch::{escape_html, Highlighter, Span};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Dropping the marks from the HTML leaves the escaped original text.
    #[test]
    fn prop_marks_only_wrap(text in "[a-zA-Z<>&\"' +.*()]{0,40}", query in "[a-zA-Z+.*(]{1,4}") {
        let html = Highlighter::new(&query).to_html(&text);
        let stripped = html.replace("<mark>", "").replace("</mark>", "");
        prop_assert_eq!(stripped, escape_html(&text));
    }

    /// Every marked span equals the query ignoring ASCII case.
    #[test]
    fn prop_spans_match_query(text in "[a-zA-Z +.*]{0,40}", query in "[a-zA-Z+.*]{1,4}") {
        let spans = Highlighter::new(&query).spans(&text);
        let rebuilt: String = spans.iter().map(Span::text).collect();
        prop_assert_eq!(&rebuilt, &text);
        for span in spans.iter().filter(|s| s.is_match()) {
            prop_assert!(span.text().eq_ignore_ascii_case(&query));
        }
    }

    /// Escaped HTML never contains raw markup characters.
    #[test]
    fn prop_escape_html_is_inert(text in ".{0,40}") {
        let escaped = escape_html(&text);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
    }
}
