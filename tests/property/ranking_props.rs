//! Ranking invariants over random indexes.

use proptest::prelude::*;
use sitesearch::{score_item, search, SearchIndex, SearchItem, TypeFilter, MAX_RESULTS, MAX_SCORE};

// ============================================================================
// STRATEGIES
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "rust", "Rust", "RUST", "go", "cargo", "guide", "basics", "c++", "a.*b", "site",
        "static", "widget", "notes", "café",
    ])
    .prop_map(str::to_string)
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..5).prop_map(|words| words.join(" "))
}

fn item_strategy() -> impl Strategy<Value = SearchItem> {
    (
        text_strategy(),
        prop::option::of(text_strategy()),
        prop::option::of(text_strategy()),
        prop::sample::select(vec!["post", "page", ""]),
    )
        .prop_map(|(title, excerpt, content, kind)| SearchItem {
            url: format!("/{}/", title.replace(' ', "-")),
            title,
            kind: kind.to_string(),
            excerpt,
            content,
            date: None,
        })
}

fn index_strategy() -> impl Strategy<Value = SearchIndex> {
    prop::collection::vec(item_strategy(), 0..30).prop_map(SearchIndex::new)
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["rust", "ru", "GUIDE", "c++", "a.*b", "st", "zz", "café"])
        .prop_map(str::to_string)
}

fn filter_strategy() -> impl Strategy<Value = TypeFilter> {
    prop::sample::select(vec!["all", "post", "page"]).prop_map(TypeFilter::parse)
}

fn contains_ci(text: Option<&str>, query: &str) -> bool {
    text.is_some_and(|t| t.to_lowercase().contains(&query.to_lowercase()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Scores never increase down the list; ties keep index order.
    #[test]
    fn prop_results_sorted_and_stable(index in index_strategy(), query in query_strategy()) {
        let results = search(&index, &query, &TypeFilter::All);
        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].position < pair[1].position);
            }
        }
    }

    #[test]
    fn prop_results_capped(index in index_strategy(), query in query_strategy()) {
        prop_assert!(search(&index, &query, &TypeFilter::All).len() <= MAX_RESULTS);
    }

    /// Every result matches at least one field and has a score in range.
    #[test]
    fn prop_results_actually_match(index in index_strategy(), query in query_strategy()) {
        for result in search(&index, &query, &TypeFilter::All) {
            let item = result.item;
            prop_assert!(result.score > 0 && result.score <= MAX_SCORE);
            prop_assert!(
                contains_ci(Some(&item.title), &query)
                    || contains_ci(item.excerpt.as_deref(), &query)
                    || contains_ci(item.content.as_deref(), &query)
            );
            prop_assert_eq!(result.score, score_item(item, &query.to_lowercase()));
        }
    }

    /// Nothing left out of the top ten outranks something kept.
    #[test]
    fn prop_truncation_keeps_best(index in index_strategy(), query in query_strategy()) {
        let results = search(&index, &query, &TypeFilter::All);
        let lower = query.to_lowercase();
        let matching = index
            .items
            .iter()
            .filter(|item| score_item(item, &lower) > 0)
            .count();
        prop_assert_eq!(results.len(), matching.min(MAX_RESULTS));
        if let Some(last) = results.last() {
            for (position, item) in index.items.iter().enumerate() {
                if results.iter().any(|r| r.position == position) {
                    continue;
                }
                prop_assert!(score_item(item, &lower) <= last.score);
            }
        }
    }

    #[test]
    fn prop_filter_respected(
        index in index_strategy(),
        query in query_strategy(),
        filter in filter_strategy(),
    ) {
        for result in search(&index, &query, &filter) {
            prop_assert!(filter.accepts(result.item));
        }
    }

    #[test]
    fn prop_query_case_irrelevant(index in index_strategy(), query in query_strategy()) {
        let lower = search(&index, &query.to_lowercase(), &TypeFilter::All);
        let upper = search(&index, &query.to_uppercase(), &TypeFilter::All);
        prop_assert_eq!(lower, upper);
    }
}
