// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary bytes as a query against a small mixed index. Regex
//! metacharacters, emoji, null bytes and case-folding oddities all have to
//! come back as a bounded, sorted result list.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sitesearch::testing::sample_index_json;
use sitesearch::{score_item, search, searchable_query, SearchIndex, TypeFilter, MAX_RESULTS};

fuzz_target!(|query: &[u8]| {
    static INDEX: std::sync::OnceLock<SearchIndex> = std::sync::OnceLock::new();
    let index = INDEX.get_or_init(|| {
        SearchIndex::from_json(sample_index_json()).expect("sample index should parse")
    });

    let raw = String::from_utf8_lossy(query);
    let Some(query) = searchable_query(&raw) else {
        return;
    };

    let results = search(index, query, &TypeFilter::All);

    // INVARIANT: bounded by MAX_RESULTS
    assert!(results.len() <= MAX_RESULTS);

    // INVARIANT: positions are valid, scores positive and reproducible
    let lower = query.to_lowercase();
    for result in &results {
        assert!(result.position < index.len());
        assert!(result.score > 0);
        assert_eq!(result.score, score_item(result.item, &lower));
    }

    // INVARIANT: descending score, index order within ties
    for pair in results.windows(2) {
        assert!(
            pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].position < pair[1].position),
            "results out of order: {:?}",
            pair
        );
    }

    // INVARIANT: the type filter only ever removes results
    let posts = search(index, query, &TypeFilter::Only("post".into()));
    assert!(posts.len() <= results.len());
    assert!(posts.iter().all(|r| r.item.kind == "post"));
});
