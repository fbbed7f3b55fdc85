// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query matcher.
//!
//! Linear scan over the index: filter by type, score every item, drop the
//! zero scores, stable-sort by score, keep the first [`MAX_RESULTS`].
//!
//! # Ordering
//!
//! `slice::sort_by` is stable, so items with equal scores keep their index
//! order. That is the only tiebreak; there is no secondary key.

use crate::config::TypeFilter;
use crate::loader::IndexState;
use crate::scoring::score_item;
use crate::types::{ScoredItem, SearchIndex, SearchOutcome, MAX_RESULTS};

/// Score and rank the index against `query`.
///
/// `query` is expected to be trimmed and at least `MIN_QUERY_LEN` chars; the
/// matcher itself does not enforce the length (an empty query would match
/// every item).
pub fn search<'a>(index: &'a SearchIndex, query: &str, filter: &TypeFilter) -> Vec<ScoredItem<'a>> {
    let lower_query = query.to_lowercase();

    let mut results: Vec<ScoredItem<'a>> = index
        .items
        .iter()
        .enumerate()
        .filter(|(_, item)| filter.accepts(item))
        .filter_map(|(position, item)| {
            let score = score_item(item, &lower_query);
            (score > 0).then_some(ScoredItem {
                item,
                position,
                score,
            })
        })
        .collect();

    // Descending by score; stable for equal scores
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(MAX_RESULTS);
    results
}

/// Run a query against whatever state the index is in.
///
/// Distinguishes "no index" from "no matches" so the renderer can say which.
pub fn evaluate<'a>(state: &'a IndexState, query: &str, filter: &TypeFilter) -> SearchOutcome<'a> {
    let Some(index) = state.index() else {
        return SearchOutcome::IndexNotLoaded;
    };

    let matches = search(index, query, filter);
    if matches.is_empty() {
        SearchOutcome::NoResults {
            query: query.to_string(),
        }
    } else {
        SearchOutcome::Matches(matches)
    }
}
