// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data the widget searches over and what a query evaluates to.
//!
//! The index is a flat, ordered list of items parsed from a static JSON file.
//! Order matters: it is the tiebreak for equal scores, so nothing here ever
//! reorders `items`.
//!
//! # Invariants
//!
//! - **SearchIndex**: immutable once loaded. Item positions are stable for the
//!   lifetime of the page.
//! - **ScoredItem**: `0 < score <= MAX_SCORE`. Zero-score items never leave the
//!   matcher.
//! - **SearchOutcome::Matches**: non-empty, sorted by descending score, at most
//!   `MAX_RESULTS` long.

use serde::{Deserialize, Serialize};

/// Queries shorter than this (in chars, after trimming) never render results.
pub const MIN_QUERY_LEN: usize = 2;

/// Hard cap on rendered results.
pub const MAX_RESULTS: usize = 10;

/// Where the site generator writes the index.
pub const DEFAULT_INDEX_URL: &str = "/static/search-index.json";

// =============================================================================
// INDEX TYPES
// =============================================================================

/// One searchable page.
///
/// `excerpt`, `content` and `date` are optional in the JSON. A missing field
/// simply contributes nothing to the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    pub title: String,
    pub url: String,
    /// Free-form category tag ("post", "page", ...). Used by the type filter.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// The whole index, as served at [`DEFAULT_INDEX_URL`].
///
/// The wire shape is `{ "items": [...] }`. A document without `items` is
/// rejected at parse time rather than treated as an empty index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchIndex {
    pub items: Vec<SearchItem>,
}

impl SearchIndex {
    pub fn new(items: Vec<SearchItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// QUERY RESULTS
// =============================================================================

/// An item that matched a query, with its relevance score.
///
/// Lives only for one query evaluation. Borrows from the index so scoring
/// never clones page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredItem<'a> {
    pub item: &'a SearchItem,
    /// Position of `item` in the index. Kept for the stable tiebreak.
    pub position: usize,
    pub score: u32,
}

/// What a query evaluated to.
///
/// The three cases are kept apart on purpose: the renderer shows a different
/// message for each, and the navigator only has focusable entries for
/// `Matches`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// No index is available (never fetched, still loading, or failed).
    IndexNotLoaded,
    /// The index is loaded but nothing matched.
    NoResults { query: String },
    /// Ranked matches, best first.
    Matches(Vec<ScoredItem<'a>>),
}

impl SearchOutcome<'_> {
    /// Number of matched items (0 for the two empty signals).
    pub fn len(&self) -> usize {
        match self {
            SearchOutcome::Matches(items) => items.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Trim a raw input value and decide whether it is long enough to search.
///
/// Returns `None` for queries under [`MIN_QUERY_LEN`] chars; callers hide the
/// result list in that case instead of searching.
pub fn searchable_query(raw: &str) -> Option<&str> {
    let query = raw.trim();
    if query.chars().count() < MIN_QUERY_LEN {
        None
    } else {
        Some(query)
    }
}
