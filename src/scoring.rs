// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring functions for search results.
//!
//! A query either occurs in a field or it doesn't. Each matching field adds
//! its fixed weight; there is no position or frequency bonus.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! ## FIELD_WEIGHT_DOMINANCE
//!
//! ```text
//! Title > Excerpt + Content
//! Excerpt > Content
//! ```
//!
//! With current values: `10 > 5 + 1` ✓ and `5 > 1` ✓. A title hit always
//! outranks any combination of the other two fields.
//!
//! ## CONSTANTS
//! - Title = 10
//! - Excerpt = 5
//! - Content = 1
//! - MaxScore = 16

use crate::types::SearchItem;

pub const TITLE_WEIGHT: u32 = 10;
pub const EXCERPT_WEIGHT: u32 = 5;
pub const CONTENT_WEIGHT: u32 = 1;

/// Best possible score: every field matched.
pub const MAX_SCORE: u32 = TITLE_WEIGHT + EXCERPT_WEIGHT + CONTENT_WEIGHT;

/// The three searchable fields of a [`SearchItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Excerpt,
    Content,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Title, Field::Excerpt, Field::Content];

    /// Weight added when the query occurs in this field.
    pub fn weight(self) -> u32 {
        match self {
            Field::Title => TITLE_WEIGHT,
            Field::Excerpt => EXCERPT_WEIGHT,
            Field::Content => CONTENT_WEIGHT,
        }
    }

    /// Field text, or `None` when the item doesn't carry it.
    pub fn text(self, item: &SearchItem) -> Option<&str> {
        match self {
            Field::Title => Some(item.title.as_str()),
            Field::Excerpt => item.excerpt.as_deref(),
            Field::Content => item.content.as_deref(),
        }
    }
}

/// Case-insensitive containment test.
///
/// `lower_query` must already be lowercased; the matcher lowercases the query
/// once per evaluation instead of once per field.
#[inline]
pub fn field_matches(text: &str, lower_query: &str) -> bool {
    text.to_lowercase().contains(lower_query)
}

/// Score one item against a lowercased query. Zero means "no match".
pub fn score_item(item: &SearchItem, lower_query: &str) -> u32 {
    Field::ALL
        .iter()
        .filter(|field| {
            field
                .text(item)
                .is_some_and(|text| field_matches(text, lower_query))
        })
        .map(|field| field.weight())
        .sum()
}
