// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning a query outcome into what the results container shows.
//!
//! Rendering always produces the complete container contents. The DOM layer
//! replaces `innerHTML` wholesale, so markup from a previous query can never
//! survive into the next one.

use std::fmt::Write as _;

use serde::Serialize;

use crate::config::WidgetConfig;
use crate::highlight::{escape_html, Highlighter};
use crate::loader::IndexState;
use crate::search::evaluate;
use crate::types::{searchable_query, SearchOutcome};

pub const NOT_LOADED_MESSAGE: &str = "Search index not loaded";

pub fn no_results_message(query: &str) -> String {
    format!("No results found for \"{}\"", query)
}

/// One rendered result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayEntry {
    pub url: String,
    pub title: String,
    /// Escaped title with `<mark>` around each query occurrence.
    pub title_html: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: Option<String>,
    pub excerpt: Option<String>,
    /// Only set when excerpts are enabled and the item has a non-empty one.
    pub excerpt_html: Option<String>,
    pub score: u32,
}

/// Contents of the results container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultsView {
    /// Nothing rendered yet.
    #[default]
    Empty,
    /// A status line ("not loaded", "no results").
    Message(String),
    Entries(Vec<DisplayEntry>),
}

/// Render an outcome for display.
pub fn render(outcome: &SearchOutcome<'_>, query: &str, show_excerpt: bool) -> ResultsView {
    match outcome {
        SearchOutcome::IndexNotLoaded => ResultsView::Message(NOT_LOADED_MESSAGE.to_string()),
        SearchOutcome::NoResults { query } => ResultsView::Message(no_results_message(query)),
        SearchOutcome::Matches(matches) => {
            let highlighter = Highlighter::new(query);
            let entries = matches
                .iter()
                .map(|scored| {
                    let item = scored.item;
                    let excerpt = item.excerpt.as_deref().filter(|e| !e.is_empty());
                    DisplayEntry {
                        url: item.url.clone(),
                        title: item.title.clone(),
                        title_html: highlighter.to_html(&item.title),
                        kind: item.kind.clone(),
                        date: item.date.clone().filter(|d| !d.is_empty()),
                        excerpt: excerpt.map(str::to_string),
                        excerpt_html: excerpt
                            .filter(|_| show_excerpt)
                            .map(|e| highlighter.to_html(e)),
                        score: scored.score,
                    }
                })
                .collect();
            ResultsView::Entries(entries)
        }
    }
}

impl ResultsView {
    /// How many entries the keyboard navigator can move over.
    pub fn focusable_count(&self) -> usize {
        match self {
            ResultsView::Entries(entries) => entries.len(),
            _ => 0,
        }
    }

    pub fn entry(&self, index: usize) -> Option<&DisplayEntry> {
        match self {
            ResultsView::Entries(entries) => entries.get(index),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ResultsView::Message(message) => Some(message),
            _ => None,
        }
    }

    /// True when the container would be empty.
    pub fn is_empty(&self) -> bool {
        match self {
            ResultsView::Empty => true,
            ResultsView::Message(_) => false,
            ResultsView::Entries(entries) => entries.is_empty(),
        }
    }

    /// Full `innerHTML` for `.search-results-inner`.
    pub fn to_html(&self) -> String {
        match self {
            ResultsView::Empty => String::new(),
            ResultsView::Message(message) => format!(
                r#"<div class="search-no-results">{}</div>"#,
                escape_html(message)
            ),
            ResultsView::Entries(entries) => {
                let mut html = String::new();
                for (index, entry) in entries.iter().enumerate() {
                    write_entry(&mut html, index, entry);
                }
                html
            }
        }
    }
}

/// How a query was answered, as reported to JavaScript callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchStatus {
    Ok,
    NoResults,
    NotLoaded,
    /// Fewer than `MIN_QUERY_LEN` chars after trimming; nothing was searched.
    TooShort,
}

/// `{ status, message, results }` for the JS search API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub status: SearchStatus,
    pub message: Option<String>,
    pub results: Vec<DisplayEntry>,
}

/// Answer a raw query the way the widget would, minus the DOM.
pub fn respond(state: &IndexState, raw_query: &str, config: &WidgetConfig) -> SearchResponse {
    let Some(query) = searchable_query(raw_query) else {
        return SearchResponse {
            status: SearchStatus::TooShort,
            message: None,
            results: Vec::new(),
        };
    };

    let outcome = evaluate(state, query, &config.search_type);
    let status = match &outcome {
        SearchOutcome::IndexNotLoaded => SearchStatus::NotLoaded,
        SearchOutcome::NoResults { .. } => SearchStatus::NoResults,
        SearchOutcome::Matches(_) => SearchStatus::Ok,
    };
    let (message, results) = match render(&outcome, query, config.show_excerpt) {
        ResultsView::Entries(entries) => (None, entries),
        ResultsView::Message(message) => (Some(message), Vec::new()),
        ResultsView::Empty => (None, Vec::new()),
    };
    SearchResponse {
        status,
        message,
        results,
    }
}

fn write_entry(html: &mut String, index: usize, entry: &DisplayEntry) {
    // Writing to a String cannot fail
    let _ = write!(
        html,
        r#"<a href="{}" class="search-result-item" data-index="{}" role="option">"#,
        escape_html(&entry.url),
        index
    );
    let _ = write!(
        html,
        r#"<span class="search-result-title">{}</span>"#,
        entry.title_html
    );
    let _ = write!(
        html,
        r#"<div class="search-result-meta"><span class="search-result-type">{}</span>"#,
        escape_html(&entry.kind)
    );
    if let Some(date) = &entry.date {
        let _ = write!(
            html,
            r#"<span class="search-result-date">{}</span>"#,
            escape_html(date)
        );
    }
    html.push_str("</div>");
    if let Some(excerpt_html) = &entry.excerpt_html {
        let _ = write!(
            html,
            r#"<div class="search-result-excerpt">{}</div>"#,
            excerpt_html
        );
    }
    html.push_str("</a>");
}
