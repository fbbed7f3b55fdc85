// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Marking query occurrences in result text.
//!
//! The query is escaped before it becomes a pattern, so `c++` or `(draft)`
//! match literally and can never fail to compile. Matching is
//! case-insensitive and every occurrence is marked; the marked text keeps the
//! casing it had in the source.

use regex::{Regex, RegexBuilder};

const MARK_OPEN: &str = "<mark>";
const MARK_CLOSE: &str = "</mark>";

/// A piece of highlighted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'t> {
    Plain(&'t str),
    Match(&'t str),
}

impl<'t> Span<'t> {
    pub fn text(&self) -> &'t str {
        match self {
            Span::Plain(text) | Span::Match(text) => text,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Span::Match(_))
    }
}

/// Compiled highlighter for one query. Build once, apply to every result.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    pub fn new(query: &str) -> Self {
        let pattern = if query.is_empty() {
            None
        } else {
            RegexBuilder::new(&escape_regex(query))
                .case_insensitive(true)
                .build()
                .ok()
        };
        Self { pattern }
    }

    /// Split `text` into plain and matched spans, in order.
    ///
    /// Concatenating the span texts gives back `text` exactly.
    pub fn spans<'t>(&self, text: &'t str) -> Vec<Span<'t>> {
        let Some(pattern) = &self.pattern else {
            return vec![Span::Plain(text)];
        };

        let mut spans = Vec::new();
        let mut last = 0;
        for found in pattern.find_iter(text) {
            if found.start() > last {
                spans.push(Span::Plain(&text[last..found.start()]));
            }
            spans.push(Span::Match(found.as_str()));
            last = found.end();
        }
        if last < text.len() || spans.is_empty() {
            spans.push(Span::Plain(&text[last..]));
        }
        spans
    }

    /// HTML-escaped `text` with each match wrapped in `<mark>`.
    pub fn to_html(&self, text: &str) -> String {
        let mut html = String::with_capacity(text.len() + 16);
        for span in self.spans(text) {
            match span {
                Span::Plain(plain) => html.push_str(&escape_html(plain)),
                Span::Match(matched) => {
                    html.push_str(MARK_OPEN);
                    html.push_str(&escape_html(matched));
                    html.push_str(MARK_CLOSE);
                }
            }
        }
        html
    }
}

/// One-shot helper: highlight `query` in `text` as HTML.
pub fn highlight(text: &str, query: &str) -> String {
    Highlighter::new(query).to_html(text)
}

/// Escape regex metacharacters so the string matches literally.
pub fn escape_regex(text: &str) -> String {
    regex::escape(text)
}

/// Escape HTML special characters for text and attribute positions.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
