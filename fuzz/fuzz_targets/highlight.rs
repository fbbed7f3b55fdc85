// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query highlighting.
//!
//! The highlighter compiles user input into a regex. Whatever the query,
//! it must not panic, must not drop text, and must not let markup through.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sitesearch::{escape_html, Highlighter, Span};

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    query: String,
}

fuzz_target!(|input: Input| {
    let query: String = input.query.chars().take(64).collect();
    let highlighter = Highlighter::new(&query);

    // INVARIANT: spans reassemble to the input
    let spans = highlighter.spans(&input.text);
    let rebuilt: String = spans.iter().map(Span::text).collect();
    assert_eq!(rebuilt, input.text);

    // INVARIANT: only <mark> tags are added to the escaped text
    let html = highlighter.to_html(&input.text);
    let stripped = html.replace("<mark>", "").replace("</mark>", "");
    assert_eq!(stripped, escape_html(&input.text));
});
