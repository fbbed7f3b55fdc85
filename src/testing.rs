//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{SearchIndex, SearchItem};

/// Create a simple post with only a title.
pub fn make_item(title: &str) -> SearchItem {
    make_typed_item(title, "post")
}

/// Create an item of a given type with only a title.
pub fn make_typed_item(title: &str, kind: &str) -> SearchItem {
    SearchItem {
        title: title.to_string(),
        url: format!("/{}/", slug(title)),
        kind: kind.to_string(),
        excerpt: None,
        content: None,
        date: None,
    }
}

/// Create a post with explicit excerpt and content.
pub fn make_item_with(title: &str, excerpt: Option<&str>, content: Option<&str>) -> SearchItem {
    SearchItem {
        excerpt: excerpt.map(str::to_string),
        content: content.map(str::to_string),
        ..make_item(title)
    }
}

pub fn index_of(items: Vec<SearchItem>) -> SearchIndex {
    SearchIndex::new(items)
}

/// A small mixed-type index in the site's JSON shape.
pub fn sample_index_json() -> &'static str {
    r#"{
  "items": [
    {"title": "Rust Guide", "url": "/posts/rust-guide/", "type": "post",
     "excerpt": "Getting started with Rust", "content": "cargo new hello", "date": "2024-01-10"},
    {"title": "Go Guide", "url": "/posts/go-guide/", "type": "post",
     "excerpt": "Getting started with Go", "content": "go mod init; unlike rust, no borrow checker"},
    {"title": "Rust Basics", "url": "/posts/rust-basics/", "type": "post"},
    {"title": "About", "url": "/about/", "type": "page",
     "excerpt": "Who writes this site", "content": "Mostly Rust and C++ notes"},
    {"title": "C++ Tips", "url": "/posts/cpp-tips/", "type": "post",
     "excerpt": "Templates (and why)", "date": ""}
  ]
}"#
}

fn slug(title: &str) -> String {
    title
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
