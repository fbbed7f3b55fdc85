//! Rendered markup and highlighting.

use super::common::{fixture_index, index_of, make_item};
use sitesearch::{
    highlight, render, search, ResultsView, SearchOutcome, TypeFilter, NOT_LOADED_MESSAGE,
};

fn rendered(query: &str, show_excerpt: bool) -> ResultsView {
    let index = fixture_index();
    let outcome = SearchOutcome::Matches(search(&index, query, &TypeFilter::All));
    render(&outcome, query, show_excerpt)
}

#[test]
fn three_item_index_highlights_titles() {
    let index = index_of(vec![
        make_item("Rust Guide"),
        make_item("Go Guide"),
        make_item("Rust Basics"),
    ]);
    let outcome = SearchOutcome::Matches(search(&index, "rust", &TypeFilter::All));
    let view = render(&outcome, "rust", true);

    let titles: Vec<_> = (0..view.focusable_count())
        .map(|i| view.entry(i).unwrap().title_html.clone())
        .collect();
    assert_eq!(
        titles,
        vec!["<mark>Rust</mark> Guide", "<mark>Rust</mark> Basics"]
    );
}

#[test]
fn excerpt_highlighted_when_enabled() {
    let view = rendered("rust", true);
    let first = view.entry(0).unwrap();
    assert_eq!(
        first.excerpt_html.as_deref(),
        Some("Getting started with <mark>Rust</mark> and Cargo")
    );
}

#[test]
fn excerpt_omitted_when_disabled() {
    let view = rendered("rust", false);
    let html = view.to_html();
    assert!(!html.contains("search-result-excerpt"));
    assert!(view.entry(0).unwrap().excerpt.is_some());
}

#[test]
fn every_occurrence_marked() {
    assert_eq!(
        highlight("rust, Rust, RUST", "rust"),
        "<mark>rust</mark>, <mark>Rust</mark>, <mark>RUST</mark>"
    );
}

#[test]
fn special_characters_in_highlight() {
    let view = rendered("c++", true);
    assert_eq!(view.entry(0).unwrap().title_html, "<mark>C++</mark> Templates");
}

#[test]
fn rendering_is_a_full_replacement() {
    let first = rendered("rust", true).to_html();
    let second = rendered("guide", true).to_html();
    assert!(first.contains("<mark>Rust</mark>"));
    assert!(!second.contains("<mark>Rust</mark>"));
    assert_eq!(second.matches("<a ").count(), 2);
}

#[test]
fn not_loaded_message() {
    let view = render(&SearchOutcome::IndexNotLoaded, "rust", true);
    assert_eq!(view.message(), Some(NOT_LOADED_MESSAGE));
    assert_eq!(view.focusable_count(), 0);
}

#[test]
fn no_results_message_quotes_query() {
    let outcome = SearchOutcome::NoResults {
        query: "zzz".into(),
    };
    let view = render(&outcome, "zzz", true);
    assert_eq!(view.message(), Some("No results found for \"zzz\""));
}

#[test]
fn links_point_at_item_urls() {
    let html = rendered("guide", true).to_html();
    assert!(html.contains(r#"href="/posts/rust-guide/""#));
    assert!(html.contains(r#"href="/posts/go-guide/""#));
    assert!(html.contains(r#"<span class="search-result-date">2024-02-02</span>"#));
}
