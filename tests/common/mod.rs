//! Shared test utilities and fixtures.

#![allow(dead_code)]

use sitesearch::{SearchIndex, SearchWidget, TypeFilter, WidgetConfig};
use std::fs;
use std::sync::LazyLock;

// Re-export canonical test utilities from sitesearch::testing
pub use sitesearch::testing::{index_of, make_item, make_item_with, make_typed_item};

/// Site index fixture in the generator's output format.
pub const FIXTURE_INDEX: &str = "tests/fixtures/search-index.json";

static FIXTURE_JSON: LazyLock<String> =
    LazyLock::new(|| fs::read_to_string(FIXTURE_INDEX).expect("Failed to read fixture index"));

/// The parsed fixture index.
pub fn fixture_index() -> SearchIndex {
    SearchIndex::from_json(&FIXTURE_JSON).expect("Fixture index should parse")
}

/// Titles of `n` posts that all contain "rust" in the title.
pub fn rust_posts(n: usize) -> SearchIndex {
    index_of((0..n).map(|i| make_item(&format!("Rust note {}", i))).collect())
}

/// Widget over the fixture with default config.
pub fn fixture_widget() -> SearchWidget {
    SearchWidget::with_index(WidgetConfig::default(), fixture_index())
}

/// Compact widget over the fixture.
pub fn compact_widget() -> SearchWidget {
    let config = WidgetConfig {
        compact: true,
        ..WidgetConfig::default()
    };
    SearchWidget::with_index(config, fixture_index())
}

/// Widget over the fixture restricted to one item type.
pub fn typed_widget(kind: &str) -> SearchWidget {
    let config = WidgetConfig {
        search_type: TypeFilter::Only(kind.to_string()),
        ..WidgetConfig::default()
    };
    SearchWidget::with_index(config, fixture_index())
}

/// Titles of the rendered entries, in order.
pub fn rendered_titles(widget: &SearchWidget) -> Vec<String> {
    (0..widget.view().focusable_count())
        .filter_map(|i| widget.view().entry(i))
        .map(|entry| entry.title.clone())
        .collect()
}
