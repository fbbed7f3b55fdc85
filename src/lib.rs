//! Client-side full-text search for static sites.
//!
//! A site generator writes every page into one JSON file. The browser fetches
//! it once, and each keystroke runs a weighted substring match over it,
//! rendering the best ten results with the query highlighted.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  loader.rs  │────▶│  search.rs   │────▶│  render.rs  │────▶│ navigator.rs│
//! │ (IndexState,│     │ (search,     │     │ (ResultsView│     │ (focus      │
//! │  LoadError) │     │  evaluate)   │     │  highlight) │     │  cursor)    │
//! └─────────────┘     └──────────────┘     └─────────────┘     └─────────────┘
//!        │                   │                    │                   │
//!        ▼                   ▼                    ▼                   ▼
//! ┌───────────────────────────────────────────────────────────────────────────┐
//! │                               widget.rs                                   │
//! │      (SearchWidget: browser events in, Effect list out, no DOM access)    │
//! └───────────────────────────────────────────────────────────────────────────┘
//!                                      │ feature = "wasm"
//!                                      ▼
//!                       dom.rs (mount, fetch, apply effects)
//! ```
//!
//! # Scoring
//!
//! | Field     | Weight |
//! |-----------|--------|
//! | `title`   | 10     |
//! | `excerpt` | 5      |
//! | `content` | 1      |
//!
//! Weights add up per item (max 16). Equal scores keep index order.
//!
//! # Usage
//!
//! ```
//! use sitesearch::{search, SearchIndex, TypeFilter};
//!
//! let index = SearchIndex::from_json(
//!     r#"{"items":[{"title":"Rust Guide","url":"/rust/","type":"post"}]}"#,
//! ).unwrap();
//!
//! let results = search(&index, "rust", &TypeFilter::All);
//! assert_eq!(results[0].score, 10);
//! ```

// Module declarations
pub mod config;
pub mod highlight;
pub mod loader;
pub mod navigator;
pub mod render;
mod scoring;
mod search;
pub mod testing;
mod types;
pub mod widget;

#[cfg(feature = "wasm")]
mod dom;
#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use config::{TypeFilter, WidgetConfig};
pub use highlight::{escape_html, escape_regex, highlight, Highlighter, Span};
pub use loader::{read_index_file, IndexState, LoadError};
pub use navigator::{KeyboardNavigator, NavAction, NavKey};
pub use render::{
    render, respond, DisplayEntry, ResultsView, SearchResponse, SearchStatus, NOT_LOADED_MESSAGE,
};
pub use scoring::{
    field_matches, score_item, Field, CONTENT_WEIGHT, EXCERPT_WEIGHT, MAX_SCORE, TITLE_WEIGHT,
};
pub use search::{evaluate, search};
pub use types::{
    searchable_query, ScoredItem, SearchIndex, SearchItem, SearchOutcome, DEFAULT_INDEX_URL,
    MAX_RESULTS, MIN_QUERY_LEN,
};
pub use widget::{Effect, SearchWidget};
