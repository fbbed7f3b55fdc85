// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for sites that drive their own UI.
//!
//! `mountSiteSearch()` (see `dom.rs`) is the batteries-included path. This
//! module exposes the engine alone: load an index, run queries, get rendered
//! entries back as plain objects.

use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::config::WidgetConfig;
use crate::dom::fetch_index;
use crate::loader::IndexState;
use crate::render::respond;
use crate::types::SearchIndex;

/// WASM-accessible search engine over a single loaded index.
#[wasm_bindgen]
pub struct SiteSearchEngine {
    index: IndexState,
}

#[wasm_bindgen]
impl SiteSearchEngine {
    /// Fetch and parse an index. Rejects with the load error message.
    #[wasm_bindgen(js_name = load)]
    pub async fn load(index_url: String) -> Result<SiteSearchEngine, JsValue> {
        let index = fetch_index(&index_url)
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            index: IndexState::Loaded(index),
        })
    }

    /// Create from an index JSON string.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<SiteSearchEngine, JsValue> {
        let index = SearchIndex::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            index: IndexState::Loaded(index),
        })
    }

    /// Number of items in the index.
    #[wasm_bindgen(js_name = itemCount)]
    pub fn item_count(&self) -> usize {
        self.index.index().map_or(0, SearchIndex::len)
    }

    /// Run a query.
    ///
    /// Options (all optional): `searchType` (default "all"), `showExcerpt`
    /// (default true). Returns `{ status, message, results }` where status is
    /// `ok`, `noResults`, `notLoaded` or `tooShort`. Options of the wrong
    /// shape are rejected rather than replaced with defaults.
    #[wasm_bindgen]
    pub fn search(&self, query: &str, options: Option<JsValue>) -> Result<JsValue, JsValue> {
        let config: WidgetConfig = match options {
            Some(opts) if !opts.is_undefined() && !opts.is_null() => {
                from_value(opts).map_err(|e| JsValue::from_str(&e.to_string()))?
            }
            _ => WidgetConfig::default(),
        };

        to_value(&respond(&self.index, query, &config)).map_err(|e| e.to_string().into())
    }
}
