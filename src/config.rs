// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-widget configuration, read from the mount point's data attributes.
//!
//! ```html
//! <div class="site-search" data-search-type="post" data-show-excerpt="false" data-compact="true">
//! ```
//!
//! Attribute parsing is forgiving: only the literal `"false"` turns excerpts
//! off and only the literal `"true"` turns compact mode on. Anything else falls
//! back to the default.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::{SearchItem, DEFAULT_INDEX_URL};

/// Which items a widget searches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TypeFilter {
    /// Every item in the index (`searchType="all"`).
    #[default]
    All,
    /// Only items whose `type` equals this tag exactly.
    Only(String),
}

impl TypeFilter {
    /// Parse a `searchType` value. Empty and `"all"` mean no filter.
    ///
    /// The value is taken as-is, whitespace included, so it must equal the
    /// item `type` tags exactly.
    pub fn parse(value: &str) -> Self {
        match value {
            "" | "all" => TypeFilter::All,
            other => TypeFilter::Only(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Only(kind) => kind,
        }
    }

    #[inline]
    pub fn accepts(&self, item: &SearchItem) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(kind) => item.kind == *kind,
        }
    }
}

impl Serialize for TypeFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TypeFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(TypeFilter::parse(&value))
    }
}

/// Options for one widget instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    /// Category filter (`data-search-type`, default "all").
    pub search_type: TypeFilter,
    /// Render highlighted excerpts under each title (`data-show-excerpt`).
    pub show_excerpt: bool,
    /// Input collapsed behind a toggle button (`data-compact`).
    pub compact: bool,
    /// Index location (`data-index-url`).
    pub index_url: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            search_type: TypeFilter::All,
            show_excerpt: true,
            compact: false,
            index_url: DEFAULT_INDEX_URL.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Build a config from data attributes.
    ///
    /// `attr` is called with the attribute name minus the `data-` prefix
    /// (`"search-type"`, `"show-excerpt"`, `"compact"`, `"index-url"`) and
    /// returns `None` when the attribute is absent.
    pub fn from_data_attributes<F>(attr: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            search_type: attr("search-type")
                .map(|value| TypeFilter::parse(&value))
                .unwrap_or_default(),
            show_excerpt: attr("show-excerpt").map_or(defaults.show_excerpt, |v| v != "false"),
            compact: attr("compact").map_or(defaults.compact, |v| v == "true"),
            index_url: attr("index-url")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(defaults.index_url),
        }
    }
}
