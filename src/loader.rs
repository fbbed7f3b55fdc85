// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading the index and tracking whether it is available.
//!
//! The index is an explicit resource with four states:
//!
//! ```text
//!            begin_load()              finish_load(Ok)
//! NotLoaded ─────────────▶ Loading ───────────────────▶ Loaded
//!                             │
//!                             │ finish_load(Err)
//!                             ▼
//!                        FailedToLoad
//! ```
//!
//! There are no transitions out of `Loaded` or `FailedToLoad`; a page gets one
//! fetch. Every state except `Loaded` answers queries with "index not loaded".

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, error, warn};

use crate::types::SearchIndex;

/// Why the index could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The server answered, but not with 2xx.
    #[error("search index request failed with HTTP {status}")]
    Http { status: u16 },
    /// The request never completed.
    #[error("network error fetching search index: {0}")]
    Network(String),
    /// The body was not a `{ "items": [...] }` document.
    #[error("invalid search index JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// Reading an index from disk failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SearchIndex {
    /// Parse an index document.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Read and parse an index file.
pub fn read_index_file(path: impl AsRef<Path>) -> Result<SearchIndex, LoadError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let index = SearchIndex::from_json(&json)?;
    debug!(path = %path.display(), items = index.len(), "Loaded search index");
    Ok(index)
}

/// Availability of the index for one widget.
#[derive(Debug, Default)]
pub enum IndexState {
    #[default]
    NotLoaded,
    /// A fetch is in flight.
    Loading,
    Loaded(SearchIndex),
    FailedToLoad(LoadError),
}

impl IndexState {
    /// Claim the one and only fetch.
    ///
    /// Returns `true` the first time it is called on a `NotLoaded` state and
    /// moves to `Loading`. Every other call returns `false`.
    pub fn begin_load(&mut self) -> bool {
        if matches!(self, IndexState::NotLoaded) {
            *self = IndexState::Loading;
            true
        } else {
            false
        }
    }

    /// Record the fetch result. Failures are logged, never propagated.
    ///
    /// A result arriving for a state that is already settled is ignored.
    pub fn finish_load(&mut self, result: Result<SearchIndex, LoadError>) {
        if matches!(self, IndexState::Loaded(_) | IndexState::FailedToLoad(_)) {
            debug!("Ignoring duplicate search index load result");
            return;
        }
        *self = match result {
            Ok(index) => {
                debug!(items = index.len(), "Search index loaded");
                IndexState::Loaded(index)
            }
            Err(err) => {
                match &err {
                    LoadError::Http { status } => warn!(status, "Search index not found"),
                    other => error!(error = %other, "Failed to load search index"),
                }
                IndexState::FailedToLoad(err)
            }
        };
    }

    /// The index, if it loaded successfully.
    pub fn index(&self) -> Option<&SearchIndex> {
        match self {
            IndexState::Loaded(index) => Some(index),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.index().is_some()
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            IndexState::FailedToLoad(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SearchIndex> for IndexState {
    fn from(index: SearchIndex) -> Self {
        IndexState::Loaded(index)
    }
}
