// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index document parsing.
//!
//! The index comes over the network. Any body must either parse or return
//! an error; and anything that parses must be searchable.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sitesearch::{search, SearchIndex, TypeFilter, MAX_RESULTS};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(index) = SearchIndex::from_json(json) else {
        return;
    };

    for query in ["ab", "the", "c++", "a.*b"] {
        assert!(search(&index, query, &TypeFilter::All).len() <= MAX_RESULTS);
    }
});
