// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for widget event sequences.
//!
//! Random interleavings of typing, keys, clicks and load completion. The
//! widget must never focus an entry that is not rendered.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sitesearch::testing::sample_index_json;
use sitesearch::{Effect, LoadError, SearchIndex, SearchWidget, WidgetConfig};

#[derive(Debug, Arbitrary)]
enum Event {
    Input(String),
    Focus(String),
    Key(u8),
    Toggle,
    OutsideClick,
    LoadOk,
    LoadErr,
}

const KEYS: [&str; 6] = ["ArrowDown", "ArrowUp", "Enter", "Escape", "Tab", "a"];

fuzz_target!(|input: (bool, Vec<Event>)| {
    let (compact, events) = input;
    let config = WidgetConfig {
        compact,
        ..WidgetConfig::default()
    };
    let mut widget = SearchWidget::new(config);
    widget.begin_load();

    for event in events.into_iter().take(64) {
        let effects = match event {
            Event::Input(value) => widget.on_input(&value),
            Event::Focus(value) => widget.on_focus(&value),
            Event::Key(k) => widget.on_keydown(KEYS[k as usize % KEYS.len()]),
            Event::Toggle => widget.on_toggle(),
            Event::OutsideClick => widget.on_outside_click(),
            Event::LoadOk => {
                let index = SearchIndex::from_json(sample_index_json())
                    .expect("sample index should parse");
                widget.finish_load(Ok(index));
                Vec::new()
            }
            Event::LoadErr => {
                widget.finish_load(Err(LoadError::Http { status: 404 }));
                Vec::new()
            }
        };

        // INVARIANT: focus and activation stay within the rendered entries
        for effect in &effects {
            match effect {
                Effect::FocusEntry(i) | Effect::Activate { index: i, .. } => {
                    assert!(*i < widget.view().focusable_count());
                }
                _ => {}
            }
        }
        if let Some(i) = widget.focused() {
            assert!(i < widget.focusable_count());
        }
        if !compact {
            assert!(!widget.is_expanded());
        }
    }
});
