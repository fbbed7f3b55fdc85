// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One search widget instance: events in, DOM effects out.
//!
//! `SearchWidget` owns everything the widget knows (config, index, focus,
//! open/expanded flags, the current rendering). Each `on_*` method handles
//! one browser event to completion and returns the side effects the page
//! should apply, in order. The DOM layer (`dom.rs`) is a thin interpreter
//! for [`Effect`]; everything that decides *what* happens lives here and is
//! testable without a browser.

use crate::config::WidgetConfig;
use crate::loader::{IndexState, LoadError};
use crate::navigator::{KeyboardNavigator, NavAction, NavKey};
use crate::render::{render, ResultsView};
use crate::search::evaluate;
use crate::types::{searchable_query, SearchIndex};

/// A side effect for the DOM layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace the whole results container with this markup.
    ReplaceResults(String),
    /// Remove `hidden` from the results list.
    ShowResults,
    /// Set `hidden` on the results list.
    HideResults,
    /// Remove keyboard-focus styling from every entry.
    ClearFocus,
    /// Style entry `i` as focused and scroll it into view (`block: nearest`).
    FocusEntry(usize),
    /// Follow entry `index` as if it were clicked.
    Activate { index: usize, url: String },
    /// Stop the browser's default key handling.
    PreventDefault,
    /// Blur the search input.
    BlurInput,
    /// Open the compact widget and focus the input shortly after.
    Expand,
    /// Close the compact widget and clear the input.
    Collapse,
}

#[derive(Debug, Default)]
pub struct SearchWidget {
    config: WidgetConfig,
    index: IndexState,
    navigator: KeyboardNavigator,
    view: ResultsView,
    results_open: bool,
    expanded: bool,
}

impl SearchWidget {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// A widget whose index is already available (CLI, tests, JS bindings).
    pub fn with_index(config: WidgetConfig, index: SearchIndex) -> Self {
        Self {
            config,
            index: IndexState::Loaded(index),
            ..Self::default()
        }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn index_state(&self) -> &IndexState {
        &self.index
    }

    pub fn view(&self) -> &ResultsView {
        &self.view
    }

    pub fn focused(&self) -> Option<usize> {
        self.navigator.focused()
    }

    pub fn is_open(&self) -> bool {
        self.results_open
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Entries the navigator can reach right now. Hidden results have none.
    pub fn focusable_count(&self) -> usize {
        if self.results_open {
            self.view.focusable_count()
        } else {
            0
        }
    }

    // =========================================================================
    // INDEX LIFECYCLE
    // =========================================================================

    /// See [`IndexState::begin_load`].
    pub fn begin_load(&mut self) -> bool {
        self.index.begin_load()
    }

    /// See [`IndexState::finish_load`].
    pub fn finish_load(&mut self, result: Result<SearchIndex, LoadError>) {
        self.index.finish_load(result);
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    /// The input's value changed.
    pub fn on_input(&mut self, value: &str) -> Vec<Effect> {
        let mut effects = Vec::new();
        let Some(query) = searchable_query(value) else {
            self.hide(&mut effects);
            return effects;
        };

        let view = {
            let outcome = evaluate(&self.index, query, &self.config.search_type);
            render(&outcome, query, self.config.show_excerpt)
        };
        self.view = view;
        self.navigator.reset();
        self.results_open = true;

        effects.push(Effect::ReplaceResults(self.view.to_html()));
        effects.push(Effect::ShowResults);
        effects
    }

    /// The input gained focus: reopen the last results if they still apply.
    pub fn on_focus(&mut self, value: &str) -> Vec<Effect> {
        if searchable_query(value).is_some() && !self.view.is_empty() {
            self.results_open = true;
            vec![Effect::ShowResults]
        } else {
            Vec::new()
        }
    }

    /// A key was pressed in the input.
    pub fn on_keydown(&mut self, key: &str) -> Vec<Effect> {
        let count = self.focusable_count();
        let action = self.navigator.handle(NavKey::from_key(key), count);

        let mut effects = Vec::new();
        if action.prevents_default() {
            effects.push(Effect::PreventDefault);
        }
        match action {
            NavAction::Ignore | NavAction::Swallow => {}
            NavAction::Focus(index) => effects.push(Effect::FocusEntry(index)),
            NavAction::Activate(index) => {
                if let Some(entry) = self.view.entry(index) {
                    effects.push(Effect::Activate {
                        index,
                        url: entry.url.clone(),
                    });
                }
            }
            NavAction::Dismiss => {
                self.hide(&mut effects);
                effects.push(Effect::BlurInput);
                if self.config.compact && self.expanded {
                    self.collapse(&mut effects);
                }
            }
        }
        effects
    }

    /// The compact-mode toggle button was clicked.
    pub fn on_toggle(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if !self.config.compact {
            return effects;
        }
        if self.expanded {
            self.collapse(&mut effects);
        } else {
            self.expanded = true;
            effects.push(Effect::Expand);
        }
        effects
    }

    /// A click landed outside the widget.
    pub fn on_outside_click(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.hide(&mut effects);
        if self.config.compact && self.expanded {
            self.collapse(&mut effects);
        }
        effects
    }

    fn hide(&mut self, effects: &mut Vec<Effect>) {
        self.results_open = false;
        self.navigator.reset();
        effects.push(Effect::HideResults);
        effects.push(Effect::ClearFocus);
    }

    fn collapse(&mut self, effects: &mut Vec<Effect>) {
        self.expanded = false;
        effects.push(Effect::Collapse);
        self.hide(effects);
    }
}
