// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyboard focus over the rendered result list.
//!
//! A pure state machine: keys in, actions out. No DOM here.
//!
//! ```text
//!              ArrowDown / ArrowUp
//! no-focus ───────────────────────▶ focused(i)
//!    ▲                                 │  ArrowDown: (i + 1) mod n
//!    │            Escape               │  ArrowUp:   (i + n - 1) mod n
//!    └─────────────────────────────────┘  Enter:     activate i
//! ```

/// Keys the navigator reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Self {
        match key {
            "ArrowDown" | "Down" => NavKey::ArrowDown,
            "ArrowUp" | "Up" => NavKey::ArrowUp,
            "Enter" => NavKey::Enter,
            "Escape" | "Esc" => NavKey::Escape,
            _ => NavKey::Other,
        }
    }
}

/// What the widget should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Nothing happens.
    Ignore,
    /// Enter with no focused entry: swallow the key, do nothing else.
    Swallow,
    /// Move the highlight to entry `i` and scroll it into view.
    Focus(usize),
    /// Follow entry `i`, as if clicked.
    Activate(usize),
    /// Clear focus and close the list.
    Dismiss,
}

impl NavAction {
    /// Whether the browser's default handling must be suppressed.
    ///
    /// Arrows would move the caret or scroll the page, Enter would submit an
    /// enclosing form. Escape keeps its default.
    pub fn prevents_default(&self) -> bool {
        matches!(
            self,
            NavAction::Focus(_) | NavAction::Activate(_) | NavAction::Swallow
        )
    }
}

/// Focus cursor over `count` rendered entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardNavigator {
    cursor: Option<usize>,
}

impl KeyboardNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently focused entry, `None` for no focus.
    pub fn focused(&self) -> Option<usize> {
        self.cursor
    }

    /// Drop focus. Called whenever results are re-rendered or hidden.
    pub fn reset(&mut self) {
        self.cursor = None;
    }

    /// Apply one key press over a list of `count` entries.
    pub fn handle(&mut self, key: NavKey, count: usize) -> NavAction {
        if key == NavKey::Escape {
            self.cursor = None;
            return NavAction::Dismiss;
        }
        if count == 0 {
            return NavAction::Ignore;
        }
        // A cursor left over from a longer list is treated as no focus
        let current = self.cursor.filter(|&i| i < count);

        match key {
            NavKey::ArrowDown => {
                let next = current.map_or(0, |i| (i + 1) % count);
                self.cursor = Some(next);
                NavAction::Focus(next)
            }
            NavKey::ArrowUp => {
                let prev = current.map_or(count - 1, |i| (i + count - 1) % count);
                self.cursor = Some(prev);
                NavAction::Focus(prev)
            }
            NavKey::Enter => match current {
                Some(i) => NavAction::Activate(i),
                None => NavAction::Swallow,
            },
            NavKey::Escape | NavKey::Other => NavAction::Ignore,
        }
    }

    /// Convenience for string keys straight from a DOM event.
    pub fn handle_key(&mut self, key: &str, count: usize) -> NavAction {
        self.handle(NavKey::from_key(key), count)
    }
}
