// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Browser glue: mounts a [`SearchWidget`] on each `.site-search` element.
//!
//! This layer only reads events and applies [`Effect`]s. It never decides
//! anything itself.
//!
//! Expected markup:
//!
//! ```html
//! <div class="site-search" data-search-type="all" data-compact="true">
//!   <button class="search-toggle-btn" aria-expanded="false"></button>
//!   <input class="site-search-input" type="search">
//!   <div class="search-results" hidden>
//!     <div class="search-results-inner"></div>
//!   </div>
//! </div>
//! ```
//!
//! Borrow discipline: the `RefCell` borrow of the widget is always released
//! before effects are applied. Applying `Activate` calls `click()`, which
//! dispatches synchronously into the document click listener, which borrows
//! the widget again.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    console, Document, Element, Event, HtmlElement, HtmlInputElement, KeyboardEvent, Node,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::config::WidgetConfig;
use crate::loader::LoadError;
use crate::types::SearchIndex;
use crate::widget::{Effect, SearchWidget};

const MOUNT_SELECTOR: &str = ".site-search";
const RESULT_ITEM_SELECTOR: &str = ".search-result-item";
const FOCUS_CLASS: &str = "keyboard-focus";
const EXPANDED_CLASS: &str = "expanded";
/// Delay before focusing the input, so the expand transition can start.
const EXPAND_FOCUS_DELAY_MS: i32 = 100;

/// Fetch and parse the index document.
pub(crate) async fn fetch_index(url: &str) -> Result<SearchIndex, LoadError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Http {
            status: response.status(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    SearchIndex::from_json(&body)
}

struct Elements {
    container: Element,
    input: HtmlInputElement,
    results: Element,
    results_inner: Element,
    toggle: Option<Element>,
}

struct Mounted {
    widget: RefCell<SearchWidget>,
    elements: Elements,
}

/// Mount a widget on every `.site-search` element in the document.
///
/// Returns the number of widgets mounted. Elements missing the input or
/// results container are skipped with a console warning.
#[wasm_bindgen(js_name = mountSiteSearch)]
pub fn mount_site_search() -> usize {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return 0;
    };
    let Ok(nodes) = document.query_selector_all(MOUNT_SELECTOR) else {
        return 0;
    };

    let mut mounted = 0;
    for i in 0..nodes.length() {
        let Some(container) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        match mount(&document, container) {
            Ok(true) => mounted += 1,
            Ok(false) => {}
            Err(err) => console::error_2(&"Failed to mount site search:".into(), &err),
        }
    }
    mounted
}

fn find_elements(container: Element) -> Result<Option<Elements>, JsValue> {
    let input = container
        .query_selector(".site-search-input")?
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    let results = container.query_selector(".search-results")?;
    let results_inner = container.query_selector(".search-results-inner")?;
    let toggle = container.query_selector(".search-toggle-btn")?;

    let (Some(input), Some(results)) = (input, results) else {
        return Ok(None);
    };
    // Older templates render results directly into `.search-results`
    let results_inner = results_inner.unwrap_or_else(|| results.clone());

    Ok(Some(Elements {
        container,
        input,
        results,
        results_inner,
        toggle,
    }))
}

fn mount(document: &Document, container: Element) -> Result<bool, JsValue> {
    let config = WidgetConfig::from_data_attributes(|name| {
        container.get_attribute(&format!("data-{}", name))
    });
    let Some(elements) = find_elements(container)? else {
        console::warn_1(&"Site search is missing its input or results container".into());
        return Ok(false);
    };

    let index_url = config.index_url.clone();
    let compact = config.compact;
    let mounted = Rc::new(Mounted {
        widget: RefCell::new(SearchWidget::new(config)),
        elements,
    });

    start_index_fetch(&mounted, index_url);
    listen_input(&mounted)?;
    listen_keydown(&mounted)?;
    listen_focus(&mounted)?;
    if compact {
        listen_toggle(&mounted)?;
    }
    listen_outside_click(document, &mounted)?;
    Ok(true)
}

fn start_index_fetch(mounted: &Rc<Mounted>, url: String) {
    if !mounted.widget.borrow_mut().begin_load() {
        return;
    }
    let mounted = Rc::clone(mounted);
    wasm_bindgen_futures::spawn_local(async move {
        let result = fetch_index(&url).await;
        match &result {
            Err(LoadError::Http { .. }) => console::warn_1(&"Search index not found".into()),
            Err(err) => console::error_1(&format!("Failed to load search index: {}", err).into()),
            Ok(_) => {}
        }
        mounted.widget.borrow_mut().finish_load(result);
    });
}

// =============================================================================
// LISTENERS
// =============================================================================

fn listen_input(mounted: &Rc<Mounted>) -> Result<(), JsValue> {
    let m = Rc::clone(mounted);
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let value = m.elements.input.value();
        let effects = m.widget.borrow_mut().on_input(&value);
        report(apply(&m, &effects, Some(&event)));
    });
    mounted
        .elements
        .input
        .add_event_listener_with_callback("input", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

fn listen_keydown(mounted: &Rc<Mounted>) -> Result<(), JsValue> {
    let m = Rc::clone(mounted);
    let handler = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        let effects = m.widget.borrow_mut().on_keydown(&event.key());
        let event: &Event = event.as_ref();
        report(apply(&m, &effects, Some(event)));
    });
    mounted
        .elements
        .input
        .add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

fn listen_focus(mounted: &Rc<Mounted>) -> Result<(), JsValue> {
    let m = Rc::clone(mounted);
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let value = m.elements.input.value();
        let effects = m.widget.borrow_mut().on_focus(&value);
        report(apply(&m, &effects, Some(&event)));
    });
    mounted
        .elements
        .input
        .add_event_listener_with_callback("focus", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

fn listen_toggle(mounted: &Rc<Mounted>) -> Result<(), JsValue> {
    let Some(toggle) = &mounted.elements.toggle else {
        return Ok(());
    };
    let m = Rc::clone(mounted);
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let effects = m.widget.borrow_mut().on_toggle();
        report(apply(&m, &effects, Some(&event)));
    });
    toggle.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

fn listen_outside_click(document: &Document, mounted: &Rc<Mounted>) -> Result<(), JsValue> {
    let m = Rc::clone(mounted);
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        if m.elements.container.contains(target.as_ref()) {
            return;
        }
        let effects = m.widget.borrow_mut().on_outside_click();
        report(apply(&m, &effects, Some(&event)));
    });
    document.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

fn report(result: Result<(), JsValue>) {
    if let Err(err) = result {
        console::error_2(&"Site search DOM update failed:".into(), &err);
    }
}

// =============================================================================
// EFFECTS
// =============================================================================

fn apply(mounted: &Mounted, effects: &[Effect], event: Option<&Event>) -> Result<(), JsValue> {
    let el = &mounted.elements;
    for effect in effects {
        match effect {
            Effect::ReplaceResults(html) => el.results_inner.set_inner_html(html),
            Effect::ShowResults => el.results.remove_attribute("hidden")?,
            Effect::HideResults => el.results.set_attribute("hidden", "")?,
            Effect::ClearFocus => clear_focus(el)?,
            Effect::FocusEntry(index) => {
                clear_focus(el)?;
                if let Some(item) = result_item(el, *index)? {
                    item.class_list().add_1(FOCUS_CLASS)?;
                    let options = ScrollIntoViewOptions::new();
                    options.set_block(ScrollLogicalPosition::Nearest);
                    item.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }
            Effect::Activate { index, .. } => {
                if let Some(item) = result_item(el, *index)? {
                    if let Ok(link) = item.dyn_into::<HtmlElement>() {
                        link.click();
                    }
                }
            }
            Effect::PreventDefault => {
                if let Some(event) = event {
                    event.prevent_default();
                }
            }
            Effect::BlurInput => el.input.blur()?,
            Effect::Expand => {
                el.container.class_list().add_1(EXPANDED_CLASS)?;
                if let Some(toggle) = &el.toggle {
                    toggle.set_attribute("aria-expanded", "true")?;
                }
                focus_input_later(&el.input)?;
            }
            Effect::Collapse => {
                el.container.class_list().remove_1(EXPANDED_CLASS)?;
                if let Some(toggle) = &el.toggle {
                    toggle.set_attribute("aria-expanded", "false")?;
                }
                el.input.set_value("");
            }
        }
    }
    Ok(())
}

fn result_item(el: &Elements, index: usize) -> Result<Option<Element>, JsValue> {
    let items = el.results_inner.query_selector_all(RESULT_ITEM_SELECTOR)?;
    Ok(items
        .item(index as u32)
        .and_then(|node| node.dyn_into::<Element>().ok()))
}

fn clear_focus(el: &Elements) -> Result<(), JsValue> {
    let focused = el
        .results_inner
        .query_selector_all(&format!(".{}", FOCUS_CLASS))?;
    for i in 0..focused.length() {
        if let Some(item) = focused.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            item.class_list().remove_1(FOCUS_CLASS)?;
        }
    }
    Ok(())
}

fn focus_input_later(input: &HtmlInputElement) -> Result<(), JsValue> {
    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let input = input.clone();
    let callback = Closure::once_into_js(move || {
        if let Err(err) = input.focus() {
            console::error_2(&"Site search could not focus the input:".into(), &err);
        }
    });
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        EXPAND_FOCUS_DELAY_MS,
    )?;
    Ok(())
}
