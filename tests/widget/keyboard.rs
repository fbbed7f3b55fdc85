//! Arrow/Enter/Escape handling through the widget.

use super::common::{fixture_widget, rendered_titles};
use sitesearch::Effect;

#[test]
fn arrows_cycle_over_rendered_entries() {
    let mut widget = fixture_widget();
    widget.on_input("guide");
    assert_eq!(rendered_titles(&widget), vec!["Rust Guide", "Go Guide"]);

    let focus: Vec<_> = ["ArrowDown", "ArrowDown", "ArrowDown"]
        .iter()
        .map(|key| widget.on_keydown(key))
        .collect();
    assert_eq!(
        focus,
        vec![
            vec![Effect::PreventDefault, Effect::FocusEntry(0)],
            vec![Effect::PreventDefault, Effect::FocusEntry(1)],
            vec![Effect::PreventDefault, Effect::FocusEntry(0)],
        ]
    );
}

#[test]
fn arrow_up_from_nothing_wraps_to_last() {
    let mut widget = fixture_widget();
    widget.on_input("rust");
    assert_eq!(
        widget.on_keydown("ArrowUp"),
        vec![Effect::PreventDefault, Effect::FocusEntry(4)]
    );
    assert_eq!(widget.focused(), Some(4));
}

#[test]
fn enter_activates_focused_link() {
    let mut widget = fixture_widget();
    widget.on_input("rust");
    widget.on_keydown("ArrowDown");
    widget.on_keydown("ArrowDown");

    assert_eq!(
        widget.on_keydown("Enter"),
        vec![
            Effect::PreventDefault,
            Effect::Activate {
                index: 1,
                url: "/posts/rust-basics/".into()
            }
        ]
    );
}

#[test]
fn enter_without_focus_is_swallowed() {
    let mut widget = fixture_widget();
    widget.on_input("rust");
    assert_eq!(widget.on_keydown("Enter"), vec![Effect::PreventDefault]);
}

#[test]
fn escape_hides_clears_and_blurs() {
    let mut widget = fixture_widget();
    widget.on_input("rust");
    widget.on_keydown("ArrowDown");

    assert_eq!(
        widget.on_keydown("Escape"),
        vec![Effect::HideResults, Effect::ClearFocus, Effect::BlurInput]
    );
    assert!(!widget.is_open());
    assert_eq!(widget.focused(), None);
}

#[test]
fn escape_with_message_only_still_dismisses() {
    let mut widget = fixture_widget();
    widget.on_input("zzz");
    assert_eq!(widget.focusable_count(), 0);
    assert!(widget.on_keydown("Escape").contains(&Effect::HideResults));
}

#[test]
fn arrows_do_nothing_without_entries() {
    let mut widget = fixture_widget();
    widget.on_input("zzz");
    assert!(widget.on_keydown("ArrowDown").is_empty());
    assert!(widget.on_keydown("Enter").is_empty());
}

#[test]
fn other_keys_pass_through() {
    let mut widget = fixture_widget();
    widget.on_input("rust");
    widget.on_keydown("ArrowDown");
    assert!(widget.on_keydown("a").is_empty());
    assert!(widget.on_keydown("Tab").is_empty());
    assert_eq!(widget.focused(), Some(0));
}

#[test]
fn typing_resets_focus() {
    let mut widget = fixture_widget();
    widget.on_input("rust");
    widget.on_keydown("ArrowDown");
    widget.on_keydown("ArrowDown");

    widget.on_input("rust b");
    assert_eq!(widget.focused(), None);
    assert_eq!(
        widget.on_keydown("ArrowDown"),
        vec![Effect::PreventDefault, Effect::FocusEntry(0)]
    );
}

#[test]
fn hidden_results_are_not_navigable() {
    let mut widget = fixture_widget();
    widget.on_input("rust");
    widget.on_outside_click();
    assert!(widget.on_keydown("ArrowDown").is_empty());
}
