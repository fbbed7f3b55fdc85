//! The `sitesearch` binary, run against the fixture.

use std::process::{Command, Output};

use super::common::FIXTURE_INDEX;

fn sitesearch(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sitesearch"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run sitesearch")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn json_output_lists_ranked_entries() {
    let output = sitesearch(&["search", FIXTURE_INDEX, "rust", "--format", "json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["query"], "rust");
    assert!(json["message"].is_null());
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 5);
    assert_eq!(results[0]["title"], "Rust Guide");
    assert_eq!(results[0]["titleHtml"], "<mark>Rust</mark> Guide");
    assert_eq!(results[0]["score"], 16);
    assert_eq!(results[0]["type"], "post");
}

#[test]
fn type_flag_filters() {
    let output = sitesearch(&[
        "search", FIXTURE_INDEX, "rust", "--type", "page", "--format", "json",
    ]);
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let titles: Vec<_> = json["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["About this site", "Projects"]);
}

#[test]
fn no_matches_reports_message() {
    let output = sitesearch(&["search", FIXTURE_INDEX, "zzz", "--format", "json"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["message"], "No results found for \"zzz\"");
    assert_eq!(json["results"].as_array().unwrap().len(), 0);
}

#[test]
fn html_output_is_widget_markup() {
    let output = sitesearch(&["search", FIXTURE_INDEX, "c++", "--format", "html", "--no-excerpt"]);
    let html = stdout(&output);
    assert!(html.contains(r#"class="search-result-item" data-index="0""#));
    assert!(html.contains("<mark>C++</mark> Templates"));
    assert!(!html.contains("search-result-excerpt"));
}

#[test]
fn text_output_marks_matches_without_color() {
    let output = sitesearch(&["search", FIXTURE_INDEX, "guide"]);
    let text = stdout(&output);
    assert!(text.contains("2 results for \"guide\""));
    assert!(text.contains("Rust [Guide]"));
    assert!(!text.contains('\x1b'));
}

#[test]
fn short_query_fails() {
    let output = sitesearch(&["search", FIXTURE_INDEX, "r"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("at least 2 characters"));
}

#[test]
fn missing_index_fails() {
    let output = sitesearch(&["search", "does/not/exist.json", "rust"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("could not load index"));
}

#[test]
fn inspect_counts_types() {
    let output = sitesearch(&["inspect", FIXTURE_INDEX]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Items: 6"));
    assert!(text.contains("Dated: 3"));
    assert!(text.contains("Without excerpt: 1"));
}
