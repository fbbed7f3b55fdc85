use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use sitesearch::{
    evaluate, read_index_file, render, searchable_query, DisplayEntry, Highlighter, IndexState,
    ResultsView, SearchIndex, TypeFilter, MIN_QUERY_LEN,
};

mod cli;
use cli::display::{self, Tone};
use cli::{Cli, Commands, OutputFormat};

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            file,
            query,
            search_type,
            no_excerpt,
            format,
        } => run_search(&file, &query, &search_type, !no_excerpt, format),
        Commands::Inspect { file } => run_inspect(&file),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--format json` output stays clean. `RUST_LOG`
/// overrides the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(path: &str) -> Result<SearchIndex> {
    read_index_file(path).with_context(|| format!("could not load index {}", path))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    query: &'a str,
    message: Option<&'a str>,
    results: &'a [DisplayEntry],
}

fn run_search(
    path: &str,
    raw_query: &str,
    search_type: &str,
    show_excerpt: bool,
    format: OutputFormat,
) -> Result<()> {
    let Some(query) = searchable_query(raw_query) else {
        anyhow::bail!("query must be at least {} characters", MIN_QUERY_LEN);
    };

    let state = IndexState::Loaded(load(path)?);
    let filter = TypeFilter::parse(search_type);
    let outcome = evaluate(&state, query, &filter);
    debug!(query, matches = outcome.len(), "Evaluated query");
    let view = render(&outcome, query, show_excerpt);

    match format {
        OutputFormat::Html => println!("{}", view.to_html()),
        OutputFormat::Json => {
            let entries: &[DisplayEntry] = match &view {
                ResultsView::Entries(entries) => entries,
                _ => &[],
            };
            let output = JsonOutput {
                query,
                message: view.message(),
                results: entries,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&output).context("failed to serialize results")?
            );
        }
        OutputFormat::Text => print_results(&view, query),
    }
    Ok(())
}

fn print_results(view: &ResultsView, query: &str) {
    let ResultsView::Entries(entries) = view else {
        println!("{}", display::dim(view.message().unwrap_or_default()));
        return;
    };

    let highlighter = Highlighter::new(query);
    display::section_top(&format!("{} results for \"{}\"", entries.len(), query));
    for (rank, entry) in entries.iter().enumerate() {
        let title = display::highlighted(&entry.title, &highlighter);
        display::row(&format!(
            " {:>2}. {} {}  {}",
            rank + 1,
            display::score_value(entry.score),
            display::pad_right(&title, 44),
            display::type_badge(&entry.kind),
        ));
        let mut meta = entry.url.clone();
        if let Some(date) = &entry.date {
            meta.push_str("  ");
            meta.push_str(date);
        }
        display::row(&format!("          {}", display::dim(&display::truncate(&meta, 60))));
        if entry.excerpt_html.is_some() {
            if let Some(excerpt) = &entry.excerpt {
                let short = display::truncate(excerpt, 60);
                display::row(&format!("          {}", display::highlighted(&short, &highlighter)));
            }
        }
    }
    display::section_bot();
}

fn run_inspect(path: &str) -> Result<()> {
    let index = load(path)?;

    let mut by_type: BTreeMap<&str, usize> = BTreeMap::new();
    let mut missing_excerpt = 0;
    let mut missing_content = 0;
    let mut dated = 0;
    for item in &index.items {
        *by_type.entry(item.kind.as_str()).or_default() += 1;
        if item.excerpt.as_deref().map_or(true, str::is_empty) {
            missing_excerpt += 1;
        }
        if item.content.as_deref().map_or(true, str::is_empty) {
            missing_content += 1;
        }
        if item.date.as_deref().is_some_and(|d| !d.is_empty()) {
            dated += 1;
        }
    }

    display::section_top(&format!("INDEX {}", path));
    display::row(&format!(
        " Items: {}",
        display::paint(Tone::Heading, true, &index.len().to_string())
    ));
    for (kind, count) in &by_type {
        display::row(&format!(
            "   {} {}",
            display::pad_right(&display::type_badge(kind), 16),
            count
        ));
    }
    display::row(&format!(" Dated: {}", dated));
    display::row(&format!(" Without excerpt: {}", missing_excerpt));
    display::row(&format!(" Without content: {}", missing_content));
    display::section_bot();
    Ok(())
}
