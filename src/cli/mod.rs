// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sitesearch command-line interface.
//!
//! Two subcommands: `search` runs a query against an index file exactly the
//! way the browser widget would, and `inspect` summarizes an index file.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "sitesearch",
    about = "Query and inspect static-site search indexes",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search an index file and display results
    Search {
        /// Path to search-index.json
        file: String,

        /// Search query (at least 2 characters)
        query: String,

        /// Only search items of this type ("all" for every item)
        #[arg(short = 't', long = "type", default_value = "all")]
        search_type: String,

        /// Leave excerpts out of the results
        #[arg(long)]
        no_excerpt: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Summarize an index file
    Inspect {
        /// Path to search-index.json
        file: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal listing
    Text,
    /// Rendered entries as JSON
    Json,
    /// The markup the widget would insert
    Html,
}
