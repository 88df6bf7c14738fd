// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the folio command-line interface.
//!
//! Three subcommands, all reading a content JSON file (`-` for stdin):
//! `index` to check what gets indexed, `search` to see raw ranked hits with
//! scores, and `ask` to run the whole chat pipeline on one question.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Keyword search and chat answers over portfolio content",
    version
)]
pub struct Cli {
    /// Log at debug level (overrides FOLIO_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the search index and summarize it
    Index {
        /// Content JSON with projects, blogs, and techStack arrays
        content: PathBuf,

        /// Print the full index as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Search the content and display ranked results
    Search {
        /// Content JSON with projects, blogs, and techStack arrays
        content: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Answer a question the way the chat assistant would
    Ask {
        /// Content JSON with projects, blogs, and techStack arrays
        content: PathBuf,

        /// The question
        query: String,

        /// Prior conversation as a JSON array of {role, content} messages
        ///
        /// The question itself is appended as the latest user message before
        /// follow-up suggestions are picked.
        #[arg(long)]
        history: Option<PathBuf>,

        /// Seed for the suggestion shuffle, for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}
