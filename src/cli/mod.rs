// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the linerank command-line interface.
//!
//! Two subcommands: `search` ranks the lines of a file against a query, and
//! `inspect` reports line and vocabulary statistics. Both read stdin when the
//! file argument is `-`.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "linerank",
    about = "Rank the lines of a text by TF-IDF relevance to a query",
    version
)]
pub struct Cli {
    /// Log at debug level (overridden by LINERANK_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the lines of a file most relevant to a query
    Search {
        /// Path to a UTF-8 text file, or `-` for stdin
        file: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of lines to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Prefix each line with its score and line index
        #[arg(long)]
        scores: bool,

        /// Print results as a JSON array
        #[arg(long, conflicts_with = "scores")]
        json: bool,
    },

    /// Show line, token and vocabulary statistics for a file
    Inspect {
        /// Path to a UTF-8 text file, or `-` for stdin
        file: PathBuf,

        /// Number of most widespread terms to list
        #[arg(short, long, default_value = "10")]
        top: usize,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
