// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use linerank::{query_terms, rank_scored, Document, DocumentStats};

mod cli;
use cli::display::{highlight, line_label, pad_left, score_value, use_colors};
use cli::{Cli, Commands};

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "LINERANK_LOG";

#[derive(Serialize)]
struct TermReport<'a> {
    term: &'a str,
    document_frequency: usize,
    idf: f64,
}

#[derive(Serialize)]
struct InspectReport<'a> {
    #[serde(flatten)]
    stats: DocumentStats,
    top_terms: Vec<TermReport<'a>>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; stdout carries results only.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            file,
            query,
            limit,
            scores,
            json,
        } => {
            let text = read_input(&file)?;
            run_search(&text, &query, limit, scores, json)
        }
        Commands::Inspect { file, top, json } => {
            let text = read_input(&file)?;
            run_inspect(&text, top, json)
        }
    }
}

/// Read the whole input, from stdin when `path` is `-`.
fn read_input(path: &Path) -> Result<String> {
    let (raw, source) = if path == Path::new("-") {
        let mut raw = Vec::new();
        io::stdin()
            .read_to_end(&mut raw)
            .context("failed to read stdin")?;
        (raw, "stdin".to_string())
    } else {
        let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        (raw, path.display().to_string())
    };

    debug!(source = %source, bytes = raw.len(), "read input");
    decode_input(raw, &source)
}

/// Input must be UTF-8; the error names the first offending byte offset.
fn decode_input(raw: Vec<u8>, source: &str) -> Result<String> {
    String::from_utf8(raw).map_err(|e| {
        let offset = e.utf8_error().valid_up_to();
        let byte = e.as_bytes()[offset];
        anyhow!(
            "{} is not valid UTF-8: invalid byte 0x{:02x} at offset {}",
            source,
            byte,
            offset
        )
    })
}

fn run_search(text: &str, query: &str, limit: usize, scores: bool, json: bool) -> Result<()> {
    let document = Document::new(text);
    let results = rank_scored(&document, query, limit);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        serde_json::to_writer_pretty(&mut out, &results).context("failed to write JSON")?;
        writeln!(out)?;
        return Ok(());
    }

    let colors = use_colors();
    let terms = query_terms(query);
    for result in &results {
        let line = highlight(colors, result.text, &terms);
        if scores {
            let label = pad_left(&line_label(colors, result.index), 6);
            writeln!(out, "{} {}  {}", score_value(colors, result.score), label, line)?;
        } else {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

fn run_inspect(text: &str, top: usize, json: bool) -> Result<()> {
    let document = Document::new(text);
    let stats = document.stats();

    // Widest-spread terms first; the vocabulary is already in term order,
    // and the stable sort keeps it that way among equal frequencies.
    let mut vocabulary: Vec<_> = document.vocabulary().collect();
    vocabulary.sort_by(|a, b| b.1.cmp(&a.1));
    let top_terms: Vec<TermReport<'_>> = vocabulary
        .into_iter()
        .take(top)
        .map(|(term, df)| TermReport {
            term: term.as_str(),
            document_frequency: df,
            idf: document.idf(term.as_str()),
        })
        .collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        let report = InspectReport { stats, top_terms };
        serde_json::to_writer_pretty(&mut out, &report).context("failed to write JSON")?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "lines:      {}", stats.lines)?;
    writeln!(out, "tokens:     {}", stats.tokens)?;
    writeln!(out, "vocabulary: {}", stats.vocabulary)?;
    if !top_terms.is_empty() {
        writeln!(out)?;
        writeln!(out, "{:<20} {:>6} {:>8}", "term", "df", "idf")?;
        for entry in &top_terms {
            writeln!(
                out,
                "{:<20} {:>6} {:>8.4}",
                entry.term, entry.document_frequency, entry.idf
            )?;
        }
    }
    Ok(())
}
