//! Command-line surface of the `docsearch` binary.
//!
//! Argument parsing and text rendering live here so they can be driven from
//! tests; `main.rs` only wires them to stdout and the tracing subscriber.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::{Document, LoadedCatalog, SearchOutcome};

/// Find documents in a catalog by name, even when the name is misspelled.
#[derive(Parser, Debug)]
#[command(name = "docsearch", version, about, long_about = None)]
pub struct Cli {
    #[clap(flatten)]
    pub global_opts: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug)]
pub struct GlobalOpts {
    /// YAML configuration file.
    #[arg(global = true, long)]
    pub config: Option<PathBuf>,

    /// JSON array of documents. Takes precedence over every other source.
    #[arg(global = true, long)]
    pub catalog: Option<PathBuf>,

    /// Saved repository listing (contents or tree JSON).
    #[arg(global = true, long)]
    pub listing: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(global = true, long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Search the catalog.
    Search {
        query: String,
        /// Print the raw match result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show the recommended reading list.
    Recommend,
    /// List every document in the catalog.
    List,
}

/// Section title plus the load stamp of the catalog it was drawn from.
pub fn render_header(out: &mut impl Write, title: &str, loaded: &LoadedCatalog) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "Last updated: {}", loaded.last_updated())
}

pub fn render_document(out: &mut impl Write, doc: &Document) -> io::Result<()> {
    writeln!(
        out,
        "  [{}] {} ({}, {}, {})",
        doc.id,
        doc.name,
        doc.doc_type,
        doc.category,
        doc.display_size()
    )
}

/// Every document of the loaded catalog.
pub fn render_catalog(out: &mut impl Write, loaded: &LoadedCatalog) -> io::Result<()> {
    render_header(out, "Catalog", loaded)?;
    for doc in loaded.catalog.iter() {
        render_document(out, doc)?;
    }
    Ok(())
}

pub fn render_outcome(
    out: &mut impl Write,
    outcome: &SearchOutcome,
    loaded: &LoadedCatalog,
) -> io::Result<()> {
    match outcome {
        SearchOutcome::Recommendations { documents } => {
            render_header(out, "Recommended reading", loaded)?;
            for doc in documents {
                writeln!(
                    out,
                    "  {} - {}: {}",
                    doc.priority.label(),
                    doc.name,
                    doc.learning_value
                )?;
            }
        }
        SearchOutcome::Matches { exact, similar } => {
            render_header(out, "Results", loaded)?;
            for doc in exact {
                render_document(out, doc)?;
            }
            if !similar.is_empty() {
                writeln!(out, "Similar documents")?;
                for hit in similar {
                    writeln!(out, "  {} ({}% match)", hit.document.name, hit.percent())?;
                }
            }
        }
        SearchOutcome::NotFound { suggestion, .. } => {
            if let Some(message) = outcome.not_found_message() {
                writeln!(out, "{message}")?;
            }
            writeln!(
                out,
                "Did you mean: {} ({}% match)",
                suggestion.document.name,
                suggestion.percent()
            )?;
        }
        SearchOutcome::NoResults { query } => {
            writeln!(out, "No documents match \"{query}\"")?;
        }
    }
    Ok(())
}
