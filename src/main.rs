use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use docsearch::cli::{render_catalog, render_outcome, Cli, Commands};
use docsearch::{search, CatalogSource, DocsearchConfig, Matcher};

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let opts = cli.global_opts;
    init_tracing(&opts.log_level);

    let config = match &opts.config {
        Some(path) => DocsearchConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => DocsearchConfig::default(),
    };
    let matcher = Matcher::new(config.matcher.to_match_config())?;

    let source = CatalogSource::resolve(
        opts.catalog.as_deref(),
        opts.listing.as_deref(),
        &config.catalog,
    );
    tracing::debug!(?source, "catalog_source");
    let loaded = source.load(&config.catalog, Local::now().date_naive());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Commands::Search { query, json: true } => {
            let result = matcher.match_catalog(&query, loaded.catalog.documents());
            writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
        }
        Commands::Search { query, json: false } => {
            render_outcome(&mut out, &search(&query, &loaded.catalog, &matcher), &loaded)?;
        }
        Commands::Recommend => {
            render_outcome(&mut out, &search("", &loaded.catalog, &matcher), &loaded)?;
        }
        Commands::List => render_catalog(&mut out, &loaded)?,
    }

    Ok(())
}
