//! News Sentiment CLI
//!
//! Reads a batch of news articles, runs the sentiment pipeline and prints
//! the chart payload (or the classified items) as JSON on stdout.

mod config;

use std::io::{self, Read, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use sentiment_core::{NewsApiResponse, NewsItem};
use sentiment_services::SentimentPipeline;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::{Args, OutputKind};

/// Accepted input shapes
#[derive(Deserialize)]
#[serde(untagged)]
enum InputDocument {
    Response(NewsApiResponse),
    Items(Vec<NewsItem>),
}

fn main() -> Result<()> {
    // Load environment variables from .env.local file
    if let Err(e) = dotenvy::from_filename(".env.local") {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env.local: {}", e);
        }
    }

    // Initialize logging on stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,sentiment_cli=debug")),
        )
        .init();

    let args = Args::parse();
    args.log_summary();

    let lexicon = args.load_lexicon()?;
    if lexicon.is_empty() {
        warn!("Lexicon is empty; every item will score 0");
    }
    let palette = args.load_palette()?;
    let pipeline = SentimentPipeline::new(lexicon, palette, args.chart_config());

    let items = read_items(&args)?;
    info!("Read {} articles", items.len());

    let output = pipeline.run(&items, &args.source);
    if output.excluded_count() > 0 {
        warn!(
            "{} articles had unreadable timestamps and were left out of the chart",
            output.excluded_count()
        );
    }

    match args.output {
        OutputKind::Chart => write_json(&output.payload, args.pretty),
        OutputKind::Items => write_json(&output.items, args.pretty),
        OutputKind::Full => write_json(&output, args.pretty),
    }
}

fn read_items(args: &Args) -> Result<Vec<NewsItem>> {
    let raw = match args.input_path() {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    parse_items(&raw)
}

fn parse_items(raw: &str) -> Result<Vec<NewsItem>> {
    let document: InputDocument =
        serde_json::from_str(raw).context("Input is neither a news response nor an article list")?;

    match document {
        InputDocument::Response(response) => {
            if response.status == "error" {
                bail!("News response has status \"error\"");
            }
            Ok(response.articles)
        }
        InputDocument::Items(items) => Ok(items),
    }
}

fn write_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if pretty {
        serde_json::to_writer_pretty(&mut handle, value)?;
    } else {
        serde_json::to_writer(&mut handle, value)?;
    }
    writeln!(handle)?;
    Ok(())
}
