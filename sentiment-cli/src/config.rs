//! Command-line arguments and the pipeline configuration derived from them

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sentiment_core::SourceFilter;
use sentiment_services::{ChartConfig, Lexicon, SourcePalette};
use tracing::{debug, info};

/// News sentiment charting - scores headlines and builds per-source series
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// NewsAPI-style JSON document or array of articles (reads stdin when omitted or "-")
    pub input: Option<PathBuf>,

    /// JSON lexicon file ({"word": weight}); built-in word lists when omitted
    #[arg(short, long, env = "SENTIMENT_LEXICON")]
    pub lexicon: Option<PathBuf>,

    /// JSON source color file ({"Source Name": "color"})
    #[arg(short, long, env = "SENTIMENT_PALETTE")]
    pub palette: Option<PathBuf>,

    /// Only include one source id (e.g. "reuters", "bbc-news"), or "all"
    #[arg(short, long, env = "SENTIMENT_SOURCE", default_value = "all")]
    pub source: SourceFilter,

    /// Lower bound of the score axis
    #[arg(long, default_value_t = -10, allow_hyphen_values = true)]
    pub domain_min: i64,

    /// Upper bound of the score axis
    #[arg(long, default_value_t = 10, allow_hyphen_values = true)]
    pub domain_max: i64,

    /// Title characters kept in chart tooltips
    #[arg(long, default_value_t = 30)]
    pub excerpt_chars: usize,

    /// What to print
    #[arg(short, long, value_enum, default_value_t = OutputKind::Chart)]
    pub output: OutputKind,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputKind {
    /// Chart-ready payload only
    Chart,
    /// Classified items for card/list display
    Items,
    /// Items, payload and excluded items
    Full,
}

impl Args {
    pub fn chart_config(&self) -> ChartConfig {
        ChartConfig {
            domain_min: self.domain_min,
            domain_max: self.domain_max,
            excerpt_chars: self.excerpt_chars,
            ..ChartConfig::default()
        }
    }

    pub fn load_lexicon(&self) -> Result<Lexicon> {
        match &self.lexicon {
            Some(path) => Lexicon::from_file(path)
                .with_context(|| format!("Failed to load lexicon from {}", path.display())),
            None => {
                debug!("Using built-in lexicon");
                Ok(Lexicon::builtin())
            }
        }
    }

    pub fn load_palette(&self) -> Result<SourcePalette> {
        match &self.palette {
            Some(path) => SourcePalette::from_file(path)
                .with_context(|| format!("Failed to load palette from {}", path.display())),
            None => Ok(SourcePalette::default()),
        }
    }

    /// `None` means stdin
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }

    pub fn log_summary(&self) {
        info!(
            "Source filter: {}, domain [{}, {}], output {:?}",
            self.source, self.domain_min, self.domain_max, self.output
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["sentiment-cli"]).unwrap();
        assert_eq!(args.source, SourceFilter::All);
        assert_eq!(args.output, OutputKind::Chart);
        assert!(args.input_path().is_none());

        let config = args.chart_config();
        assert_eq!(config.domain_min, -10);
        assert_eq!(config.domain_max, 10);
        assert_eq!(config.target_x_ticks, 7);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "sentiment-cli",
            "news.json",
            "--source",
            "bbc-news",
            "--domain-min",
            "-20",
            "--output",
            "items",
            "--pretty",
        ])
        .unwrap();

        assert_eq!(args.source, SourceFilter::Source("bbc-news".to_string()));
        assert_eq!(args.domain_min, -20);
        assert_eq!(args.output, OutputKind::Items);
        assert!(args.pretty);
        assert_eq!(args.input_path(), Some(&PathBuf::from("news.json")));
    }

    #[test]
    fn test_dash_reads_stdin() {
        let args = Args::try_parse_from(["sentiment-cli", "-"]).unwrap();
        assert!(args.input_path().is_none());
    }
}
