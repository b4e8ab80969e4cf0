//! Pipeline services for news sentiment charts
//!
//! Each stage is a pure function of its input: items are scored against a
//! lexicon, classified into sentiment buckets, grouped into per-source time
//! series and finally packaged for a chart renderer.

pub mod aggregator;
pub mod chart;
pub mod classifier;
pub mod lexicon;
pub mod palette;
pub mod pipeline;
pub mod scorer;

pub use aggregator::{parse_published_at, timestamp_label, Aggregation, SeriesAggregator};
pub use chart::{ChartConfig, ChartDataAdapter};
pub use classifier::SentimentRangeClassifier;
pub use lexicon::Lexicon;
pub use palette::SourcePalette;
pub use pipeline::{PipelineOutput, SentimentPipeline};
pub use scorer::TextSentimentScorer;
