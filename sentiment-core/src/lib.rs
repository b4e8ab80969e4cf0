//! Core types for the news sentiment pipeline
//!
//! This crate defines the shared data structures passed between pipeline
//! stages: raw news items, scored and classified items, the sentiment
//! category partition, and the chart-ready payload handed to renderers.

pub mod category;
pub mod error;
pub mod news;
pub mod series;

pub use category::{CategoryMetadata, DisplayPattern, SentimentCategory};
pub use error::{DataError, SentimentError, SentimentResult};
pub use news::{ClassifiedItem, NewsApiResponse, NewsItem, NewsSource, ScoredItem, SourceFilter};
pub use series::{
    AxisDomain, ChartPayload, ExcludedItem, LegendEntry, ReferenceLine, SeriesPoint, SourceColor,
    SourceSeries, SourceSummary,
};
