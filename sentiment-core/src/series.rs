//! Per-source series and the chart-ready payload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{DataError, DisplayPattern, SentimentCategory};

/// A single plotted point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    /// Source display name
    pub source: String,
    /// Category-axis value (e.g., "Mar 1")
    pub timestamp_label: String,
    /// Parsed publication instant
    pub published_at: DateTime<Utc>,
    pub sentiment_score: i64,
    pub category: SentimentCategory,
    /// Shortened title for tooltips
    pub title_excerpt: String,
}

/// Time-ordered points for one source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSeries {
    pub source: String,
    pub points: Vec<SeriesPoint>,
}

impl SourceSeries {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            points: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest and largest score in the series
    pub fn score_range(&self) -> Option<(i64, i64)> {
        let min = self.points.iter().map(|p| p.sentiment_score).min()?;
        let max = self.points.iter().map(|p| p.sentiment_score).max()?;
        Some((min, max))
    }
}

/// An item left out of its series, with the reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcludedItem {
    pub source: String,
    pub title: String,
    pub error: DataError,
}

/// Numeric bounds of the score axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisDomain {
    pub min: i64,
    pub max: i64,
}

impl AxisDomain {
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn contains(&self, score: i64) -> bool {
        (self.min..=self.max).contains(&score)
    }

    /// Smallest domain covering both `self` and `score`
    pub fn widened_to(self, score: i64) -> Self {
        Self {
            min: self.min.min(score),
            max: self.max.max(score),
        }
    }
}

/// Horizontal line marking the upper edge of a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub score: i64,
    pub category: SentimentCategory,
    pub label: String,
    pub color: String,
    pub pattern: DisplayPattern,
}

/// Legend row for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub category: SentimentCategory,
    pub label: String,
    pub color: String,
    pub pattern: DisplayPattern,
    pub bound_label: String,
}

/// Line color assigned to a source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceColor {
    pub source: String,
    pub color: String,
}

/// Aggregate sentiment for one source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSummary {
    pub source: String,
    pub item_count: usize,
    pub mean_score: f64,
    pub category: SentimentCategory,
}

/// Everything a renderer needs to draw the sentiment chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPayload {
    pub series: Vec<SourceSeries>,
    pub domain: AxisDomain,
    pub reference_lines: Vec<ReferenceLine>,
    /// Score-axis ticks, ascending
    pub ticks: Vec<i64>,
    pub legend: Vec<LegendEntry>,
    /// One entry per series, same order
    pub source_colors: Vec<SourceColor>,
    pub summaries: Vec<SourceSummary>,
    /// Show every n-th category-axis label
    pub x_tick_interval: usize,
}

impl ChartPayload {
    pub fn total_points(&self) -> usize {
        self.series.iter().map(SourceSeries::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_widening() {
        let domain = AxisDomain::new(-10, 10);
        assert!(domain.contains(-10));
        assert!(domain.contains(10));
        assert!(!domain.contains(11));

        let widened = domain.widened_to(14).widened_to(-12);
        assert_eq!(widened, AxisDomain::new(-12, 14));
        assert_eq!(domain.widened_to(3), domain, "in-range scores leave the domain alone");
    }

    #[test]
    fn test_domain_normalizes_order() {
        assert_eq!(AxisDomain::new(5, -5), AxisDomain { min: -5, max: 5 });
    }

    #[test]
    fn test_empty_series_has_no_range() {
        let series = SourceSeries::new("Reuters");
        assert!(series.is_empty());
        assert_eq!(series.score_range(), None);
    }
}
