//! Series Aggregator
//!
//! Groups classified items by source display name and orders each group
//! chronologically for plotting.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use indexmap::IndexMap;
use sentiment_core::{
    ClassifiedItem, DataError, ExcludedItem, SentimentCategory, SeriesPoint, SourceSeries,
    SourceSummary,
};
use tracing::{debug, warn};

/// Default excerpt length, in characters
pub const DEFAULT_EXCERPT_CHARS: usize = 30;

// `%#z` accepts `Z`, `+hh:mm`, `+hhmm` and `+hh`
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Result of grouping a batch of items
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    /// One series per distinct source, in order of first appearance
    pub series: Vec<SourceSeries>,
    /// Items dropped because their timestamp could not be read
    pub excluded: Vec<ExcludedItem>,
}

impl Aggregation {
    pub fn excluded_count(&self) -> usize {
        self.excluded.len()
    }

    pub fn total_points(&self) -> usize {
        self.series.iter().map(SourceSeries::len).sum()
    }
}

/// Builds per-source time series from classified items
#[derive(Debug, Clone)]
pub struct SeriesAggregator {
    excerpt_chars: usize,
}

impl Default for SeriesAggregator {
    fn default() -> Self {
        Self::new(DEFAULT_EXCERPT_CHARS)
    }
}

impl SeriesAggregator {
    pub fn new(excerpt_chars: usize) -> Self {
        Self { excerpt_chars }
    }

    /// Group by `source.name`, then stable-sort each group by publication time
    pub fn aggregate(&self, items: &[ClassifiedItem]) -> Aggregation {
        let mut groups: IndexMap<&str, Vec<(DateTime<Utc>, &ClassifiedItem)>> = IndexMap::new();
        let mut excluded = Vec::new();

        for classified in items {
            let item = classified.item();
            // Register the source before parsing so it survives even if every item is dropped
            let group = groups.entry(item.source_name()).or_default();

            match parse_published_at(&item.published_at) {
                Ok(published_at) => group.push((published_at, classified)),
                Err(error) => {
                    warn!(
                        "Excluding '{}' from {} series: {}",
                        item.title, item.source.name, error
                    );
                    excluded.push(ExcludedItem {
                        source: item.source.name.clone(),
                        title: item.title.clone(),
                        error,
                    });
                }
            }
        }

        let series: Vec<SourceSeries> = groups
            .into_iter()
            .map(|(source, mut entries)| {
                // sort_by_key is stable: equal instants keep input order
                entries.sort_by_key(|(published_at, _)| *published_at);
                SourceSeries {
                    source: source.to_string(),
                    points: entries
                        .into_iter()
                        .map(|(published_at, classified)| self.build_point(published_at, classified))
                        .collect(),
                }
            })
            .collect();

        debug!(
            "Aggregated {} items into {} series ({} excluded)",
            items.len(),
            series.len(),
            excluded.len()
        );

        Aggregation { series, excluded }
    }

    /// Mean score per source, in order of first appearance
    pub fn summarize(&self, items: &[ClassifiedItem]) -> Vec<SourceSummary> {
        let mut totals: IndexMap<&str, (usize, i64)> = IndexMap::new();
        for classified in items {
            let entry = totals.entry(classified.item().source_name()).or_default();
            entry.0 += 1;
            entry.1 = entry.1.saturating_add(classified.sentiment_score());
        }

        totals
            .into_iter()
            .map(|(source, (item_count, total))| {
                let mean_score = total as f64 / item_count as f64;
                SourceSummary {
                    source: source.to_string(),
                    item_count,
                    mean_score,
                    category: SentimentCategory::from_real(mean_score),
                }
            })
            .collect()
    }

    fn build_point(&self, published_at: DateTime<Utc>, classified: &ClassifiedItem) -> SeriesPoint {
        let item = classified.item();
        SeriesPoint {
            source: item.source.name.clone(),
            timestamp_label: timestamp_label(&published_at),
            published_at,
            sentiment_score: classified.sentiment_score(),
            category: classified.category,
            title_excerpt: title_excerpt(&item.title, self.excerpt_chars),
        }
    }
}

/// Parse an ISO-8601 timestamp
///
/// Values without an offset are read as UTC; a bare date is midnight UTC.
pub fn parse_published_at(raw: &str) -> Result<DateTime<Utc>, DataError> {
    let trimmed = raw.trim();
    let rfc_err = match DateTime::parse_from_rfc3339(trimmed) {
        Ok(dt) => return Ok(dt.with_timezone(&Utc)),
        Err(e) => e,
    };

    OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(trimmed, format).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|| {
            NAIVE_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
                .map(|naive| naive.and_utc())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        })
        .ok_or_else(|| DataError::unparseable_timestamp(raw, rfc_err.to_string()))
}

/// Short category-axis label, e.g. "Mar 1"
pub fn timestamp_label(published_at: &DateTime<Utc>) -> String {
    published_at.format("%b %-d").to_string()
}

fn title_excerpt(title: &str, max_chars: usize) -> String {
    if title.chars().count() <= max_chars {
        return title.to_string();
    }
    let mut excerpt: String = title.chars().take(max_chars).collect();
    excerpt.push_str("...");
    excerpt
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentiment_core::{NewsItem, NewsSource, ScoredItem};

    fn create_test_item(title: &str, source: &str, published_at: &str, score: i64) -> ClassifiedItem {
        ClassifiedItem {
            scored: ScoredItem {
                item: NewsItem {
                    title: title.to_string(),
                    description: String::new(),
                    url: format!("https://example.com/{}", title.replace(' ', "-")),
                    url_to_image: None,
                    published_at: published_at.to_string(),
                    source: NewsSource {
                        id: Some(source.to_lowercase()),
                        name: source.to_string(),
                    },
                },
                sentiment_score: score,
            },
            category: SentimentCategory::from_score(score),
        }
    }

    #[test]
    fn test_groups_by_source_name() {
        let items = vec![
            create_test_item("a", "Reuters", "2024-03-02T10:00:00Z", 1),
            create_test_item("b", "CNN", "2024-03-01T10:00:00Z", -1),
            create_test_item("c", "Reuters", "2024-03-01T10:00:00Z", 3),
            create_test_item("d", "Some Blog", "2024-03-05T10:00:00Z", 0),
        ];

        let aggregation = SeriesAggregator::default().aggregate(&items);

        let sources: Vec<_> = aggregation.series.iter().map(|s| s.source.as_str()).collect();
        assert_eq!(sources, vec!["Reuters", "CNN", "Some Blog"], "first-appearance order");
        assert_eq!(aggregation.total_points(), items.len());
        assert_eq!(aggregation.excluded_count(), 0);

        let reuters = &aggregation.series[0];
        let titles: Vec<_> = reuters.points.iter().map(|p| p.title_excerpt.as_str()).collect();
        assert_eq!(titles, vec!["c", "a"], "sorted by publication time");
    }

    #[test]
    fn test_same_id_different_names_are_separate() {
        let mut items = vec![
            create_test_item("a", "BBC News", "2024-03-01T10:00:00Z", 0),
            create_test_item("b", "BBC NEWS", "2024-03-01T11:00:00Z", 0),
        ];
        items[1].scored.item.source.id = Some("bbc news".to_string());

        let aggregation = SeriesAggregator::default().aggregate(&items);
        assert_eq!(aggregation.series.len(), 2);
    }

    #[test]
    fn test_sort_is_stable() {
        let items = vec![
            create_test_item("first", "Reuters", "2024-03-01T10:00:00Z", 0),
            create_test_item("later", "Reuters", "2024-03-03T10:00:00Z", 0),
            create_test_item("second", "Reuters", "2024-03-01T10:00:00Z", 0),
            create_test_item("third", "Reuters", "2024-03-01T12:00:00+02:00", 0),
        ];

        let aggregation = SeriesAggregator::default().aggregate(&items);
        let titles: Vec<_> = aggregation.series[0]
            .points
            .iter()
            .map(|p| p.title_excerpt.as_str())
            .collect();
        assert_eq!(titles, vec!["first", "second", "third", "later"]);
    }

    #[test]
    fn test_bad_timestamp_is_excluded_but_source_kept() {
        let items = vec![
            create_test_item("good", "Reuters", "2024-03-01T10:00:00Z", 1),
            create_test_item("bad", "Reuters", "yesterday", 1),
            create_test_item("lonely", "CNN", "not a date", -1),
        ];

        let aggregation = SeriesAggregator::default().aggregate(&items);

        assert_eq!(aggregation.excluded_count(), 2);
        assert_eq!(aggregation.series.len(), 2, "every input source keeps a series");
        assert_eq!(aggregation.series[0].len(), 1);
        assert!(aggregation.series[1].is_empty());
        assert_eq!(aggregation.excluded[1].source, "CNN");
        assert!(matches!(
            &aggregation.excluded[0].error,
            DataError::UnparseableTimestamp { value, .. } if value == "yesterday"
        ));
    }

    #[test]
    fn test_empty_input() {
        let aggregation = SeriesAggregator::default().aggregate(&[]);
        assert!(aggregation.series.is_empty());
        assert_eq!(aggregation.excluded_count(), 0);
    }

    #[test]
    fn test_parse_published_at() {
        let utc = parse_published_at("2024-03-01T10:00:00Z").unwrap();
        let offset = parse_published_at("2024-03-01T12:00:00+02:00").unwrap();
        let naive = parse_published_at("2024-03-01T10:00:00").unwrap();
        assert_eq!(utc, offset);
        assert_eq!(utc, naive);
        assert!(parse_published_at("").is_err());
        assert!(parse_published_at("2024-13-01T10:00:00Z").is_err());
        assert!(parse_published_at("2024-03-01T10").is_err());
        assert!(parse_published_at("March 1st").is_err());
    }

    #[test]
    fn test_parse_other_iso_forms() {
        let expected = parse_published_at("2024-03-01T10:00:00Z").unwrap();
        for raw in [
            "2024-03-01T10:00Z",
            "2024-03-01T12:00+02:00",
            "2024-03-01T12:00:00+0200",
            "2024-03-01T12:00:00.000+0200",
            "2024-03-01T05:00:00-05",
            "2024-03-01T10:00",
            " 2024-03-01T10:00:00.000 ",
        ] {
            assert_eq!(parse_published_at(raw), Ok(expected), "failed on {:?}", raw);
        }

        let midnight = parse_published_at("2024-03-01").unwrap();
        assert_eq!(midnight, parse_published_at("2024-03-01T00:00:00Z").unwrap());
        assert_eq!(timestamp_label(&midnight), "Mar 1");
    }

    #[test]
    fn test_timestamp_label() {
        let ts = parse_published_at("2024-03-01T23:30:00-05:00").unwrap();
        assert_eq!(timestamp_label(&ts), "Mar 2", "labels use the UTC calendar day");
        let ts = parse_published_at("2024-12-25T08:00:00Z").unwrap();
        assert_eq!(timestamp_label(&ts), "Dec 25");
        assert_eq!(timestamp_label(&ts), timestamp_label(&ts));
    }

    #[test]
    fn test_title_excerpt() {
        assert_eq!(title_excerpt("Short title", 30), "Short title");
        assert_eq!(
            title_excerpt("Central bank signals further rate cuts ahead", 30),
            "Central bank signals further r..."
        );
        assert_eq!(title_excerpt("Zürich café ümlaut", 5), "Züric...");
    }

    #[test]
    fn test_summarize() {
        let items = vec![
            create_test_item("a", "Reuters", "2024-03-01T10:00:00Z", 4),
            create_test_item("b", "CNN", "2024-03-01T10:00:00Z", -6),
            create_test_item("c", "Reuters", "2024-03-02T10:00:00Z", 1),
        ];

        let summaries = SeriesAggregator::default().summarize(&items);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].source, "Reuters");
        assert_eq!(summaries[0].item_count, 2);
        assert!((summaries[0].mean_score - 2.5).abs() < 1e-9);
        assert_eq!(summaries[0].category, SentimentCategory::Positive);
        assert_eq!(summaries[1].category, SentimentCategory::VeryNegative);
    }

    #[test]
    fn test_summarize_saturates_huge_scores() {
        let items = vec![
            create_test_item("a", "Reuters", "2024-03-01T10:00:00Z", i64::MAX),
            create_test_item("b", "Reuters", "2024-03-02T10:00:00Z", i64::MAX),
        ];

        let summaries = SeriesAggregator::default().summarize(&items);
        assert_eq!(summaries[0].item_count, 2);
        assert!(summaries[0].mean_score > 0.0);
        assert_eq!(summaries[0].category, SentimentCategory::VeryPositive);
    }
}
