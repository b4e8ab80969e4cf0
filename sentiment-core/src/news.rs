//! News item structures and the stages derived from them

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::SentimentCategory;

/// Publisher of a news article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsSource {
    /// Machine identifier (e.g., "reuters", "bbc-news"); absent for some feeds
    #[serde(default)]
    pub id: Option<String>,
    /// Display name (e.g., "Reuters", "BBC News")
    pub name: String,
}

/// A news article as delivered by the fetch layer
///
/// `published_at` is kept verbatim. Parsing happens during aggregation so a
/// malformed timestamp only drops that item from its series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    /// Article title
    pub title: String,
    /// Short description; `null` on the wire is read as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Article URL
    pub url: String,
    /// Article thumbnail URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_to_image: Option<String>,
    /// Publication time (ISO-8601)
    pub published_at: String,
    /// Source information
    pub source: NewsSource,
}

impl NewsItem {
    /// Text the scorer sees: title and description joined by a single space
    pub fn scoring_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }

    /// Display name used as the grouping key
    pub fn source_name(&self) -> &str {
        &self.source.name
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `top-headlines` style response document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsApiResponse {
    /// "ok" or "error"
    #[serde(default)]
    pub status: String,
    /// Total number of results available upstream
    #[serde(default)]
    pub total_results: usize,
    /// Articles in this page
    #[serde(default)]
    pub articles: Vec<NewsItem>,
}

/// A news item with its lexicon score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredItem {
    #[serde(flatten)]
    pub item: NewsItem,
    pub sentiment_score: i64,
}

/// A scored item with its resolved category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedItem {
    #[serde(flatten)]
    pub scored: ScoredItem,
    pub category: SentimentCategory,
}

impl ClassifiedItem {
    pub fn item(&self) -> &NewsItem {
        &self.scored.item
    }

    pub fn sentiment_score(&self) -> i64 {
        self.scored.sentiment_score
    }
}

/// Restricts a run to one source id, or lets everything through
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFilter {
    #[default]
    All,
    Source(String),
}

impl SourceFilter {
    pub fn matches(&self, item: &NewsItem) -> bool {
        match self {
            SourceFilter::All => true,
            SourceFilter::Source(id) => item.source.id.as_deref() == Some(id.as_str()),
        }
    }
}

impl fmt::Display for SourceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFilter::All => write!(f, "all"),
            SourceFilter::Source(id) => write!(f, "{}", id),
        }
    }
}

impl std::str::FromStr for SourceFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(SourceFilter::All);
        }
        if s.chars().any(char::is_whitespace) {
            return Err(format!("Invalid source id: {}", s));
        }
        Ok(SourceFilter::Source(s.to_lowercase()))
    }
}
